mod artifacts_tests;
mod format_tests;
mod json_tests;

use crate::aggregate::{AggregationState, FrozenState};
use crate::classify::SignatureRegistry;
use crate::parse::{ParseFailure, parse, parse_timestamp};
use chrono::NaiveDateTime;

pub(super) const GOOGLEBOT_UA: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
pub(super) const GPTBOT_UA: &str =
    "Mozilla/5.0 AppleWebKit/537.36 (KHTML, like Gecko; compatible; GPTBot/1.0; +https://openai.com/gptbot)";
pub(super) const CLAUDEBOT_UA: &str = "Mozilla/5.0 (compatible; ClaudeBot/1.0; +claudebot@anthropic.com)";
pub(super) const BINGBOT_UA: &str = "Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)";
pub(super) const BROWSER_UA: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36";

/// One combined-format line. `ts` uses the log layout without offset.
pub(super) fn line(ts: &str, url: &str, status: &str, ua: &str) -> String {
    format!(r#"203.0.113.7 - - [{ts} +0000] "GET {url} HTTP/1.1" {status} 1024 "-" "{ua}""#)
}

pub(super) fn at(ts: &str) -> NaiveDateTime {
    parse_timestamp(ts).unwrap()
}

pub(super) fn frozen<S: AsRef<str>>(lines: &[S]) -> FrozenState {
    let registry = SignatureRegistry::builtin();
    let mut state = AggregationState::new();

    for line in lines {
        match parse(line.as_ref()) {
            Ok(record) => state.update(&record, registry.classify(record.user_agent())),
            Err(ParseFailure::Blank) => state.record_blank(),
            Err(ParseFailure::Grammar) => state.record_rejected(),
        }
    }

    state.freeze()
}

/// The three-line scenario: Googlebot and GPTBot on `/a`, a browser 404 on `/b`.
pub(super) fn three_lines() -> Vec<String> {
    vec![
        line("10/Oct/2024:13:55:36", "/a", "200", GOOGLEBOT_UA),
        line("10/Oct/2024:14:02:11", "/a", "200", GPTBOT_UA),
        line("10/Oct/2024:14:30:00", "/b", "404", BROWSER_UA),
    ]
}
