use chrono::NaiveDateTime;
use crawlscope_core::classify::{GOOGLEBOT_FAMILY, SignatureRegistry};
use crawlscope_core::ingest::Analyzer;
use std::path::PathBuf;

pub const GOOGLEBOT_UA: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
pub const GPTBOT_UA: &str = "Mozilla/5.0 (compatible; GPTBot/1.2; +https://openai.com/gptbot)";
pub const BROWSER_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Builder for one Combined Log Format line.
#[derive(Debug, Clone)]
pub struct LogLine {
    ip: String,
    time: String,
    url: String,
    status: String,
    agent: String,
}

impl LogLine {
    pub fn get(url: &str) -> Self {
        Self {
            ip: "203.0.113.9".to_string(),
            time: "10/Oct/2024:13:55:36".to_string(),
            url: url.to_string(),
            status: "200".to_string(),
            agent: BROWSER_UA.to_string(),
        }
    }

    pub fn at(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn agent(mut self, agent: &str) -> Self {
        self.agent = agent.to_string();
        self
    }

    pub fn from_ip(mut self, ip: &str) -> Self {
        self.ip = ip.to_string();
        self
    }

    pub fn render(&self) -> String {
        format!(
            r#"{} - - [{} +0000] "GET {} HTTP/1.1" {} 1024 "-" "{}""#,
            self.ip, self.time, self.url, self.status, self.agent
        )
    }
}

/// Analyzer with the built-in registry and Googlebot family.
pub fn analyzer() -> Analyzer {
    Analyzer::new(
        SignatureRegistry::builtin(),
        GOOGLEBOT_FAMILY.iter().map(|s| s.to_string()).collect(),
    )
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Reference time for reports: two days after the fixture's first request.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2024-10-12 14:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
}
