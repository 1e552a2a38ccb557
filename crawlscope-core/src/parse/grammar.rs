use crate::parse::record::{LogRecord, ParseFailure};
use crate::parse::timestamp::parse_timestamp;
use once_cell::sync::Lazy;
use regex::Regex;

// host ident authuser [date] "request" status bytes ["referer" "user-agent"]
// 127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /apache_pb.gif HTTP/1.0" 200 2326
static ACCESS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^(?P<ip>[0-9A-Fa-f.:]+)\s+"#,
        r#"(?P<identity>\S+)\s+"#,
        r#"(?P<user>\S+)\s+"#,
        r#"\[(?P<time>[^\]]+)\]\s+"#,
        r#""(?P<request>[^"]*)"\s+"#,
        r#"(?P<status>\d{3})\s+"#,
        r#"(?P<size>-|\d+)\s*"#,
        r#"(?:"(?P<referer>[^"]*)")?\s*"#,
        r#"(?:"(?P<agent>[^"]*)")?"#,
    ))
    .expect("access log grammar is a valid regex")
});

/// Parse one access log line.
///
/// A line is accepted when its prefix matches the Common Log Format, with
/// the Combined referer and user-agent fields optional. Content after the
/// last recognised field is ignored.
pub fn parse(line: &str) -> Result<LogRecord, ParseFailure> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseFailure::Blank);
    }

    let caps = ACCESS_LINE.captures(line).ok_or(ParseFailure::Grammar)?;
    let field = |name: &str| caps.name(name).map(|m| m.as_str()).unwrap_or("");

    let mut request = field("request").split_whitespace();
    let (method, url) = match (request.next(), request.next()) {
        (Some(method), Some(url)) => (method.to_string(), url.to_string()),
        _ => (String::new(), String::new()),
    };

    Ok(LogRecord {
        ip: field("ip").to_string(),
        identity: field("identity").to_string(),
        authuser: field("user").to_string(),
        timestamp: parse_timestamp(field("time")),
        method,
        url,
        status: field("status").to_string(),
        size: field("size").to_string(),
        referer: caps.name("referer").map(|m| m.as_str().to_string()),
        user_agent: caps.name("agent").map(|m| m.as_str().to_string()),
    })
}
