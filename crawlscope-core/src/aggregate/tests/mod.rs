
use crate::parse::LogRecord;
use chrono::NaiveDateTime;

/// `ts` uses the log layout, e.g. `10/Oct/2024:13:55:36`.
pub(super) fn record(url: &str, status: &str, ts: Option<&str>, ua: &str) -> LogRecord {
    LogRecord {
        ip: "192.0.2.10".to_string(),
        identity: "-".to_string(),
        authuser: "-".to_string(),
        timestamp: ts.map(at),
        method: if url.is_empty() { String::new() } else { "GET".to_string() },
        url: url.to_string(),
        status: status.to_string(),
        size: "512".to_string(),
        referer: Some("-".to_string()),
        user_agent: Some(ua.to_string()),
    }
}

pub(super) fn at(ts: &str) -> NaiveDateTime {
    crate::parse::parse_timestamp(ts).unwrap()
}
