use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// One parsed access log line.
///
/// `method` and `url` are empty when the quoted request field holds fewer
/// than two tokens. The record still counts as parsed in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub ip: String,
    pub identity: String,
    pub authuser: String,
    /// `None` when the bracketed time did not match `DD/Mon/YYYY:HH:MM:SS`.
    pub timestamp: Option<NaiveDateTime>,
    pub method: String,
    pub url: String,
    /// Three digit status code, kept as text.
    pub status: String,
    /// `-` or a byte count, kept as text.
    pub size: String,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
}

impl LogRecord {
    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date())
    }

    /// The user agent, or `""` when the line carried none.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("blank line")]
    Blank,

    #[error("line does not match the common/combined log grammar")]
    Grammar,
}
