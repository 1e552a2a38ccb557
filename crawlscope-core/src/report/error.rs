use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to encode CSV table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to flush CSV table: {0}")]
    Flush(#[from] std::io::Error),

    #[error("CSV table is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
