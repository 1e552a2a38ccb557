use crate::conf::ConfigError;
use crate::report::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop an analysis run.
///
/// Bad lines never end up here: they are tallied and skipped.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("cannot read log source {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid input pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("input pattern {pattern} matched no files")]
    NoMatch { pattern: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("analysis worker panicked")]
    Worker,
}

impl AnalyzeError {
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Source {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
