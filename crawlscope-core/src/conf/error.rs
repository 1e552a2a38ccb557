use crate::classify::SignatureError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // Validation
    #[error("input.progress_interval must be greater than zero")]
    ZeroProgressInterval,

    #[error("bots.llm must name at least one bot")]
    EmptyLlmSet,

    #[error("bots.{field} contains an empty bot name")]
    EmptyBotName { field: &'static str },

    #[error("output.{field} must not be empty")]
    EmptyFileName { field: &'static str },

    #[error("invalid bot signatures: {0}")]
    Signatures(#[from] SignatureError),
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
