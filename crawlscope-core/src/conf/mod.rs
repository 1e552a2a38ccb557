//! Optional TOML configuration.
//!
//! Every field has a default, so running without a config file is the same
//! as loading an empty one.

pub mod error;
mod loader;
pub mod types;


pub use error::ConfigError;
pub use loader::{load_config, load_or_default, parse_config, validate_config};
pub use types::{
    BotsConfig, CrawlscopeConfig, DEFAULT_CONFIG_FILE, DEFAULT_PROGRESS_INTERVAL, InputConfig,
    OutputConfig,
};
