use crate::conf::error::ConfigError;
use crate::conf::types::{CrawlscopeConfig, DEFAULT_CONFIG_FILE};
use std::fs;
use std::path::Path;

/// Read, parse and validate the config file at `path`.
pub fn load_config(path: &Path) -> Result<CrawlscopeConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let text = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = parse_config(&text, path)?;

    //--------------------------------------------------------------------------
    // Semantic validation
    //--------------------------------------------------------------------------
    validate_config(&config)?;

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Load `path` if given, else `crawlscope.toml` from the working directory
/// when present, else the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<CrawlscopeConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let implicit = Path::new(DEFAULT_CONFIG_FILE);
            if implicit.is_file() {
                load_config(implicit)
            } else {
                Ok(CrawlscopeConfig::default())
            }
        }
    }
}

pub fn parse_config(text: &str, path: &Path) -> Result<CrawlscopeConfig, ConfigError> {
    toml::from_str(text).map_err(|e| ConfigError::parse(path, e))
}

pub fn validate_config(config: &CrawlscopeConfig) -> Result<(), ConfigError> {
    if config.input.progress_interval == 0 {
        return Err(ConfigError::ZeroProgressInterval);
    }

    let bots = &config.bots;
    if bots.llm.is_empty() {
        return Err(ConfigError::EmptyLlmSet);
    }

    let lists = [
        ("llm", &bots.llm),
        ("googlebot_family", &bots.googlebot_family),
        ("ranking_columns", &bots.ranking_columns),
        ("search", &bots.search),
    ];
    for (field, names) in lists {
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::EmptyBotName { field });
        }
    }

    let out = &config.output;
    let files = [
        ("text", &out.text),
        ("json", &out.json),
        ("url_ranking", &out.url_ranking),
        ("error_urls", &out.error_urls),
        ("googlebot", &out.googlebot),
        ("llm_comparison", &out.llm_comparison),
    ];
    for (field, name) in files {
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyFileName { field });
        }
    }

    // Compiles the full registry, so shadowing orders are caught here too.
    bots.registry()?;

    Ok(())
}
