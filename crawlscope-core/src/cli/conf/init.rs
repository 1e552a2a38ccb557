use crate::conf::CrawlscopeConfig;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Write the default configuration to `path`. Never overwrites.
pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let text = default_config_text()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("failed to create {}", path.display()))?;

    println!("✔ Initialized crawlscope config in {}", path.display());
    println!();
    println!("Next steps:");
    println!("  crawlscope config check {}", path.display());
    println!("  crawlscope analyze --config {} access.log", path.display());

    Ok(())
}

/// The default configuration as TOML.
pub fn default_config_text() -> Result<String> {
    toml::to_string_pretty(&CrawlscopeConfig::default()).context("failed to render default config")
}
