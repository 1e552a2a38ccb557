use crate::conf::load_or_default;
use anyhow::Context;
use std::path::PathBuf;

/// Print the effective signature registry, first match wins.
pub fn signatures(config: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_or_default(config.as_deref()).context("failed to load config")?;
    let registry = config.bots.registry()?;

    let width = registry
        .signatures()
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(0);

    for (i, signature) in registry.signatures().iter().enumerate() {
        let mut tags = Vec::new();
        if config.bots.is_search(&signature.name) {
            tags.push("search");
        }
        if config.bots.is_llm(&signature.name) {
            tags.push("llm");
        }

        println!(
            "{:2}. {:<width$}  {:<24} {}",
            i + 1,
            signature.name,
            signature.pattern,
            tags.join(",")
        );
    }

    Ok(())
}
