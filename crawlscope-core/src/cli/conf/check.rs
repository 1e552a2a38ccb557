use crate::classify::SignatureError;
use crate::conf::error::ConfigError;
use crate::conf::load_config;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            let registry = cfg.bots.registry()?;
            println!("✔ Config loaded successfully");
            println!(
                "✔ {} signatures ({} custom)",
                registry.len(),
                cfg.bots.signatures.len()
            );
            println!("✔ {} LLM bots", cfg.bots.llm.len());
            println!("✔ {} search bots", cfg.bots.search.len());
            println!("✔ reports go to {}", cfg.output.dir.display());
            Ok(())
        }
        Err(err) => {
            print_config_error(&err, plain);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError, plain: bool) {
    if plain {
        eprintln!("{err}");
    } else {
        eprintln!();
        eprintln!("{}: {}", "error".red().bold(), err);
    }
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        //---------------------------------------------------------------------
        // Input / output
        //---------------------------------------------------------------------
        ConfigError::ZeroProgressInterval => Some(
            "Progress is reported every N lines, so N must be at least 1.\n\
             \n\
             Example:\n\
             \n\
             [input]\n\
             progress_interval = 10000",
        ),

        ConfigError::EmptyFileName { .. } => Some(
            "Every report needs a file name. Remove the key to use the default.",
        ),

        //---------------------------------------------------------------------
        // Bot sets
        //---------------------------------------------------------------------
        ConfigError::EmptyLlmSet => Some(
            "The LLM comparison report needs at least one LLM bot.\n\
             \n\
             Example:\n\
             \n\
             [bots]\n\
             llm = [\"GPTBot\", \"ClaudeBot\", \"ChatGPT-User\"]",
        ),

        ConfigError::EmptyBotName { .. } => Some(
            "Bot lists hold signature names such as \"Googlebot\". Remove the empty entry.",
        ),

        //---------------------------------------------------------------------
        // Signatures
        //---------------------------------------------------------------------
        ConfigError::Signatures(SignatureError::Shadowed { .. }) => Some(
            "Signatures are tried in order and the first match wins.\n\
             \n\
             A pattern that is contained in a later pattern hides it. Custom\n\
             signatures are tried before the built-in ones, so a custom pattern\n\
             must not be part of any built-in pattern (\"Google\" would hide\n\
             \"Googlebot\"). List more specific custom signatures first.",
        ),

        ConfigError::Signatures(SignatureError::Empty { .. }) => Some(
            "Each signature needs a name and a pattern.\n\
             \n\
             Example:\n\
             \n\
             [[bots.signatures]]\n\
             name    = \"PerplexityBot\"\n\
             pattern = \"PerplexityBot\"",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}
