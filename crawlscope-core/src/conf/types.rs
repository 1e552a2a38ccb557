use crate::classify::{
    BotSignature, GOOGLEBOT_FAMILY, LLM_BOTS, SEARCH_BOTS, SignatureError, SignatureRegistry,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "crawlscope.toml";
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 10_000;

const RANKING_COLUMNS: &[&str] = &["Googlebot", "GPTBot", "ClaudeBot", "Bingbot"];

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrawlscopeConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub bots: BotsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Lines between two progress notifications.
    pub progress_interval: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Output directory and the file name of each artifact inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub text: String,
    pub json: String,
    pub url_ranking: String,
    pub error_urls: String,
    pub googlebot: String,
    pub llm_comparison: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("reports"),
            text: "seo_report.txt".to_string(),
            json: "seo_report.json".to_string(),
            url_ranking: "urls_ranking.csv".to_string(),
            error_urls: "urls_with_errors.csv".to_string(),
            googlebot: "googlebot_analysis.csv".to_string(),
            llm_comparison: "llm_bots_comparison.csv".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    pub fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = dir.as_ref().to_path_buf();
        self
    }
}

/// Which bot labels feed which report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotsConfig {
    /// Columns of the LLM comparison table, in order.
    pub llm: Vec<String>,
    /// Labels summed for crawl depth and the Googlebot table.
    pub googlebot_family: Vec<String>,
    /// Per-bot count columns of the URL ranking table.
    pub ranking_columns: Vec<String>,
    pub search: Vec<String>,
    /// Extra signatures, checked before the built-in ones.
    pub signatures: Vec<BotSignature>,
}

impl Default for BotsConfig {
    fn default() -> Self {
        Self {
            llm: owned(LLM_BOTS),
            googlebot_family: owned(GOOGLEBOT_FAMILY),
            ranking_columns: owned(RANKING_COLUMNS),
            search: owned(SEARCH_BOTS),
            signatures: Vec::new(),
        }
    }
}

impl BotsConfig {
    pub fn registry(&self) -> Result<SignatureRegistry, SignatureError> {
        SignatureRegistry::with_extra(self.signatures.clone())
    }

    pub fn is_llm(&self, bot: &str) -> bool {
        self.llm.iter().any(|name| name == bot)
    }

    pub fn is_search(&self, bot: &str) -> bool {
        self.search.iter().any(|name| name == bot)
    }
}
