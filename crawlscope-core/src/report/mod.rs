//! Read-only projections over a frozen aggregation state.
//!
//! frozen state
//! ReportContext (+ bot config, registry, reference time)
//! Summary / rankings / table rows
//! text, JSON, CSV
//!
//! Nothing in here mutates the state or looks at the wall clock, so the same
//! context always renders the same artifacts.

mod artifacts;
mod context;
mod error;
pub mod format;
mod json;
mod ranking;
mod summary;
pub mod tables;
mod text;

#[cfg(test)]
mod tests;

pub use artifacts::Artifacts;
pub use context::ReportContext;
pub use error::ReportError;
pub use json::{JsonBot, JsonReport, Ordered, json_report, render_json};
pub use ranking::{
    BotDetail, BotRank, ErrorStatusSummary, StatusShare, bot_detail, bot_ranking, error_summary,
    llm_bot_ranking, search_bot_ranking, status_distribution, top_urls,
};
pub use summary::{Summary, summary};
pub use text::render_text;
