//! The four CSV tables.
//!
//! Each table has a typed row builder that reads the frozen state, and a
//! `render_*` function that writes a header plus those rows through the
//! `csv` crate (CRLF line endings, minimal quoting).

mod error_urls;
mod googlebot;
mod llm;
mod url_ranking;

pub use error_urls::{ErrorClass, ErrorUrlRow, error_url_rows, render_error_urls};
pub use googlebot::{CrawlPriority, GooglebotRow, googlebot_rows, render_googlebot};
pub use llm::{LlmRow, llm_rows, render_llm_comparison};
pub use url_ranking::{UrlRankingRow, render_url_ranking, url_ranking_rows};

use crate::report::error::ReportError;

/// A row that knows how to lay itself out as CSV fields.
pub(crate) trait TableRow {
    fn fields(&self) -> Vec<String>;
}

pub(crate) fn render_table<R: TableRow>(
    header: &[String],
    rows: &[R],
) -> Result<String, ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
