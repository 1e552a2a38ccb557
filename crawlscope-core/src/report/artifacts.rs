use crate::conf::OutputConfig;
use crate::error::AnalyzeError;
use crate::report::context::ReportContext;
use crate::report::error::ReportError;
use crate::report::json::render_json;
use crate::report::tables::{
    render_error_urls, render_googlebot, render_llm_comparison, render_url_ranking,
};
use crate::report::text::render_text;
use std::fs;
use std::path::PathBuf;

/// All six rendered reports, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub text: String,
    pub json: String,
    pub url_ranking: String,
    pub error_urls: String,
    pub googlebot: String,
    pub llm_comparison: String,
}

impl Artifacts {
    pub fn build(ctx: &ReportContext<'_>) -> Result<Self, ReportError> {
        Ok(Self {
            text: render_text(ctx),
            json: render_json(ctx)?,
            url_ranking: render_url_ranking(ctx)?,
            error_urls: render_error_urls(ctx)?,
            googlebot: render_googlebot(ctx)?,
            llm_comparison: render_llm_comparison(ctx)?,
        })
    }

    /// Destination path and contents of every artifact, text report first.
    pub fn files<'a>(&'a self, output: &OutputConfig) -> Vec<(PathBuf, &'a str)> {
        vec![
            (output.path(&output.text), self.text.as_str()),
            (output.path(&output.json), self.json.as_str()),
            (output.path(&output.url_ranking), self.url_ranking.as_str()),
            (output.path(&output.error_urls), self.error_urls.as_str()),
            (output.path(&output.googlebot), self.googlebot.as_str()),
            (output.path(&output.llm_comparison), self.llm_comparison.as_str()),
        ]
    }

    /// Create the output directory and write every artifact into it.
    ///
    /// Stops at the first file that cannot be written.
    pub fn write_to(&self, output: &OutputConfig) -> Result<Vec<PathBuf>, AnalyzeError> {
        fs::create_dir_all(&output.dir).map_err(|e| AnalyzeError::write(&output.dir, e))?;

        let mut written = Vec::with_capacity(6);
        for (path, contents) in self.files(output) {
            fs::write(&path, contents).map_err(|e| AnalyzeError::write(&path, e))?;
            tracing::info!(path = %path.display(), bytes = contents.len(), "artifact written");
            written.push(path);
        }

        Ok(written)
    }
}
