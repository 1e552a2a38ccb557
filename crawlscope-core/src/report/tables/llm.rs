use crate::report::context::ReportContext;
use crate::report::error::ReportError;
use crate::report::tables::{TableRow, render_table};
use std::collections::BTreeSet;

/// Reference column: how often plain Googlebot fetched the same URL.
const COMPARISON_BOT: &str = "Googlebot";

#[derive(Debug, Clone, PartialEq)]
pub struct LlmRow<'a> {
    pub url: &'a str,
    /// One count per configured LLM bot, in configured order.
    pub crawls: Vec<u64>,
    pub googlebot: u64,
    /// LLM bots with at least one request for this URL.
    pub indexed_by: Vec<&'a str>,
}

impl LlmRow<'_> {
    pub fn total(&self) -> u64 {
        self.crawls.iter().sum()
    }
}

/// One row per URL any LLM bot requested, URLs in lexicographic order.
///
/// Requests without a path have no URL to compare and get no row.
pub fn llm_rows<'a>(ctx: &ReportContext<'a>) -> Vec<LlmRow<'a>> {
    let state = ctx.state;
    let llm = &ctx.bots.llm;

    let urls: BTreeSet<&str> = llm
        .iter()
        .filter_map(|bot| state.bot_urls(bot))
        .flat_map(|urls| urls.keys().map(String::as_str))
        .filter(|url| !url.is_empty())
        .collect();

    urls.into_iter()
        .map(|url| {
            let crawls: Vec<u64> = llm.iter().map(|bot| state.bot_crawls(url, bot)).collect();
            let indexed_by = llm
                .iter()
                .zip(&crawls)
                .filter(|(_, n)| **n > 0)
                .map(|(bot, _)| bot.as_str())
                .collect();

            LlmRow {
                url,
                crawls,
                googlebot: state.bot_crawls(url, COMPARISON_BOT),
                indexed_by,
            }
        })
        .collect()
}

impl TableRow for LlmRow<'_> {
    fn fields(&self) -> Vec<String> {
        let mut fields = vec![self.url.to_string()];
        fields.extend(self.crawls.iter().map(u64::to_string));
        fields.push(self.total().to_string());
        fields.push(self.googlebot.to_string());
        fields.push(self.indexed_by.join(", "));
        fields
    }
}

pub fn render_llm_comparison(ctx: &ReportContext<'_>) -> Result<String, ReportError> {
    let mut header = vec!["URL".to_string()];
    header.extend(ctx.bots.llm.iter().cloned());
    header.push("Total_LLM_Bots".to_string());
    header.push("Googlebot_Comparison".to_string());
    header.push("Indexed_By".to_string());

    render_table(&header, &llm_rows(ctx))
}
