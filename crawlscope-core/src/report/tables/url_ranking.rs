use crate::report::context::ReportContext;
use crate::report::error::ReportError;
use crate::report::format::{NOT_AVAILABLE, date_time, days_since};
use crate::report::tables::{TableRow, render_table};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct UrlRankingRow<'a> {
    pub url: &'a str,
    pub total_crawls: u64,
    pub last_crawl: Option<NaiveDateTime>,
    pub days_since_last: Option<i64>,
    pub first_crawl: Option<NaiveDateTime>,
    pub distinct_bots: usize,
    /// One count per configured ranking column.
    pub bot_crawls: Vec<u64>,
}

/// Every URL, most visited first.
pub fn url_ranking_rows<'a>(ctx: &ReportContext<'a>) -> Vec<UrlRankingRow<'a>> {
    let state = ctx.state;

    state
        .url_visits()
        .most_common(None)
        .into_iter()
        .map(|(url, total_crawls)| {
            let last_crawl = state.last_crawl(url);
            UrlRankingRow {
                url: url.as_str(),
                total_crawls,
                last_crawl,
                days_since_last: last_crawl.map(|last| days_since(ctx.now, last)),
                first_crawl: state.first_crawl(url),
                distinct_bots: state.distinct_bots(url),
                bot_crawls: ctx
                    .bots
                    .ranking_columns
                    .iter()
                    .map(|bot| state.bot_crawls(url, bot))
                    .collect(),
            }
        })
        .collect()
}

impl TableRow for UrlRankingRow<'_> {
    fn fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.url.to_string(),
            self.total_crawls.to_string(),
            date_time(self.last_crawl),
            self.days_since_last
                .map_or_else(|| NOT_AVAILABLE.to_string(), |d| d.to_string()),
            date_time(self.first_crawl),
            self.distinct_bots.to_string(),
        ];
        fields.extend(self.bot_crawls.iter().map(u64::to_string));
        fields
    }
}

pub fn render_url_ranking(ctx: &ReportContext<'_>) -> Result<String, ReportError> {
    let mut header: Vec<String> = [
        "URL",
        "Total_Crawls",
        "Last_Crawl",
        "Days_Since_Last",
        "First_Crawl",
        "Distinct_Bots",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    header.extend(ctx.bots.ranking_columns.iter().cloned());

    render_table(&header, &url_ranking_rows(ctx))
}
