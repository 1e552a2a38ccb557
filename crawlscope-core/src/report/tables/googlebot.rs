use crate::aggregate::{Tally, crawl_depth};
use crate::report::context::ReportContext;
use crate::report::error::ReportError;
use crate::report::format::{NOT_AVAILABLE, date_time, days_since};
use crate::report::tables::{TableRow, render_table};
use chrono::NaiveDateTime;
use std::fmt;

const HEADER: &[&str] = &[
    "URL",
    "Googlebot_Crawls",
    "Last_Crawl",
    "Days_Since_Last",
    "URL_Depth",
    "Predominant_Status",
    "Crawl_Priority",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlPriority {
    High,
    Medium,
    Normal,
    Low,
}

impl CrawlPriority {
    pub fn from_crawls(crawls: u64) -> Self {
        match crawls {
            101.. => Self::High,
            51..=100 => Self::Medium,
            11..=50 => Self::Normal,
            _ => Self::Low,
        }
    }
}

impl fmt::Display for CrawlPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Normal => "Normal",
            Self::Low => "Low",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GooglebotRow {
    pub url: String,
    /// Requests from any member of the Googlebot family.
    pub crawls: u64,
    pub last_crawl: Option<NaiveDateTime>,
    pub days_since_last: Option<i64>,
    pub depth: usize,
    /// Most frequent status in the URL's history, ties to the first seen.
    pub predominant_status: Option<String>,
    pub priority: CrawlPriority,
}

/// URLs crawled by the Googlebot family, most crawled first.
pub fn googlebot_rows(ctx: &ReportContext<'_>) -> Vec<GooglebotRow> {
    let state = ctx.state;
    let family = &ctx.bots.googlebot_family;

    let mut crawls: Tally<String> = Tally::new();
    for bot in family {
        if let Some(urls) = state.bot_urls(bot) {
            for (url, n) in urls.iter() {
                crawls.add(url.as_str(), n);
            }
        }
    }

    crawls
        .most_common(None)
        .into_iter()
        .map(|(url, n)| {
            let last_crawl = family
                .iter()
                .filter_map(|bot| state.bot_last_crawl(bot, url))
                .max();

            let statuses: Tally<String> = state
                .status_history(url)
                .iter()
                .map(|o| &o.status)
                .collect();
            let predominant_status = statuses
                .most_common(Some(1))
                .first()
                .map(|(status, _)| status.to_string());

            GooglebotRow {
                url: url.clone(),
                crawls: n,
                last_crawl,
                days_since_last: last_crawl.map(|last| days_since(ctx.now, last)),
                depth: crawl_depth(url),
                predominant_status,
                priority: CrawlPriority::from_crawls(n),
            }
        })
        .collect()
}

impl TableRow for GooglebotRow {
    fn fields(&self) -> Vec<String> {
        vec![
            self.url.clone(),
            self.crawls.to_string(),
            date_time(self.last_crawl),
            self.days_since_last
                .map_or_else(|| NOT_AVAILABLE.to_string(), |d| d.to_string()),
            self.depth.to_string(),
            self.predominant_status
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            self.priority.to_string(),
        ]
    }
}

pub fn render_googlebot(ctx: &ReportContext<'_>) -> Result<String, ReportError> {
    let header: Vec<String> = HEADER.iter().map(|s| s.to_string()).collect();
    render_table(&header, &googlebot_rows(ctx))
}
