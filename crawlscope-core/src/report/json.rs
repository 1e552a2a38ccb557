use crate::report::context::ReportContext;
use crate::report::error::ReportError;
use crate::report::ranking::{ErrorStatusSummary, bot_ranking, error_summary};
use crate::report::summary::{Summary, summary};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const JSON_BOT_TOP_URLS: usize = 50;
pub const JSON_TOP_URLS: usize = 100;

/// Key/value pairs written as a JSON object in the order given.
#[derive(Debug, Clone, PartialEq)]
pub struct Ordered<K, V>(pub Vec<(K, V)>);

impl<K: Serialize, V: Serialize> Serialize for Ordered<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub summary: Summary,
    /// Bots in ranking order.
    pub bots: Ordered<&'a str, JsonBot<'a>>,
    pub top_urls: Ordered<&'a str, u64>,
    /// Status codes in first-seen order.
    pub status_codes: Ordered<&'a str, u64>,
    /// Redirect and error statuses, ascending.
    pub errors: Vec<ErrorStatusSummary<'a>>,
}

#[derive(Debug, Serialize)]
pub struct JsonBot<'a> {
    pub total_visits: u64,
    pub status_codes: Ordered<&'a str, u64>,
    /// `YYYY-MM-DD` keys, oldest first.
    pub daily_visits: Ordered<String, u64>,
    pub top_urls: Ordered<&'a str, u64>,
}

pub fn json_report<'a>(ctx: &ReportContext<'a>) -> JsonReport<'a> {
    let state = ctx.state;

    let bots = bot_ranking(ctx)
        .into_iter()
        .map(|rank| {
            let status_codes = state
                .bot_status_codes(rank.name)
                .map(|codes| codes.iter().map(|(s, n)| (s.as_str(), *n)).collect())
                .unwrap_or_default();
            let daily_visits = state
                .bot_daily_visits(rank.name)
                .map(|days| days.iter().map(|(d, n)| (d.to_string(), *n)).collect())
                .unwrap_or_default();
            let top_urls = state
                .bot_urls(rank.name)
                .map(|urls| {
                    urls.most_common(Some(JSON_BOT_TOP_URLS))
                        .into_iter()
                        .map(|(url, n)| (url.as_str(), n))
                        .collect()
                })
                .unwrap_or_default();

            let bot = JsonBot {
                total_visits: rank.visits,
                status_codes: Ordered(status_codes),
                daily_visits: Ordered(daily_visits),
                top_urls: Ordered(top_urls),
            };
            (rank.name, bot)
        })
        .collect();

    let top_urls = state
        .url_visits()
        .most_common(Some(JSON_TOP_URLS))
        .into_iter()
        .map(|(url, n)| (url.as_str(), n))
        .collect();

    let status_codes = state
        .status_codes()
        .iter()
        .map(|(status, n)| (status.as_str(), n))
        .collect();

    JsonReport {
        summary: summary(ctx),
        bots: Ordered(bots),
        top_urls: Ordered(top_urls),
        status_codes: Ordered(status_codes),
        errors: error_summary(ctx),
    }
}

/// Pretty-printed JSON document.
pub fn render_json(ctx: &ReportContext<'_>) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&json_report(ctx))?)
}
