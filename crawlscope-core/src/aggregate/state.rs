use crate::aggregate::tally::Tally;
use crate::classify::GOOGLEBOT_FAMILY;
use crate::parse::LogRecord;
use ahash::RandomState;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::ops::Deref;

pub(crate) type Map<K, V> = HashMap<K, V, RandomState>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    /// Every line read, blank lines included.
    pub total: u64,
    pub parsed: u64,
    pub rejected: u64,
}

/// A status seen for a URL, in the order the lines were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusObservation {
    pub at: NaiveDateTime,
    pub status: String,
}

/// Number of `/` characters in a URL.
pub fn crawl_depth(url: &str) -> usize {
    url.matches('/').count()
}

/// True for 3xx, 4xx and 5xx status codes.
pub fn is_redirect_or_error(status: &str) -> bool {
    status.starts_with(['3', '4', '5'])
}

/// Everything the reports need, accumulated in one pass.
///
/// Each successfully parsed line is applied exactly once through
/// [`AggregationState::update`]. Reads go through `get`-style accessors and
/// never create entries.
#[derive(Debug, Clone)]
pub struct AggregationState {
    pub(super) lines: LineCounts,
    pub(super) googlebot_family: Vec<String>,

    pub(super) url_visits: Tally<String>,
    pub(super) status_codes: Tally<String>,
    pub(super) user_agents: Tally<String>,

    pub(super) bot_visits: Tally<String>,
    /// bot -> URL visit counts, first visit order
    pub(super) bot_urls: Map<String, Tally<String>>,
    pub(super) bot_status_codes: Map<String, BTreeMap<String, u64>>,

    pub(super) url_first_crawl: Map<String, NaiveDateTime>,
    pub(super) url_last_crawl: Map<String, NaiveDateTime>,
    /// URL -> bot -> count
    pub(super) url_crawl_by_bot: Map<String, Map<String, u64>>,
    /// bot -> URL -> latest crawl
    pub(super) bot_url_last_crawl: Map<String, Map<String, NaiveDateTime>>,
    pub(super) url_status_history: Map<String, Vec<StatusObservation>>,

    /// status (3xx/4xx/5xx) -> URL -> count, URLs in first-seen order
    pub(super) error_urls: BTreeMap<String, Tally<String>>,

    pub(super) bot_daily_visits: Map<String, BTreeMap<NaiveDate, u64>>,
    pub(super) googlebot_crawl_depth: BTreeMap<usize, u64>,
}

impl Default for AggregationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregationState {
    pub fn new() -> Self {
        Self::with_googlebot_family(GOOGLEBOT_FAMILY.iter().map(|s| s.to_string()).collect())
    }

    /// Empty state whose crawl-depth histogram counts the given labels.
    pub fn with_googlebot_family(googlebot_family: Vec<String>) -> Self {
        Self {
            lines: LineCounts::default(),
            googlebot_family,
            url_visits: Tally::new(),
            status_codes: Tally::new(),
            user_agents: Tally::new(),
            bot_visits: Tally::new(),
            bot_urls: Map::default(),
            bot_status_codes: Map::default(),
            url_first_crawl: Map::default(),
            url_last_crawl: Map::default(),
            url_crawl_by_bot: Map::default(),
            bot_url_last_crawl: Map::default(),
            url_status_history: Map::default(),
            error_urls: BTreeMap::new(),
            bot_daily_visits: Map::default(),
            googlebot_crawl_depth: BTreeMap::new(),
        }
    }

    pub fn record_blank(&mut self) {
        self.lines.total += 1;
    }

    pub fn record_rejected(&mut self) {
        self.lines.total += 1;
        self.lines.rejected += 1;
    }

    /// Apply one parsed line.
    pub fn update(&mut self, record: &LogRecord, bot: Option<&str>) {
        self.lines.total += 1;
        self.lines.parsed += 1;

        let url = record.url.as_str();
        let status = record.status.as_str();
        let user_agent = record.user_agent();

        self.url_visits.incr(url);
        self.status_codes.incr(status);
        if !user_agent.is_empty() {
            self.user_agents.incr(user_agent);
        }

        if let Some(ts) = record.timestamp {
            if !self.url_first_crawl.contains_key(url) {
                self.url_first_crawl.insert(url.to_string(), ts);
            }
            keep_latest(&mut self.url_last_crawl, url, ts);
            self.url_status_history
                .entry(url.to_string())
                .or_default()
                .push(StatusObservation {
                    at: ts,
                    status: status.to_string(),
                });
        }

        if !status.is_empty() && !url.is_empty() && is_redirect_or_error(status) {
            self.error_urls
                .entry(status.to_string())
                .or_default()
                .incr(url);
        }

        let Some(bot) = bot else {
            return;
        };

        self.bot_visits.incr(bot);
        self.bot_urls.entry(bot.to_string()).or_default().incr(url);
        *self
            .bot_status_codes
            .entry(bot.to_string())
            .or_default()
            .entry(status.to_string())
            .or_insert(0) += 1;

        if !url.is_empty() {
            *self
                .url_crawl_by_bot
                .entry(url.to_string())
                .or_default()
                .entry(bot.to_string())
                .or_insert(0) += 1;

            if let Some(ts) = record.timestamp {
                keep_latest(
                    self.bot_url_last_crawl.entry(bot.to_string()).or_default(),
                    url,
                    ts,
                );
            }
        }

        if let Some(date) = record.date() {
            *self
                .bot_daily_visits
                .entry(bot.to_string())
                .or_default()
                .entry(date)
                .or_insert(0) += 1;
        }

        if !url.is_empty() && self.is_googlebot(bot) {
            *self
                .googlebot_crawl_depth
                .entry(crawl_depth(url))
                .or_insert(0) += 1;
        }
    }

    /// Stop accepting lines; reports are built from the frozen state.
    pub fn freeze(self) -> FrozenState {
        FrozenState(self)
    }

    //-------------------------------------------------------------------------
    // Reads
    //-------------------------------------------------------------------------

    pub fn lines(&self) -> LineCounts {
        self.lines
    }

    pub fn googlebot_family(&self) -> &[String] {
        &self.googlebot_family
    }

    pub fn is_googlebot(&self, bot: &str) -> bool {
        self.googlebot_family.iter().any(|name| name == bot)
    }

    pub fn url_visits(&self) -> &Tally<String> {
        &self.url_visits
    }

    pub fn status_codes(&self) -> &Tally<String> {
        &self.status_codes
    }

    pub fn user_agents(&self) -> &Tally<String> {
        &self.user_agents
    }

    pub fn bot_visits(&self) -> &Tally<String> {
        &self.bot_visits
    }

    /// Sum of all bot visits.
    pub fn total_bot_visits(&self) -> u64 {
        self.bot_visits.total()
    }

    pub fn bot_urls(&self, bot: &str) -> Option<&Tally<String>> {
        self.bot_urls.get(bot)
    }

    pub fn bot_status_codes(&self, bot: &str) -> Option<&BTreeMap<String, u64>> {
        self.bot_status_codes.get(bot)
    }

    pub fn first_crawl(&self, url: &str) -> Option<NaiveDateTime> {
        self.url_first_crawl.get(url).copied()
    }

    pub fn last_crawl(&self, url: &str) -> Option<NaiveDateTime> {
        self.url_last_crawl.get(url).copied()
    }

    /// How many times `bot` requested `url`.
    pub fn bot_crawls(&self, url: &str, bot: &str) -> u64 {
        self.url_crawl_by_bot
            .get(url)
            .and_then(|bots| bots.get(bot))
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct bots that requested `url`.
    pub fn distinct_bots(&self, url: &str) -> usize {
        self.url_crawl_by_bot.get(url).map_or(0, |bots| bots.len())
    }

    pub fn bot_last_crawl(&self, bot: &str, url: &str) -> Option<NaiveDateTime> {
        self.bot_url_last_crawl
            .get(bot)
            .and_then(|urls| urls.get(url))
            .copied()
    }

    pub fn status_history(&self, url: &str) -> &[StatusObservation] {
        self.url_status_history
            .get(url)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// URLs that answered `status`, first-seen order, no duplicates.
    pub fn urls_by_status(&self, status: &str) -> Vec<&str> {
        self.error_urls
            .get(status)
            .map(|urls| urls.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// status -> URL -> count, statuses ascending.
    pub fn error_urls(&self) -> &BTreeMap<String, Tally<String>> {
        &self.error_urls
    }

    pub fn bot_daily_visits(&self, bot: &str) -> Option<&BTreeMap<NaiveDate, u64>> {
        self.bot_daily_visits.get(bot)
    }

    pub fn googlebot_crawl_depth(&self) -> &BTreeMap<usize, u64> {
        &self.googlebot_crawl_depth
    }
}

pub(super) fn keep_latest(map: &mut Map<String, NaiveDateTime>, key: &str, ts: NaiveDateTime) {
    match map.get_mut(key) {
        Some(latest) if ts > *latest => *latest = ts,
        Some(_) => {}
        None => {
            map.insert(key.to_string(), ts);
        }
    }
}

/// An [`AggregationState`] whose pass has finished.
///
/// Report projections only accept this type, so none of them can run
/// against a half-built state. It is read-only and can be shared freely.
#[derive(Debug, Clone)]
pub struct FrozenState(AggregationState);

impl Deref for FrozenState {
    type Target = AggregationState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
