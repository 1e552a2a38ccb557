use crate::report::context::ReportContext;
use crate::report::format::percent;
use chrono::NaiveDate;
use serde::Serialize;

pub const BOT_TOP_URLS: usize = 10;
pub const BOT_RECENT_DAYS: usize = 30;
pub const TOP_URLS: usize = 20;
pub const SEARCH_BOT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct BotRank<'a> {
    pub name: &'a str,
    pub visits: u64,
    /// Share of all bot visits, in percent.
    pub share: f64,
}

/// Bots by visit count, highest first. Ties follow registry order.
pub fn bot_ranking<'a>(ctx: &ReportContext<'a>) -> Vec<BotRank<'a>> {
    let state = ctx.state;
    let total = state.total_bot_visits();

    let mut ranked: Vec<_> = state
        .bot_visits()
        .iter()
        .map(|(name, visits)| BotRank {
            name: name.as_str(),
            visits,
            share: percent(visits, total),
        })
        .collect();

    // Labels missing from the registry (states merged from another
    // configuration) sort after known ones, in first-seen order.
    ranked.sort_by_key(|rank| {
        (
            std::cmp::Reverse(rank.visits),
            ctx.registry.position(rank.name).unwrap_or(usize::MAX),
        )
    });
    ranked
}

/// Search bots from [`bot_ranking`], at most [`SEARCH_BOT_LIMIT`].
///
/// Shares stay relative to all bot visits.
pub fn search_bot_ranking<'a>(ctx: &ReportContext<'a>) -> Vec<BotRank<'a>> {
    bot_ranking(ctx)
        .into_iter()
        .filter(|rank| ctx.bots.is_search(rank.name))
        .take(SEARCH_BOT_LIMIT)
        .collect()
}

/// LLM bots from [`bot_ranking`], all of them.
pub fn llm_bot_ranking<'a>(ctx: &ReportContext<'a>) -> Vec<BotRank<'a>> {
    bot_ranking(ctx)
        .into_iter()
        .filter(|rank| ctx.bots.is_llm(rank.name))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct BotDetail<'a> {
    pub name: &'a str,
    pub visits: u64,
    /// Status codes ascending.
    pub status_codes: Vec<(&'a str, u64)>,
    pub top_urls: Vec<(&'a str, u64)>,
    /// Most recent dates first.
    pub recent_days: Vec<(NaiveDate, u64)>,
}

pub fn bot_detail<'a>(ctx: &ReportContext<'a>, bot: &'a str) -> BotDetail<'a> {
    let state = ctx.state;

    let status_codes = state
        .bot_status_codes(bot)
        .map(|codes| codes.iter().map(|(s, n)| (s.as_str(), *n)).collect())
        .unwrap_or_default();

    let top_urls = state
        .bot_urls(bot)
        .map(|urls| {
            urls.most_common(Some(BOT_TOP_URLS))
                .into_iter()
                .map(|(url, n)| (url.as_str(), n))
                .collect()
        })
        .unwrap_or_default();

    let recent_days = state
        .bot_daily_visits(bot)
        .map(|days| {
            days.iter()
                .rev()
                .take(BOT_RECENT_DAYS)
                .map(|(day, n)| (*day, *n))
                .collect()
        })
        .unwrap_or_default();

    BotDetail {
        name: bot,
        visits: state.bot_visits().get(bot),
        status_codes,
        top_urls,
        recent_days,
    }
}

/// Most visited URLs, ties in first-seen order.
pub fn top_urls<'a>(ctx: &ReportContext<'a>, limit: usize) -> Vec<(&'a str, u64)> {
    ctx.state
        .url_visits()
        .most_common(Some(limit))
        .into_iter()
        .map(|(url, n)| (url.as_str(), n))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusShare<'a> {
    pub status: &'a str,
    pub count: u64,
    /// Share of parsed lines, in percent.
    pub share: f64,
}

/// Every status code seen, ascending.
pub fn status_distribution<'a>(ctx: &ReportContext<'a>) -> Vec<StatusShare<'a>> {
    let state = ctx.state;
    let parsed = state.lines().parsed;

    let mut statuses: Vec<_> = state
        .status_codes()
        .iter()
        .map(|(status, count)| StatusShare {
            status: status.as_str(),
            count,
            share: percent(count, parsed),
        })
        .collect();
    statuses.sort_by(|a, b| a.status.cmp(b.status));
    statuses
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorStatusSummary<'a> {
    pub status: &'a str,
    /// Requests answered with this status.
    pub total: u64,
    pub unique_urls: usize,
}

/// One row per redirect or error status, ascending.
pub fn error_summary<'a>(ctx: &ReportContext<'a>) -> Vec<ErrorStatusSummary<'a>> {
    let state = ctx.state;

    state
        .error_urls()
        .iter()
        .map(|(status, urls)| ErrorStatusSummary {
            status: status.as_str(),
            total: urls.total(),
            unique_urls: state.urls_by_status(status).len(),
        })
        .collect()
}
