use crate::report::context::ReportContext;
use crate::report::format::{thousands, truncate};
use crate::report::ranking::{
    BOT_TOP_URLS, BOT_RECENT_DAYS, BotRank, SEARCH_BOT_LIMIT, TOP_URLS, bot_detail, bot_ranking,
    error_summary, llm_bot_ranking, search_bot_ranking, status_distribution, top_urls,
};
use crate::report::summary::summary;

const WIDTH: usize = 80;
const BOT_URL_WIDTH: usize = 70;
const TOP_URL_WIDTH: usize = 65;

fn heading(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');
}

fn ranked_bots(out: &mut String, ranking: &[BotRank<'_>]) {
    for (i, rank) in ranking.iter().enumerate() {
        out.push_str(&format!(
            "{:2}. {:<30}: {:>8} visits ({:6.2}%)\n",
            i + 1,
            rank.name,
            thousands(rank.visits),
            rank.share
        ));
    }
}

/// The human readable report.
///
/// Sections: summary, bot ranking with its search and LLM slices, per-bot
/// detail, top URLs, status codes, SEO errors.
/// Rendering the same context twice yields the same bytes.
pub fn render_text(ctx: &ReportContext<'_>) -> String {
    let rule = "=".repeat(WIDTH);
    let mut out = String::new();

    out.push_str(&format!("{rule}\nSEO ACCESS LOG REPORT\n{rule}\n\n"));

    //-------------------------------------------------------------------------
    // Summary
    //-------------------------------------------------------------------------
    let s = summary(ctx);
    heading(&mut out, "SUMMARY");
    out.push_str(&format!(
        "Lines read: {}\n\
         Requests analyzed: {}\n\
         Rejected lines: {}\n\
         Unique URLs: {}\n\
         Unique user agents: {}\n\n",
        thousands(s.total_lines),
        thousands(s.parsed_lines),
        thousands(s.error_lines),
        thousands(s.unique_urls as u64),
        thousands(s.unique_user_agents as u64),
    ));

    //-------------------------------------------------------------------------
    // Bots
    //-------------------------------------------------------------------------
    heading(&mut out, "SEARCH BOTS AND CRAWLERS");

    let ranking = bot_ranking(ctx);
    if ranking.is_empty() {
        out.push_str("No bots found in the log.\n");
    } else {
        out.push_str(&format!(
            "Bot visits: {}\n\
             Share of all requests: {:.2}%\n\
             Search bots: {} ({:.2}% of bot visits)\n\
             LLM bots: {} ({:.2}% of bot visits)\n\n",
            thousands(s.bot_visits),
            s.bot_share,
            thousands(s.search_bot_visits),
            s.search_share(),
            thousands(s.llm_bot_visits),
            s.llm_share(),
        ));

        heading(&mut out, "BOT RANKING (by visits)");
        ranked_bots(&mut out, &ranking);
        out.push('\n');

        heading(&mut out, &format!("SEARCH BOTS (top {SEARCH_BOT_LIMIT})"));
        let search = search_bot_ranking(ctx);
        if search.is_empty() {
            out.push_str("No search bots found in the log.\n");
        }
        ranked_bots(&mut out, &search);
        out.push('\n');

        heading(&mut out, "LLM BOTS");
        let llm = llm_bot_ranking(ctx);
        if llm.is_empty() {
            out.push_str("No LLM bots found in the log.\n");
        }
        ranked_bots(&mut out, &llm);
        out.push('\n');

        heading(&mut out, "BOT DETAIL");
        for rank in &ranking {
            let detail = bot_detail(ctx, rank.name);

            out.push_str(&format!(
                "\n{}\n  Visits: {}\n  Status codes:\n",
                detail.name,
                thousands(detail.visits)
            ));
            for (status, n) in &detail.status_codes {
                out.push_str(&format!("    {status}: {}\n", thousands(*n)));
            }

            if !detail.top_urls.is_empty() {
                out.push_str(&format!("  Top {BOT_TOP_URLS} URLs:\n"));
                for (url, n) in &detail.top_urls {
                    out.push_str(&format!("    [{n:4}x] {}\n", truncate(url, BOT_URL_WIDTH)));
                }
            }

            if !detail.recent_days.is_empty() {
                out.push_str(&format!("  Visits per day (last {BOT_RECENT_DAYS} days):\n"));
                for (day, n) in &detail.recent_days {
                    out.push_str(&format!("    {day}: {}\n", thousands(*n)));
                }
            }
        }
    }
    out.push('\n');

    //-------------------------------------------------------------------------
    // URLs
    //-------------------------------------------------------------------------
    heading(&mut out, &format!("TOP {TOP_URLS} URLS"));
    for (i, (url, n)) in top_urls(ctx, TOP_URLS).iter().enumerate() {
        out.push_str(&format!(
            "{:2}. [{:>6}x] {}\n",
            i + 1,
            thousands(*n),
            truncate(url, TOP_URL_WIDTH)
        ));
    }
    out.push('\n');

    //-------------------------------------------------------------------------
    // Status codes
    //-------------------------------------------------------------------------
    heading(&mut out, "STATUS CODE DISTRIBUTION");
    for share in status_distribution(ctx) {
        out.push_str(&format!(
            "{}: {:>8} ({:6.2}%)\n",
            share.status,
            thousands(share.count),
            share.share
        ));
    }
    out.push('\n');

    //-------------------------------------------------------------------------
    // SEO errors
    //-------------------------------------------------------------------------
    heading(&mut out, "SEO ERRORS (redirects and errors)");
    let errors = error_summary(ctx);
    if errors.is_empty() {
        out.push_str("No redirects or errors found.\n");
    }
    for row in &errors {
        out.push_str(&format!(
            "{}: {:>8} requests on {:>6} unique URLs\n",
            row.status,
            thousands(row.total),
            thousands(row.unique_urls as u64)
        ));
    }
    out.push('\n');

    out.push_str(&rule);
    out.push('\n');
    out
}
