use crate::report::context::ReportContext;
use crate::report::format::percent;
use serde::Serialize;

/// Headline numbers for one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_lines: u64,
    pub parsed_lines: u64,
    /// Lines that did not fit the log grammar.
    pub error_lines: u64,
    pub unique_urls: usize,
    pub unique_user_agents: usize,
    pub bot_visits: u64,
    /// Bot visits as a percentage of parsed lines.
    pub bot_share: f64,
    pub search_bot_visits: u64,
    pub llm_bot_visits: u64,
}

impl Summary {
    /// Search bot visits as a percentage of all bot visits.
    pub fn search_share(&self) -> f64 {
        percent(self.search_bot_visits, self.bot_visits)
    }

    /// LLM bot visits as a percentage of all bot visits.
    pub fn llm_share(&self) -> f64 {
        percent(self.llm_bot_visits, self.bot_visits)
    }
}

pub fn summary(ctx: &ReportContext<'_>) -> Summary {
    let state = ctx.state;
    let lines = state.lines();
    let bot_visits = state.total_bot_visits();

    let mut search_bot_visits = 0;
    let mut llm_bot_visits = 0;
    for (bot, n) in state.bot_visits().iter() {
        if ctx.bots.is_search(bot) {
            search_bot_visits += n;
        }
        if ctx.bots.is_llm(bot) {
            llm_bot_visits += n;
        }
    }

    Summary {
        total_lines: lines.total,
        parsed_lines: lines.parsed,
        error_lines: lines.rejected,
        unique_urls: state.url_visits().len(),
        unique_user_agents: state.user_agents().len(),
        bot_visits,
        bot_share: percent(bot_visits, lines.parsed),
        search_bot_visits,
        llm_bot_visits,
    }
}
