use crate::aggregate::FrozenState;
use crate::classify::SignatureRegistry;
use crate::conf::BotsConfig;
use chrono::NaiveDateTime;

/// Everything a projection reads.
///
/// `now` is the reference time for every "days since" figure. Passing it in
/// keeps projections pure: the same context always renders the same bytes.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub state: &'a FrozenState,
    pub bots: &'a BotsConfig,
    pub registry: &'a SignatureRegistry,
    pub now: NaiveDateTime,
}

impl<'a> ReportContext<'a> {
    pub fn new(
        state: &'a FrozenState,
        bots: &'a BotsConfig,
        registry: &'a SignatureRegistry,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            state,
            bots,
            registry,
            now,
        }
    }
}
