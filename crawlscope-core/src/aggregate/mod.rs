//! Single-pass aggregation of parsed access log records.
//!
//! One [`AggregationState`] has one writer. After the pass it is frozen
//! into a [`FrozenState`], which the report projections read. States built
//! from separate chunks of input can be combined with
//! [`AggregationState::merge`].

mod merge;
mod state;
mod tally;

#[cfg(test)]
mod tests;

pub use state::{
    AggregationState, FrozenState, LineCounts, StatusObservation, crawl_depth,
    is_redirect_or_error,
};
pub use tally::Tally;
