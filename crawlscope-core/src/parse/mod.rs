//! Access log line parsing.
//!
//! Turns one line of Apache/Nginx Common or Combined log output into a
//! [`LogRecord`]. Lines that do not fit the grammar are rejected with a
//! [`ParseFailure`]; the caller tallies them and moves on.
//!
//! stdin / files
//! parse
//! LogRecord
//! classify
//! AggregationState

mod grammar;
mod record;
mod timestamp;

#[cfg(test)]
mod tests;

pub use grammar::parse;
pub use record::{LogRecord, ParseFailure};
pub use timestamp::{parse_timestamp, TIMESTAMP_FORMAT};
