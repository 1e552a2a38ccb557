//! Reading log sources into an aggregation pass.
//!
//! sources (files, globs, stdin)
//! for_each_line (lossy UTF-8)
//! Pass::feed_line: parse, classify, update
//! FrozenState
//!
//! Only an unreadable source stops a run. Bad lines are tallied as
//! rejected and skipped.

mod analyzer;
mod lines;
mod progress;
mod source;

#[cfg(test)]
mod tests;

pub use analyzer::{Analyzer, Pass};
pub use lines::for_each_line;
pub use progress::{NoProgress, ProgressSink};
pub use source::{STDIN_MARKER, Source, resolve_inputs};
