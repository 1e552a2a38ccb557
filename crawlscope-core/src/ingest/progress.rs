use crate::aggregate::LineCounts;
use crate::ingest::source::Source;

/// Receives pass milestones.
///
/// Called from worker threads when sources are analyzed in parallel, so
/// implementations take `&self` and must be `Sync`.
pub trait ProgressSink: Send + Sync {
    /// `lines` lines have been read so far, across all sources.
    fn on_progress(&self, lines: u64);

    fn on_source(&self, _source: &Source) {}

    fn on_finish(&self, _counts: LineCounts) {}
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&self, _lines: u64) {}
}
