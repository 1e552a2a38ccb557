use crate::aggregate::LineCounts;
use crate::ingest::{ProgressSink, Source};
use crate::report::format::thousands;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Stderr spinner showing the running line count.
#[derive(Clone)]
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"])
            .template("{spinner:.green} [{elapsed_precise}] {prefix} {msg}");
        if let Ok(style) = style {
            bar.set_style(style);
        }
        bar.set_message("starting");
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for Spinner {
    fn on_progress(&self, lines: u64) {
        self.bar.set_message(format!("{} lines", thousands(lines)));
    }

    fn on_source(&self, source: &Source) {
        self.bar.set_prefix(source.to_string());
    }

    fn on_finish(&self, counts: LineCounts) {
        self.bar.finish_with_message(format!("{} lines read", thousands(counts.total)));
    }
}
