use crate::aggregate::{AggregationState, FrozenState, LineCounts};
use crate::classify::SignatureRegistry;
use crate::conf::{CrawlscopeConfig, DEFAULT_PROGRESS_INTERVAL};
use crate::error::AnalyzeError;
use crate::ingest::lines::for_each_line;
use crate::ingest::progress::{NoProgress, ProgressSink};
use crate::ingest::source::Source;
use crate::parse::{ParseFailure, parse};
use std::io::BufRead;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

/// Drives parse, classify and aggregate over one or more sources.
pub struct Analyzer {
    registry: SignatureRegistry,
    googlebot_family: Vec<String>,
    progress_interval: u64,
    sink: Box<dyn ProgressSink>,
    lines_read: AtomicU64,
}

impl Analyzer {
    pub fn new(registry: SignatureRegistry, googlebot_family: Vec<String>) -> Self {
        Self {
            registry,
            googlebot_family,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            sink: Box::new(NoProgress),
            lines_read: AtomicU64::new(0),
        }
    }

    /// Analyzer for a validated config: its registry, family and interval.
    pub fn from_config(config: &CrawlscopeConfig) -> Result<Self, AnalyzeError> {
        let registry = config
            .bots
            .registry()
            .map_err(|e| AnalyzeError::Config(e.into()))?;

        Ok(Self::new(registry, config.bots.googlebot_family.clone())
            .with_progress_interval(config.input.progress_interval))
    }

    /// Notify every `interval` lines. Zero is treated as one.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    pub fn with_sink(mut self, sink: impl ProgressSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn registry(&self) -> &SignatureRegistry {
        &self.registry
    }

    /// A fresh, empty pass.
    pub fn pass(&self) -> Pass<'_> {
        Pass {
            analyzer: self,
            state: AggregationState::with_googlebot_family(self.googlebot_family.clone()),
        }
    }

    /// Analyze in-memory text as one source.
    pub fn analyze_str(&self, text: &str) -> FrozenState {
        let mut pass = self.pass();
        // Reading from a byte slice cannot fail.
        let _ = for_each_line(text.as_bytes(), |line| pass.feed_line(line));
        pass.finish()
    }

    /// Read `reader` to the end into `pass`.
    pub fn read_into<R: BufRead>(
        &self,
        pass: &mut Pass<'_>,
        reader: R,
        source: &Source,
    ) -> Result<(), AnalyzeError> {
        let path = source.to_string();
        for_each_line(reader, |line| pass.feed_line(line))
            .map_err(|e| AnalyzeError::unreadable(path, e))?;
        Ok(())
    }

    fn analyze_source(&self, pass: &mut Pass<'_>, source: &Source) -> Result<(), AnalyzeError> {
        tracing::info!(source = %source, "reading log source");
        self.sink.on_source(source);

        let reader = source.open()?;
        self.read_into(pass, reader, source)
    }

    /// Analyze `sources` as one logical stream.
    ///
    /// With `jobs > 1` each source gets its own pass on a worker thread, at
    /// most `jobs` at a time. Per-source states are merged in input order,
    /// which gives the same result as reading the sources one after the
    /// other.
    pub fn analyze_sources(
        &self,
        sources: &[Source],
        jobs: usize,
    ) -> Result<FrozenState, AnalyzeError> {
        tracing::info!(sources = sources.len(), jobs, "analysis started");
        self.lines_read.store(0, Ordering::Relaxed);

        let state = if jobs <= 1 || sources.len() <= 1 {
            let mut pass = self.pass();
            for source in sources {
                self.analyze_source(&mut pass, source)?;
            }
            pass.state
        } else {
            self.analyze_parallel(sources, jobs)?
        };

        let counts = state.lines();
        tracing::info!(
            total = counts.total,
            parsed = counts.parsed,
            rejected = counts.rejected,
            "analysis finished"
        );
        self.sink.on_finish(counts);

        Ok(state.freeze())
    }

    fn analyze_parallel(
        &self,
        sources: &[Source],
        jobs: usize,
    ) -> Result<AggregationState, AnalyzeError> {
        let mut merged = self.pass().state;

        for batch in sources.chunks(jobs) {
            let results: Vec<_> = thread::scope(|scope| {
                let handles: Vec<_> = batch
                    .iter()
                    .map(|source| {
                        scope.spawn(move || {
                            let mut pass = self.pass();
                            self.analyze_source(&mut pass, source)?;
                            Ok::<_, AnalyzeError>(pass.state)
                        })
                    })
                    .collect();

                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or(Err(AnalyzeError::Worker)))
                    .collect()
            });

            for result in results {
                merged.merge(result?);
            }
        }

        Ok(merged)
    }

    fn tick(&self) {
        let n = self.lines_read.fetch_add(1, Ordering::Relaxed) + 1;
        if n % self.progress_interval == 0 {
            tracing::info!(lines = n, "processing");
            self.sink.on_progress(n);
        }
    }
}

/// One aggregation pass. Lines go in, a [`FrozenState`] comes out.
pub struct Pass<'a> {
    analyzer: &'a Analyzer,
    state: AggregationState,
}

impl Pass<'_> {
    /// Parse, classify and aggregate one raw line.
    pub fn feed_line(&mut self, line: &str) {
        self.analyzer.tick();

        match parse(line) {
            Ok(record) => {
                let bot = self.analyzer.registry.classify(record.user_agent());
                self.state.update(&record, bot);
            }
            Err(ParseFailure::Blank) => self.state.record_blank(),
            Err(ParseFailure::Grammar) => {
                self.state.record_rejected();
                tracing::debug!(line = self.state.lines().total, "rejected line");
            }
        }
    }

    pub fn lines(&self) -> LineCounts {
        self.state.lines()
    }

    /// End the pass. The result can only be read.
    pub fn finish(self) -> FrozenState {
        self.state.freeze()
    }
}
