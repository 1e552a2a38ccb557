use crate::cli::progress::Spinner;
use crate::conf::load_or_default;
use crate::ingest::{Analyzer, resolve_inputs};
use crate::report::format::thousands;
use crate::report::{Artifacts, ReportContext};
use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Log files or glob patterns, `-` reads stdin
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Path to config file (defaults to ./crawlscope.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory, overrides `output.dir`
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Number of input files analyzed at once
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Also print the text report to stdout
    #[arg(long)]
    pub print: bool,

    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

pub fn analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut config = load_or_default(args.config.as_deref()).context("failed to load config")?;
    if let Some(out) = &args.out {
        config.output = config.output.with_dir(out);
    }

    let sources = resolve_inputs(&args.inputs)?;
    let mut analyzer = Analyzer::from_config(&config)?;
    if !args.no_progress && io::stderr().is_terminal() {
        analyzer = analyzer.with_sink(Spinner::new());
    }

    let state = analyzer.analyze_sources(&sources, args.jobs)?;
    let now = chrono::Local::now().naive_local();
    let ctx = ReportContext::new(&state, &config.bots, analyzer.registry(), now);
    let artifacts = Artifacts::build(&ctx)?;
    let written = artifacts.write_to(&config.output)?;

    if args.print {
        println!("{}", artifacts.text);
    }

    let lines = state.lines();
    println!("{} Analysis complete", "✔".green());
    println!("  lines read:      {}", thousands(lines.total));
    println!("  parsed:          {}", thousands(lines.parsed));
    println!("  rejected:        {}", thousands(lines.rejected));
    println!("{} Reports written to {}", "✔".green(), config.output.dir.display());
    for path in written {
        println!("  - {}", path.display());
    }

    Ok(())
}
