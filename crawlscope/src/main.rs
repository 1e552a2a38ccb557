use clap::{Parser, Subcommand};
use crawlscope_core::cli;
use crawlscope_core::cli::conf::ConfigCmd;
use crawlscope_core::logging::{LogFormat, default_log_format, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "crawlscope",
    version,
    about = "Crawlscope: search and AI crawler analysis for web access logs"
)]
struct Cli {
    /// Diagnostic log format on stderr
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze access logs and write the SEO reports
    Analyze(cli::AnalyzeArgs),

    /// List bot signatures in match order
    Signatures {
        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    match cli.command {
        Command::Analyze(args) => cli::analyze(args),
        Command::Signatures { config } => cli::signatures(config),
        Command::Config { cmd } => match cmd {
            ConfigCmd::Check { path, plain } => cli::conf::check(path, plain),
            ConfigCmd::Dump { path, json } => cli::conf::dump(path, json),
            ConfigCmd::Init { path } => cli::conf::init(&path),
        },
    }
}
