mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        /// Path to config file
        #[arg(default_value = "crawlscope.toml")]
        path: PathBuf,

        /// Print errors without color
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print the resolved configuration, defaults filled in
    Dump {
        /// Path to config file, defaults only when omitted
        path: Option<PathBuf>,

        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Write a config file holding every default
    Init {
        /// Path to config file
        #[arg(default_value = "crawlscope.toml")]
        path: PathBuf,
    },
}
