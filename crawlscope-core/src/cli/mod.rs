//! Command implementations behind the `crawlscope` binary.

mod analyze;
pub mod conf;
mod progress;
mod signatures;


pub use analyze::{AnalyzeArgs, analyze};
pub use progress::Spinner;
pub use signatures::signatures;
