pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod conf;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod parse;
pub mod report;
