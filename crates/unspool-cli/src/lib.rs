pub mod cli;
pub mod config;
pub mod logging;
pub mod progress;
pub mod run;

pub use cli::Cli;
pub use config::Config;
pub use run::{error_chain, run, RunSummary};
