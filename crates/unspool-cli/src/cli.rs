//! Command-line arguments.

use clap::Parser;
use unspool_graph::DEFAULT_MINIMUM_THREAD_SIZE;

/// Fetch an account's statuses and write its reply threads as HTML files.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "unspool", version, about)]
pub struct Cli {
    /// Account handle, e.g. `alice` or `alice@example.social`.
    pub account_name: String,
    /// Ignore the cached statuses and fetch everything again.
    #[arg(long)]
    pub no_cache: bool,
    /// Ancestors a post needs before its chain counts as a thread.
    #[arg(short = 'm', long, default_value_t = DEFAULT_MINIMUM_THREAD_SIZE)]
    pub minimum_thread_size: usize,
    /// Start every thread file with a link to its first post.
    #[arg(long)]
    pub permalink: bool,
}

impl Cli {
    /// Parse arguments from the process command line.
    pub fn from_args() -> Self {
        Self::parse()
    }
}
