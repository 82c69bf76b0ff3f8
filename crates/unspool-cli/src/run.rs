use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use unspool_client::{MastodonClient, StatusSource};
use unspool_graph::{build_threads, Fetcher, MaterializeOptions, Materializer, StopReason};
use unspool_persist::{CacheFile, PersistenceClient};
use unspool_types::Store;

use crate::cli::Cli;
use crate::config::Config;
use crate::progress::TracingObserver;

/// What one invocation did
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub account_id: String,
    pub total_posts: usize,
    pub stop_reason: StopReason,
    pub threads: usize,
    pub written: Vec<PathBuf>,
}

/// Fetch, rebuild threads and write them out.
///
/// Directory problems and a missing account fail before the first status
/// request. A rate-limited fetch still produces output from what is cached.
pub async fn run(cli: &Cli, config: &Config) -> Result<RunSummary> {
    let paths = &config.paths;
    for dir in [&paths.cache_dir, &paths.output_dir] {
        fs::create_dir_all(dir)
            .with_context(|| format!("Directory \"{}\" could not be created", dir.display()))?;
    }

    let cache = Arc::new(CacheFile::in_dir(&paths.cache_dir));
    let store = if cli.no_cache {
        tracing::info!("Ignoring cached statuses");
        Store::new()
    } else {
        cache
            .load_store()
            .await
            .context("Failed to load the status cache")?
    };

    let client = Arc::new(
        MastodonClient::new(config.instance_config()).context("Failed to create the API client")?,
    );

    let account = client
        .lookup_account(&cli.account_name)
        .await
        .with_context(|| format!("Failed to look up account \"{}\"", cli.account_name))?;
    tracing::info!(account_id = %account.id, acct = %account.acct, "Fetching statuses from {}", config.instance);

    let fetcher = Fetcher::builder()
        .source(client)
        .persistence(cache)
        .observer(Arc::new(TracingObserver::new()))
        .config(config.fetch_config())
        .build()?;

    let report = fetcher.fetch_all(&account.id, store).await?;
    tracing::info!("Number of statuses: {}", report.store.len());

    let threads = build_threads(&report.store, cli.minimum_thread_size);
    tracing::info!("Found {} threads.", threads.len());

    let materializer = Materializer::new(&paths.output_dir).with_options(MaterializeOptions {
        permalink_header: cli.permalink,
    });
    let written = materializer
        .materialize(&threads, &report.store)
        .context("Failed to write threads")?;

    Ok(RunSummary {
        account_id: account.id,
        total_posts: report.store.len(),
        stop_reason: report.stop_reason,
        threads: threads.len(),
        written,
    })
}

/// Error messages from the innermost cause outwards
pub fn error_chain(err: &anyhow::Error) -> Vec<String> {
    let mut causes: Vec<String> = err.chain().map(|cause| cause.to_string()).collect();
    causes.reverse();
    causes
}
