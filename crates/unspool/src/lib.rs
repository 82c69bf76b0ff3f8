//! # Unspool
//!
//! Archive the reply threads an account posted on a Mastodon-compatible
//! server.
//!
//! ## Overview
//!
//! - **Fetch** every status of an account, newest first, resuming from a
//!   local cache and stopping cleanly when the server rate-limits
//! - **Rebuild** reply chains from `in_reply_to_id` pointers and keep the
//!   longest chain per conversation root
//! - **Write** one HTML file per thread
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use unspool::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(MastodonClient::new(InstanceConfig::new(
//!         "mastodon.social",
//!         std::env::var("APP_ACCESS_TOKEN")?,
//!     ))?);
//!     let cache = Arc::new(CacheFile::in_dir("cache"));
//!
//!     let account = client.lookup_account("alice").await?;
//!     let store = cache.load_store().await?;
//!
//!     let fetcher = Fetcher::builder()
//!         .source(client)
//!         .persistence(cache)
//!         .build()?;
//!     let report = fetcher.fetch_all(&account.id, store).await?;
//!
//!     let threads = build_threads(&report.store, DEFAULT_MINIMUM_THREAD_SIZE);
//!     Materializer::new("cache/output").materialize(&threads, &report.store)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`unspool-types`**: `Post`, `Store` and `Thread`
//! - **`unspool-client`**: Mastodon REST client behind the `StatusSource` trait
//! - **`unspool-persist`**: JSON cache file behind the `PersistenceClient` trait
//! - **`unspool-graph`**: fetch loop, thread reconstruction and HTML output
//!
//! ## License
//!
//! MIT

pub mod prelude;

pub use unspool_types::{Post, Store, Tag, Thread};

pub use unspool_client::{
    Account, ClientError, InstanceConfig, MastodonClient, Status, StatusSource, StatusesRequest,
};

pub use unspool_persist::{CacheFile, InMemoryClient, PersistError, PersistenceClient};

pub use unspool_graph::{
    ancestors_of, build_threads, FetchConfig, FetchError, FetchObserver, FetchReport, Fetcher,
    FetcherBuilder, MaterializeError, MaterializeOptions, Materializer, NoopObserver,
    PageProgress, PostOutcome, StopReason, DEFAULT_MINIMUM_THREAD_SIZE, PAGE_SIZE,
};
