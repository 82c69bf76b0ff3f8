//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust
//! use unspool::prelude::*;
//! ```

pub use crate::{
    build_threads, CacheFile, FetchConfig, Fetcher, FetchObserver, InstanceConfig,
    MastodonClient, MaterializeOptions, Materializer, PersistenceClient, Post, StatusSource,
    StopReason, Store, Thread, DEFAULT_MINIMUM_THREAD_SIZE,
};
