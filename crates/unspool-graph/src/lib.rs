pub mod builder;
pub mod error;
pub mod fetch;
pub mod materialize;
pub mod observer;
pub mod threads;

pub use builder::FetcherBuilder;
pub use error::{FetchError, MaterializeError};
pub use fetch::{FetchConfig, FetchReport, Fetcher, StopReason, PAGE_SIZE};
pub use materialize::{MaterializeOptions, Materializer};
pub use observer::{FetchObserver, NoopObserver, PageProgress, PostOutcome};
pub use threads::{ancestors_of, build_threads, DEFAULT_MINIMUM_THREAD_SIZE};

// Re-export key types from unspool-types
pub use unspool_types::{Post, Store, Tag, Thread};
