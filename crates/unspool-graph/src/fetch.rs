use crate::builder::FetcherBuilder;
use crate::error::FetchError;
use crate::observer::{FetchObserver, NoopObserver, PageProgress, PostOutcome};
use std::fmt;
use std::sync::Arc;
use unspool_client::{ClientError, StatusSource, StatusesRequest};
use unspool_persist::PersistenceClient;
use unspool_types::{Post, Store};

/// Statuses requested per page
pub const PAGE_SIZE: u32 = 40;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchConfig {
    /// Stop after this many requests in one run (`None` = no limit)
    pub max_pages: Option<usize>,
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }
}

/// Why the fetch loop ended without a fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The server returned an empty page: the oldest post was reached
    Exhausted,
    /// The cursor did not move between two requests
    Converged,
    /// The server throttled us; the next run resumes from `after`
    RateLimited {
        after: Option<String>,
        reset: Option<String>,
    },
    /// `FetchConfig::max_pages` was reached
    PageLimit { pages: usize },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Exhausted => write!(f, "No more statuses to check"),
            StopReason::Converged => write!(f, "Apparently found enough posts"),
            StopReason::RateLimited { after, .. } => write!(
                f,
                "Too many requests after id \"{}\"",
                after.as_deref().unwrap_or("")
            ),
            StopReason::PageLimit { pages } => write!(f, "Stopped after {} pages", pages),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchReport {
    pub store: Store,
    pub stop_reason: StopReason,
    pub pages_fetched: usize,
    pub new_posts: usize,
    pub skipped_posts: usize,
}

#[derive(Debug, Default)]
struct Counters {
    pages: usize,
    inserted: usize,
    skipped: usize,
}

/// Pages backwards through an account's statuses and merges them into the store
pub struct Fetcher {
    source: Arc<dyn StatusSource>,
    persistence: Arc<dyn PersistenceClient>,
    observer: Arc<dyn FetchObserver>,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(source: Arc<dyn StatusSource>, persistence: Arc<dyn PersistenceClient>) -> Self {
        Self::new_with_config(source, persistence, Arc::new(NoopObserver), FetchConfig::default())
    }

    pub(crate) fn new_with_config(
        source: Arc<dyn StatusSource>,
        persistence: Arc<dyn PersistenceClient>,
        observer: Arc<dyn FetchObserver>,
        config: FetchConfig,
    ) -> Self {
        Self {
            source,
            persistence,
            observer,
            config,
        }
    }

    /// Create a builder for fluent construction
    pub fn builder() -> FetcherBuilder {
        FetcherBuilder::new()
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch every status older than `store.last_id` and merge it into `store`.
    ///
    /// The store is saved on every exit path, including rate limiting and
    /// transport failures, so nothing fetched is lost. Rate limiting ends the
    /// loop normally; any other client error is returned after the save.
    pub async fn fetch_all(&self, account_id: &str, mut store: Store) -> Result<FetchReport, FetchError> {
        let mut counters = Counters::default();

        let outcome = self.execute_loop(account_id, &mut store, &mut counters).await;
        let saved = self.persistence.save_store(&store).await;

        match outcome {
            Ok(stop_reason) => {
                saved.map_err(FetchError::Persist)?;

                tracing::info!(
                    pages = counters.pages,
                    new_posts = counters.inserted,
                    total_posts = store.len(),
                    last_id = ?store.last_id,
                    "{}",
                    stop_reason
                );
                self.observer.on_finish(&stop_reason, store.len());

                Ok(FetchReport {
                    store,
                    stop_reason,
                    pages_fetched: counters.pages,
                    new_posts: counters.inserted,
                    skipped_posts: counters.skipped,
                })
            }
            Err(err) => {
                if let Err(persist_err) = saved {
                    tracing::error!(error = %persist_err, "Failed to save cache after fetch error");
                }
                Err(FetchError::Transport(err))
            }
        }
    }

    async fn execute_loop(
        &self,
        account_id: &str,
        store: &mut Store,
        counters: &mut Counters,
    ) -> Result<StopReason, ClientError> {
        // Cursor seen when entering the previous iteration
        let mut previous_cursor: Option<String> = None;

        loop {
            if let Some(cursor) = store.last_id.as_deref() {
                if previous_cursor.as_deref() == Some(cursor) {
                    return Ok(StopReason::Converged);
                }
            }

            // Guardrail: max pages
            if let Some(max_pages) = self.config.max_pages {
                if counters.pages >= max_pages {
                    return Ok(StopReason::PageLimit {
                        pages: counters.pages,
                    });
                }
            }

            previous_cursor = store.last_id.clone();

            let request = StatusesRequest::new(account_id)
                .max_id(store.last_id.clone())
                .limit(PAGE_SIZE);

            let page = match self.source.account_statuses(request).await {
                Ok(page) => page,
                Err(ClientError::RateLimited { reset }) => {
                    tracing::warn!(after = ?store.last_id, reset = ?reset, "Rate limited, stopping");
                    return Ok(StopReason::RateLimited {
                        after: store.last_id.clone(),
                        reset,
                    });
                }
                Err(err) => return Err(err),
            };
            counters.pages += 1;

            tracing::debug!(
                page = counters.pages,
                size = page.len(),
                cursor = ?store.last_id,
                "Fetched page"
            );
            self.observer.on_page(&PageProgress {
                page_number: counters.pages,
                page_len: page.len(),
                total_posts: store.len(),
                cursor: store.last_id.clone(),
            });

            if page.is_empty() {
                return Ok(StopReason::Exhausted);
            }

            for status in page {
                store.last_id = Some(status.id.clone());

                let outcome = if store.contains(&status.id) {
                    counters.skipped += 1;
                    PostOutcome::Skipped
                } else {
                    store.insert(Post::from(status));
                    counters.inserted += 1;
                    PostOutcome::Inserted
                };

                if let Some(post_id) = store.last_id.as_deref() {
                    self.observer.on_post(post_id, outcome, store.len());
                }
            }
        }
    }
}
