use std::sync::atomic::{AtomicUsize, Ordering};
use unspool_graph::{FetchObserver, PageProgress, PostOutcome, StopReason};

/// Reports fetch progress through `tracing`
#[derive(Debug, Default)]
pub struct TracingObserver {
    inserted: AtomicUsize,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts added to the store so far
    pub fn inserted(&self) -> usize {
        self.inserted.load(Ordering::Relaxed)
    }
}

impl FetchObserver for TracingObserver {
    fn on_page(&self, progress: &PageProgress) {
        tracing::info!(
            page = progress.page_number,
            cursor = ?progress.cursor,
            "Statuses found: {} (cached so far: {})",
            progress.page_len,
            progress.total_posts
        );
    }

    fn on_post(&self, post_id: &str, outcome: PostOutcome, total_posts: usize) {
        match outcome {
            PostOutcome::Inserted => {
                self.inserted.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(post_id, total_posts, "Cached status");
            }
            PostOutcome::Skipped => {
                tracing::trace!(post_id, "Status already cached");
            }
        }
    }

    fn on_finish(&self, reason: &StopReason, total_posts: usize) {
        tracing::debug!(
            total_posts,
            inserted = self.inserted(),
            reason = %reason,
            "Fetch finished"
        );
    }
}
