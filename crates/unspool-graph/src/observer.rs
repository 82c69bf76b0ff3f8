use crate::fetch::StopReason;

/// Progress callbacks for the fetch loop
///
/// Called synchronously from the loop, in order, on the fetching task. Every
/// method has an empty default so implementations pick what they need.
pub trait FetchObserver: Send + Sync {
    /// A page came back from the server (called before its posts are merged)
    fn on_page(&self, _progress: &PageProgress) {}

    /// One post of the current page was merged or skipped
    fn on_post(&self, _post_id: &str, _outcome: PostOutcome, _total_posts: usize) {}

    /// The loop ended without a fatal error
    fn on_finish(&self, _reason: &StopReason, _total_posts: usize) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageProgress {
    /// 1-based request counter for this run
    pub page_number: usize,
    pub page_len: usize,
    /// Posts in the store before this page was merged
    pub total_posts: usize,
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOutcome {
    Inserted,
    /// Already in the store; left untouched
    Skipped,
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FetchObserver for NoopObserver {}
