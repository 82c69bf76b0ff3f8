// Fetch loop tests against a scripted status source and in-memory persistence

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use unspool_client::{Account, ClientError, Status, StatusSource, StatusesRequest};
use unspool_graph::{
    FetchConfig, FetchError, FetchObserver, Fetcher, PageProgress, Post, PostOutcome, StopReason,
    Store, PAGE_SIZE,
};
use unspool_persist::InMemoryClient;

type Page = Result<Vec<Status>, ClientError>;

/// Replays queued pages in order; an exhausted script returns empty pages
#[derive(Default)]
struct ScriptedSource {
    pages: Mutex<VecDeque<Page>>,
    repeat_last: Option<Vec<Status>>,
    requests: Mutex<Vec<StatusesRequest>>,
}

impl ScriptedSource {
    fn new(pages: Vec<Page>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            ..Self::default()
        }
    }

    /// Answers every request with the same page
    fn repeating(page: Vec<Status>) -> Self {
        Self {
            repeat_last: Some(page),
            ..Self::default()
        }
    }

    fn requests(&self) -> Vec<StatusesRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn lookup_account(&self, acct: &str) -> unspool_client::Result<Account> {
        Err(ClientError::AccountNotFound(acct.to_string()))
    }

    async fn account_statuses(&self, request: StatusesRequest) -> unspool_client::Result<Vec<Status>> {
        self.requests.lock().unwrap().push(request);

        if let Some(page) = &self.repeat_last {
            return Ok(page.clone());
        }
        self.pages.lock().unwrap().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl FetchObserver for RecordingObserver {
    fn on_page(&self, progress: &PageProgress) {
        self.events
            .lock()
            .unwrap()
            .push(format!("page {} len {}", progress.page_number, progress.page_len));
    }

    fn on_post(&self, post_id: &str, outcome: PostOutcome, _total_posts: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("post {} {:?}", post_id, outcome));
    }

    fn on_finish(&self, reason: &StopReason, total_posts: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("finish {} total {}", reason, total_posts));
    }
}

fn status(id: &str, content: &str) -> Status {
    Status {
        id: id.to_string(),
        uri: format!("https://example.social/users/me/statuses/{}", id),
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        content: content.to_string(),
        visibility: "public".to_string(),
        spoiler_text: String::new(),
        tags: Vec::new(),
        in_reply_to_id: None,
        in_reply_to_account_id: None,
        url: None,
    }
}

fn page(ids: &[&str]) -> Page {
    Ok(ids.iter().map(|id| status(id, &format!("post {}", id))).collect())
}

fn fetcher(source: Arc<ScriptedSource>, persistence: Arc<InMemoryClient>) -> Fetcher {
    Fetcher::new(source, persistence)
}

#[tokio::test]
async fn test_existing_posts_are_not_overwritten() {
    let mut store = Store::new();
    store.insert(Post::new("3", "original"));

    let source = Arc::new(ScriptedSource::new(vec![page(&["4", "3", "2"])]));
    let persistence = Arc::new(InMemoryClient::new());

    let report = fetcher(source, persistence)
        .fetch_all("acct", store)
        .await
        .unwrap();

    assert_eq!(report.store.len(), 3);
    assert_eq!(report.store.get("3").unwrap().content, "original");
    assert_eq!(report.store.get("4").unwrap().content, "post 4");
    assert_eq!(report.new_posts, 2);
    assert_eq!(report.skipped_posts, 1);
}

#[tokio::test]
async fn test_disjoint_pages_until_exhausted() {
    let source = Arc::new(ScriptedSource::new(vec![
        page(&["9", "8", "7"]),
        page(&["6", "5"]),
    ]));
    let persistence = Arc::new(InMemoryClient::new());

    let report = fetcher(source.clone(), persistence.clone())
        .fetch_all("acct", Store::new())
        .await
        .unwrap();

    assert_eq!(report.stop_reason, StopReason::Exhausted);
    assert_eq!(report.pages_fetched, 3);
    assert_eq!(report.store.len(), 5);
    assert_eq!(report.store.last_id.as_deref(), Some("5"));

    let cursors: Vec<Option<String>> = source.requests().into_iter().map(|r| r.max_id).collect();
    assert_eq!(
        cursors,
        vec![None, Some("7".to_string()), Some("5".to_string())]
    );
    assert!(source.requests().iter().all(|r| r.limit == PAGE_SIZE && r.account_id == "acct"));

    let saved = persistence.snapshot().await.unwrap();
    assert_eq!(saved, report.store);
    assert_eq!(persistence.save_count(), 1);
}

#[tokio::test]
async fn test_repeated_cursor_converges_after_one_noop_page() {
    let source = Arc::new(ScriptedSource::repeating(vec![
        status("5", "five"),
        status("4", "four"),
    ]));
    let persistence = Arc::new(InMemoryClient::new());

    let report = fetcher(source.clone(), persistence)
        .fetch_all("acct", Store::new())
        .await
        .unwrap();

    assert_eq!(report.stop_reason, StopReason::Converged);
    assert_eq!(source.requests().len(), 2);
    assert_eq!(report.store.len(), 2);
    assert_eq!(report.new_posts, 2);
    assert_eq!(report.skipped_posts, 2);
}

#[tokio::test]
async fn test_rate_limit_keeps_first_page() {
    let source = Arc::new(ScriptedSource::new(vec![
        page(&["30", "20", "10"]),
        Err(ClientError::RateLimited {
            reset: Some("2024-01-01T00:05:00.000Z".to_string()),
        }),
    ]));
    let persistence = Arc::new(InMemoryClient::new());

    let report = fetcher(source, persistence.clone())
        .fetch_all("acct", Store::new())
        .await
        .unwrap();

    assert_eq!(
        report.stop_reason,
        StopReason::RateLimited {
            after: Some("10".to_string()),
            reset: Some("2024-01-01T00:05:00.000Z".to_string()),
        }
    );
    assert_eq!(report.stop_reason.to_string(), "Too many requests after id \"10\"");

    let saved = persistence.snapshot().await.unwrap();
    assert_eq!(saved.ids().collect::<Vec<_>>(), vec!["10", "20", "30"]);
    assert_eq!(saved.last_id.as_deref(), Some("10"));
}

#[tokio::test]
async fn test_transport_error_persists_before_failing() {
    let source = Arc::new(ScriptedSource::new(vec![
        page(&["2", "1"]),
        Err(ClientError::Api {
            status: 502,
            body: "bad gateway".to_string(),
        }),
    ]));
    let persistence = Arc::new(InMemoryClient::new());

    let result = fetcher(source, persistence.clone())
        .fetch_all("acct", Store::new())
        .await;

    match result {
        Err(FetchError::Transport(ClientError::Api { status, .. })) => assert_eq!(status, 502),
        other => panic!("expected transport error, got {:?}", other.map(|r| r.stop_reason)),
    }

    let saved = persistence.snapshot().await.unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved.last_id.as_deref(), Some("1"));
    assert_eq!(persistence.save_count(), 1);
}

#[tokio::test]
async fn test_resumes_from_saved_cursor() {
    let store = Store::with_last_id(Some("100".to_string()));
    let source = Arc::new(ScriptedSource::new(vec![page(&["99"])]));
    let persistence = Arc::new(InMemoryClient::new());

    let report = fetcher(source.clone(), persistence)
        .fetch_all("acct", store)
        .await
        .unwrap();

    let requests = source.requests();
    assert_eq!(requests[0].max_id.as_deref(), Some("100"));
    assert_eq!(requests[1].max_id.as_deref(), Some("99"));
    assert_eq!(report.stop_reason, StopReason::Exhausted);
}

#[tokio::test]
async fn test_page_limit_stops_benignly() {
    let source = Arc::new(ScriptedSource::new(vec![
        page(&["3"]),
        page(&["2"]),
        page(&["1"]),
    ]));
    let persistence = Arc::new(InMemoryClient::new());

    let fetcher = Fetcher::builder()
        .source(source.clone())
        .persistence(persistence.clone())
        .config(FetchConfig::new().with_max_pages(2))
        .build()
        .unwrap();

    let report = fetcher.fetch_all("acct", Store::new()).await.unwrap();

    assert_eq!(report.stop_reason, StopReason::PageLimit { pages: 2 });
    assert_eq!(source.requests().len(), 2);
    assert_eq!(persistence.snapshot().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_failed_save_is_reported() {
    let source = Arc::new(ScriptedSource::new(vec![page(&["1"])]));
    let persistence = Arc::new(InMemoryClient::new().with_failing_saves());

    let result = fetcher(source, persistence).fetch_all("acct", Store::new()).await;

    assert!(matches!(result, Err(FetchError::Persist(_))));
}

#[tokio::test]
async fn test_transport_error_wins_over_failed_save() {
    let source = Arc::new(ScriptedSource::new(vec![Err(ClientError::Api {
        status: 500,
        body: String::new(),
    })]));
    let persistence = Arc::new(InMemoryClient::new().with_failing_saves());

    let result = fetcher(source, persistence.clone())
        .fetch_all("acct", Store::new())
        .await;

    assert!(matches!(result, Err(FetchError::Transport(_))));
    assert_eq!(persistence.save_count(), 1);
}

#[tokio::test]
async fn test_observer_sees_pages_posts_and_finish() {
    let mut store = Store::new();
    store.insert(Post::new("1", "cached"));

    let source = Arc::new(ScriptedSource::new(vec![page(&["2", "1"])]));
    let observer = Arc::new(RecordingObserver::default());

    let fetcher = Fetcher::builder()
        .source(source)
        .persistence(Arc::new(InMemoryClient::new()))
        .observer(observer.clone())
        .build()
        .unwrap();

    fetcher.fetch_all("acct", store).await.unwrap();

    let events = observer.events.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            "page 1 len 2",
            "post 2 Inserted",
            "post 1 Skipped",
            "page 2 len 0",
            "finish No more statuses to check total 2",
        ]
    );
}
