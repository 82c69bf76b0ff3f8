use crate::error::Result;
use crate::mastodon::{Account, Status};
use async_trait::async_trait;

/// Remote source of an account's statuses
///
/// The fetch engine only talks to this trait, so tests can script pages and
/// failures without a server.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Resolve a handle (`alice` or `alice@example.social`) to an account
    async fn lookup_account(&self, acct: &str) -> Result<Account>;

    /// One page of statuses, newest first.
    ///
    /// Must fail with [`crate::ClientError::RateLimited`] when the server
    /// throttles the caller.
    async fn account_statuses(&self, request: StatusesRequest) -> Result<Vec<Status>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusesRequest {
    pub account_id: String,
    /// Only return statuses strictly older than this id
    pub max_id: Option<String>,
    pub limit: u32,
}

impl StatusesRequest {
    pub const DEFAULT_LIMIT: u32 = 40;

    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            max_id: None,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    pub fn max_id(mut self, max_id: Option<String>) -> Self {
        self.max_id = max_id;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}
