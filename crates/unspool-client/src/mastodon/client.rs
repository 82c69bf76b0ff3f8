// Mastodon REST client implementation

use crate::config::InstanceConfig;
use crate::error::{ClientError, Result};
use crate::mastodon::types::{Account, Status};
use crate::traits::{StatusSource, StatusesRequest};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Mastodon client (HTTP direct, no SDK)
pub struct MastodonClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MastodonClient {
    /// Create a client for the configured instance.
    ///
    /// An empty access token sends unauthenticated requests, which public
    /// accounts allow.
    pub fn new(config: InstanceConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !config.access_token.is_empty() {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", config.access_token))
                    .map_err(|_| ClientError::InvalidConfig("Invalid access token format".to_string()))?,
            );
        }

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("unspool/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ClientError::InvalidConfig(format!("Invalid instance URL: {}", e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");

        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let reset = response
                .headers()
                .get(RATE_LIMIT_RESET_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            return Err(ClientError::RateLimited { reset });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

#[async_trait]
impl StatusSource for MastodonClient {
    async fn lookup_account(&self, acct: &str) -> Result<Account> {
        let mut url = self.endpoint("/api/v1/accounts/lookup")?;
        url.query_pairs_mut().append_pair("acct", acct);

        match self.get_json(url).await {
            Err(ClientError::Api { status: 404, .. }) => {
                Err(ClientError::AccountNotFound(acct.to_string()))
            }
            other => other,
        }
    }

    async fn account_statuses(&self, request: StatusesRequest) -> Result<Vec<Status>> {
        let mut url = self.endpoint("/api/v1/accounts/")?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidConfig("Instance URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push(&request.account_id)
            .push("statuses");
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &request.limit.to_string());
            if let Some(max_id) = &request.max_id {
                query.append_pair("max_id", max_id);
            }
        }

        self.get_json(url).await
    }
}
