// Connection settings for a Mastodon-compatible instance

use serde::{Deserialize, Serialize};

/// Instance and credentials used to build a [`crate::MastodonClient`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceConfig {
    /// Host name (`mastodon.social`) or full base URL (`https://mastodon.social`)
    pub instance: String,
    pub access_token: String,
}

impl InstanceConfig {
    pub fn new(instance: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            access_token: access_token.into(),
        }
    }

    /// Base URL with scheme and without a trailing slash.
    ///
    /// A bare host name is assumed to speak HTTPS.
    pub fn base_url(&self) -> String {
        let instance = self.instance.trim().trim_end_matches('/');
        if instance.starts_with("http://") || instance.starts_with("https://") {
            instance.to_string()
        } else {
            format!("https://{}", instance)
        }
    }
}
