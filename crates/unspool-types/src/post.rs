use serde::{Deserialize, Serialize};

/// A single status authored by the archived account, reduced to the fields
/// that are kept in the local cache.
///
/// Every field is stored verbatim as the server returned it, so a cache file
/// written by one run reads back byte-for-byte in the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub uri: String,
    pub created_at: String,
    /// Rendered HTML body
    pub content: String,
    pub visibility: String,
    #[serde(default)]
    pub spoiler_text: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Parent status, which may live outside the local store
    pub in_reply_to_id: Option<String>,
    pub in_reply_to_account_id: Option<String>,
}

impl Post {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            uri: String::new(),
            created_at: String::new(),
            content: content.into(),
            visibility: "public".to_string(),
            spoiler_text: String::new(),
            tags: Vec::new(),
            in_reply_to_id: None,
            in_reply_to_account_id: None,
        }
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    pub fn in_reply_to(mut self, parent_id: impl Into<String>) -> Self {
        self.in_reply_to_id = Some(parent_id.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Whether this post has no parent at all
    pub fn is_root(&self) -> bool {
        self.in_reply_to_id.is_none()
    }
}

/// Hashtag attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
