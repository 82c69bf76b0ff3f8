// Wire types for the Mastodon REST API (only the fields we read)

use serde::{Deserialize, Serialize};
use unspool_types::{Post, Tag};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub acct: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub uri: String,
    pub created_at: String,
    #[serde(default)]
    pub content: String,
    pub visibility: String,
    #[serde(default)]
    pub spoiler_text: String,
    #[serde(default)]
    pub tags: Vec<StatusTag>,
    #[serde(default)]
    pub in_reply_to_id: Option<String>,
    #[serde(default)]
    pub in_reply_to_account_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusTag {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl From<StatusTag> for Tag {
    fn from(tag: StatusTag) -> Self {
        Tag::new(tag.name, tag.url)
    }
}

/// Project a status onto the fields kept in the cache
impl From<Status> for Post {
    fn from(status: Status) -> Self {
        Post {
            id: status.id,
            uri: status.uri,
            created_at: status.created_at,
            content: status.content,
            visibility: status.visibility,
            spoiler_text: status.spoiler_text,
            tags: status.tags.into_iter().map(Tag::from).collect(),
            in_reply_to_id: status.in_reply_to_id,
            in_reply_to_account_id: status.in_reply_to_account_id,
        }
    }
}
