use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::post::Post;

/// Local mirror of an account's posts plus the pagination cursor.
///
/// Posts are keyed by their own id, and iteration runs in ascending id order
/// so every derived computation is deterministic. The serialized form is the
/// cache file layout:
///
/// ```json
/// { "last_id": "109", "statuses": { "109": { "id": "109", ... } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoreRepr")]
pub struct Store {
    /// Oldest post id seen so far, `None` before the first page
    pub last_id: Option<String>,
    #[serde(rename = "statuses")]
    posts: BTreeMap<String, Post>,
}

/// Raw cache layout; keys are re-derived from each post's id on load.
#[derive(Deserialize)]
struct StoreRepr {
    #[serde(default)]
    last_id: Option<String>,
    #[serde(default)]
    statuses: BTreeMap<String, Post>,
}

impl From<StoreRepr> for Store {
    fn from(repr: StoreRepr) -> Self {
        let mut store = Store::with_last_id(repr.last_id);
        for post in repr.statuses.into_values() {
            store.insert(post);
        }
        store
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last_id(last_id: Option<String>) -> Self {
        Self {
            last_id,
            posts: BTreeMap::new(),
        }
    }

    /// Insert a post unless its id is already present.
    ///
    /// Returns `false` when the id was known; the stored record is left as is.
    pub fn insert(&mut self, post: Post) -> bool {
        if self.posts.contains_key(&post.id) {
            return false;
        }
        self.posts.insert(post.id.clone(), post);
        true
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.posts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Posts in ascending id order
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.posts.keys().map(String::as_str)
    }
}

impl FromIterator<Post> for Store {
    fn from_iter<I: IntoIterator<Item = Post>>(iter: I) -> Self {
        let mut store = Store::new();
        for post in iter {
            store.insert(post);
        }
        store
    }
}
