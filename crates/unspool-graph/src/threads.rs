//! Reply-chain reconstruction.
//!
//! Every post is walked up through its `in_reply_to_id` pointers to the
//! furthest ancestor present in the store. The resulting root-first chains
//! are grouped by root and only the longest chain per root is kept.

use std::collections::{BTreeMap, HashSet};
use unspool_types::{Store, Thread};

/// Default for the `--minimum-thread-size` option
pub const DEFAULT_MINIMUM_THREAD_SIZE: usize = 3;

/// Ancestors of `post_id` present in the store, root first, excluding the
/// post itself.
///
/// The walk stops at a post without a parent, at a parent missing from the
/// store, or when a reply pointer leads back to an id already visited.
pub fn ancestors_of(store: &Store, post_id: &str) -> Vec<String> {
    let mut ancestors = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(post_id);

    let mut current = store.get(post_id);
    while let Some(post) = current {
        let Some(parent_id) = post.in_reply_to_id.as_deref() else {
            break;
        };
        let Some(parent) = store.get(parent_id) else {
            break;
        };
        if !visited.insert(parent.id.as_str()) {
            tracing::warn!(post_id, parent_id, "Reply cycle detected, cutting chain");
            break;
        }
        ancestors.push(parent.id.clone());
        current = Some(parent);
    }

    ancestors.reverse();
    ancestors
}

/// Longest reply chain per conversation root.
///
/// A post contributes a chain only when it has strictly more than
/// `minimum_thread_size` ancestors, so the shortest thread kept is
/// `minimum_thread_size + 1` posts long. Among chains sharing a root the
/// longest wins; on equal length the first in store order (ascending id) is
/// kept.
pub fn build_threads(store: &Store, minimum_thread_size: usize) -> BTreeMap<String, Thread> {
    let mut threads: BTreeMap<String, Thread> = BTreeMap::new();

    for post in store.posts() {
        let mut chain = ancestors_of(store, &post.id);
        if chain.len() <= minimum_thread_size {
            continue;
        }
        chain.push(post.id.clone());

        let Some(thread) = Thread::from_chain(chain) else {
            continue;
        };
        let root_id = thread.root_id().to_string();

        match threads.get(&root_id) {
            Some(existing) if existing.len() >= thread.len() => {}
            _ => {
                threads.insert(root_id, thread);
            }
        }
    }

    tracing::debug!(posts = store.len(), threads = threads.len(), "Built threads");
    threads
}
