/// A reply chain retained for one conversation root.
///
/// Ids run root-first and end at the leaf post; each post replies to the one
/// before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    post_ids: Vec<String>,
}

impl Thread {
    /// Build a thread from a root-first chain of ids.
    ///
    /// Returns `None` for an empty chain.
    pub fn from_chain(post_ids: Vec<String>) -> Option<Self> {
        if post_ids.is_empty() {
            None
        } else {
            Some(Self { post_ids })
        }
    }

    pub fn root_id(&self) -> &str {
        &self.post_ids[0]
    }

    pub fn leaf_id(&self) -> &str {
        &self.post_ids[self.post_ids.len() - 1]
    }

    pub fn post_ids(&self) -> &[String] {
        &self.post_ids
    }

    pub fn len(&self) -> usize {
        self.post_ids.len()
    }

    /// Always `false`; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.post_ids.is_empty()
    }
}
