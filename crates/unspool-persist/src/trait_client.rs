use async_trait::async_trait;
use unspool_types::Store;

use crate::error::Result;

/// Trait for loading and saving the post store
///
/// Implementations must replace the previous snapshot as a whole: a failed
/// save leaves the last good snapshot readable.
#[async_trait]
pub trait PersistenceClient: Send + Sync {
    /// Load the last saved store, or an empty one if nothing was saved yet
    async fn load_store(&self) -> Result<Store>;

    /// Overwrite the saved store
    async fn save_store(&self, store: &Store) -> Result<()>;
}
