use async_trait::async_trait;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use unspool_types::Store;

use crate::error::{PersistError, Result};
use crate::trait_client::PersistenceClient;

/// In-process store snapshot, for tests and dry runs
#[derive(Debug, Default)]
pub struct InMemoryClient {
    snapshot: RwLock<Option<Store>>,
    saves: AtomicUsize,
    fail_saves: bool,
}

impl InMemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: Store) -> Self {
        Self {
            snapshot: RwLock::new(Some(store)),
            ..Self::default()
        }
    }

    /// Every save returns a write error and keeps the old snapshot
    pub fn with_failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Last saved store, if any
    pub async fn snapshot(&self) -> Option<Store> {
        self.snapshot.read().await.clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PersistenceClient for InMemoryClient {
    async fn load_store(&self) -> Result<Store> {
        Ok(self.snapshot.read().await.clone().unwrap_or_default())
    }

    async fn save_store(&self, store: &Store) -> Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves {
            return Err(PersistError::Write {
                path: PathBuf::from("<memory>"),
                source: io::Error::new(io::ErrorKind::Other, "saves disabled"),
            });
        }
        *self.snapshot.write().await = Some(store.clone());
        Ok(())
    }
}
