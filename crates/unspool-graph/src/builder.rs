use std::sync::Arc;

use anyhow::{anyhow, Result};
use unspool_client::StatusSource;
use unspool_persist::PersistenceClient;

use crate::fetch::{FetchConfig, Fetcher};
use crate::observer::{FetchObserver, NoopObserver};

/// Builder for constructing a Fetcher with optional components
pub struct FetcherBuilder {
    source: Option<Arc<dyn StatusSource>>,
    persistence: Option<Arc<dyn PersistenceClient>>,
    observer: Option<Arc<dyn FetchObserver>>,
    config: FetchConfig,
}

impl FetcherBuilder {
    pub fn new() -> Self {
        Self {
            source: None,
            persistence: None,
            observer: None,
            config: FetchConfig::default(),
        }
    }

    /// Set the remote status source
    pub fn source(mut self, source: Arc<dyn StatusSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set where the store is saved
    pub fn persistence(mut self, persistence: Arc<dyn PersistenceClient>) -> Self {
        self.persistence = Some(persistence);
        self
    }

    /// Receive progress callbacks
    pub fn observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the Fetcher
    pub fn build(self) -> Result<Fetcher> {
        let source = self.source
            .ok_or_else(|| anyhow!("Status source is required"))?;
        let persistence = self.persistence
            .ok_or_else(|| anyhow!("Persistence client is required"))?;
        let observer = self.observer.unwrap_or_else(|| Arc::new(NoopObserver));

        Ok(Fetcher::new_with_config(
            source,
            persistence,
            observer,
            self.config,
        ))
    }
}

impl Default for FetcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
