use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use unspool_types::Store;

use crate::error::{PersistError, Result};
use crate::trait_client::PersistenceClient;

pub const DEFAULT_CACHE_FILE_NAME: &str = "cached_data.json";

/// Store persisted as a pretty-printed JSON file.
///
/// Saves go to a sibling `.tmp` file which is then renamed over the target,
/// so a crash mid-write never truncates the previous cache.
#[derive(Debug, Clone)]
pub struct CacheFile {
    path: PathBuf,
}

impl CacheFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `cached_data.json` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_CACHE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl PersistenceClient for CacheFile {
    async fn load_store(&self) -> Result<Store> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No cache file yet, starting empty");
                return Ok(Store::default());
            }
            Err(source) => {
                return Err(PersistError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let store: Store = serde_json::from_slice(&bytes).map_err(|source| PersistError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %self.path.display(),
            posts = store.len(),
            last_id = ?store.last_id,
            "Loaded cache"
        );
        Ok(store)
    }

    async fn save_store(&self, store: &Store) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(store)?;
        let temp_path = self.temp_path();

        tokio::fs::write(&temp_path, &bytes)
            .await
            .map_err(|source| PersistError::Write {
                path: temp_path.clone(),
                source,
            })?;

        if let Err(source) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(PersistError::Write {
                path: self.path.clone(),
                source,
            });
        }

        tracing::debug!(
            path = %self.path.display(),
            posts = store.len(),
            last_id = ?store.last_id,
            "Saved cache"
        );
        Ok(())
    }
}
