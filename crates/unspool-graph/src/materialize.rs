use crate::error::MaterializeError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use unspool_types::{Store, Thread};

const ARTIFACT_EXTENSION: &str = "html";
const BLOCK_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeOptions {
    /// Prefix each file with a link to the root post and its timestamp
    pub permalink_header: bool,
}

/// Writes one file per thread into an output directory
#[derive(Debug, Clone)]
pub struct Materializer {
    output_dir: PathBuf,
    options: MaterializeOptions,
}

impl Materializer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            options: MaterializeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MaterializeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `post_<size>_<rootId>.html`
    ///
    /// Characters of the root id outside `[A-Za-z0-9_-]` become `_`, so the
    /// name always stays inside the output directory.
    pub fn file_name(thread: &Thread) -> String {
        let root_id: String = thread
            .root_id()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        format!(
            "post_{}_{}.{}",
            thread.len(),
            root_id,
            ARTIFACT_EXTENSION
        )
    }

    /// Contents of every post in chain order, separated by blank lines.
    ///
    /// Ids missing from the store are skipped.
    pub fn render(&self, thread: &Thread, store: &Store) -> String {
        let mut blocks: Vec<String> = Vec::with_capacity(thread.len() + 1);

        if self.options.permalink_header {
            if let Some(root) = store.get(thread.root_id()) {
                blocks.push(format!(
                    "<a href=\"{}\">({})</a><br>",
                    root.uri, root.created_at
                ));
            }
        }

        blocks.extend(
            thread
                .post_ids()
                .iter()
                .filter_map(|id| store.get(id))
                .map(|post| post.content.clone()),
        );

        blocks.join(BLOCK_SEPARATOR)
    }

    /// Remove previously written artifacts; other files are left alone.
    ///
    /// Returns how many files were removed.
    pub fn clear(&self) -> Result<usize, MaterializeError> {
        let entries = fs::read_dir(&self.output_dir).map_err(|source| MaterializeError::ReadDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut removed = 0;
        for entry in entries {
            let entry = entry.map_err(|source| MaterializeError::ReadDir {
                path: self.output_dir.clone(),
                source,
            })?;
            let path = entry.path();

            let is_artifact = path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(ARTIFACT_EXTENSION);
            if !is_artifact {
                continue;
            }

            fs::remove_file(&path).map_err(|source| MaterializeError::Remove {
                path: path.clone(),
                source,
            })?;
            removed += 1;
        }

        Ok(removed)
    }

    /// Replace the contents of the output directory with one file per thread
    pub fn materialize(
        &self,
        threads: &BTreeMap<String, Thread>,
        store: &Store,
    ) -> Result<Vec<PathBuf>, MaterializeError> {
        let removed = self.clear()?;
        tracing::debug!(removed, dir = %self.output_dir.display(), "Cleared old threads");

        let mut written = Vec::with_capacity(threads.len());
        for thread in threads.values() {
            let path = self.output_dir.join(Self::file_name(thread));
            fs::write(&path, self.render(thread, store)).map_err(|source| {
                MaterializeError::Write {
                    path: path.clone(),
                    source,
                }
            })?;
            written.push(path);
        }

        tracing::info!(count = written.len(), dir = %self.output_dir.display(), "Wrote threads");
        Ok(written)
    }
}
