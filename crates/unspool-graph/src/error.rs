use std::io;
use std::path::PathBuf;
use thiserror::Error;
use unspool_client::ClientError;
use unspool_persist::PersistError;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Remote failure other than rate limiting. The store was saved first.
    #[error("Failed to fetch statuses")]
    Transport(#[source] ClientError),

    #[error("Failed to save the status cache")]
    Persist(#[source] PersistError),
}

#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("Failed to list output directory {}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove old thread file {}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write thread file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
