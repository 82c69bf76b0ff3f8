pub mod cache_file;
pub mod error;
pub mod memory;
pub mod trait_client;

pub use cache_file::{CacheFile, DEFAULT_CACHE_FILE_NAME};
pub use error::PersistError;
pub use memory::InMemoryClient;
pub use trait_client::PersistenceClient;
