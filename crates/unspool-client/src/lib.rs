pub mod config;
pub mod error;
pub mod mastodon;
pub mod traits;

pub use config::InstanceConfig;
pub use error::{ClientError, Result};
pub use mastodon::{Account, MastodonClient, Status, StatusTag};
pub use traits::{StatusSource, StatusesRequest};
