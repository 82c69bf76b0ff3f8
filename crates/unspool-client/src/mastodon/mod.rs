pub mod client;
pub mod types;

pub use client::MastodonClient;
pub use types::{Account, Status, StatusTag};
