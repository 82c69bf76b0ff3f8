pub mod post;
pub mod store;
pub mod thread;

pub use post::{Post, Tag};
pub use store::Store;
pub use thread::Thread;
