pub mod index;
pub mod watcher;

pub use index::{build_index, for_locale, newest_first, PostSummary};
pub use watcher::{watch_index, SharedIndex};
