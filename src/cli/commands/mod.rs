mod index;
mod inject;
mod rewrite;
mod watch;

pub use index::handle_index_command;
pub use inject::handle_inject_command;
pub use rewrite::handle_rewrite_command;
pub use watch::handle_watch_command;
