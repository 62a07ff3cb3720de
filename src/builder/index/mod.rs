pub mod collector;
pub mod listing;
pub mod model;

pub use collector::{build_index, rebuild_lenient};
pub use listing::{for_locale, newest_first};
pub use model::PostSummary;
