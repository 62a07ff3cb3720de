pub mod engine;
pub mod types;
pub mod utils;

pub use engine::parse_document;
pub use types::{Document, Node};
pub use utils::reading_time;
