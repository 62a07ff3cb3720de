pub mod parser;
pub mod types;

pub use parser::split;
pub use types::{FrontMatter, PostMeta};
