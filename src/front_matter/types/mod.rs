pub mod deserializers;
pub mod front_matter;
pub mod post_meta;

pub use front_matter::FrontMatter;
pub use post_meta::{parse_date, PostMeta};
