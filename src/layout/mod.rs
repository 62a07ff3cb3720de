pub mod binding;
pub mod injector;

pub use binding::EsmStatement;
pub use injector::{compile_file, LayoutBinding};
