pub mod comrak;

pub use self::comrak::parse_document;
