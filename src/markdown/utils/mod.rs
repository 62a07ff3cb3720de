pub mod reading_time;

pub use reading_time::reading_time;
