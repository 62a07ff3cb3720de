use chrono::NaiveDateTime;
use serde::Serialize;

use crate::front_matter::types::parse_date;
use crate::front_matter::{FrontMatter, PostMeta};

/// One entry of the post index, as the listing page consumes it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostSummary {
    /// Front matter exactly as authored
    pub data: FrontMatter,

    /// File name without the content extension
    pub slug: String,

    /// Estimated reading time in minutes
    #[serde(rename = "readTime")]
    pub read_time: u32,

    /// Validated metadata, present when strict validation is on
    #[serde(skip)]
    pub meta: Option<PostMeta>,
}

impl PostSummary {
    pub fn lang(&self) -> Option<&str> {
        match &self.meta {
            Some(meta) => Some(meta.lang.as_str()),
            None => self.data.get_str("lang"),
        }
    }

    pub fn date(&self) -> Option<NaiveDateTime> {
        match &self.meta {
            Some(meta) => Some(meta.date),
            None => self.data.get_str("date").and_then(parse_date),
        }
    }
}
