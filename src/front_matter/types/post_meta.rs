use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_yaml::Value;

use super::deserializers::deserialize_tags;
use super::front_matter::FrontMatter;
use crate::utils::error::{SiteError, SiteResult};

/// Typed post metadata, produced by validating a [`FrontMatter`]
#[derive(Debug, Clone, PartialEq)]
pub struct PostMeta {
    pub title: String,
    pub date: NaiveDateTime,
    /// Public slug used in URLs
    pub id: String,
    pub tags: Vec<String>,
    pub lang: String,
}

/// Keys that may be present but must be scalars when they are
pub const OPTIONAL_KEYS: [&str; 2] = ["description", "author"];

/// Keys every post must carry
pub const REQUIRED_KEYS: [&str; 5] = ["title", "date", "id", "tags", "lang"];

impl PostMeta {
    pub fn from_front_matter(fm: &FrontMatter, path: &Path) -> SiteResult<Self> {
        for key in REQUIRED_KEYS {
            if matches!(fm.get(key), None | Some(Value::Null)) {
                return Err(malformed(path, key, "is missing"));
            }
        }

        let date_raw = required_scalar(fm, path, "date")?;
        let date = parse_date(&date_raw).ok_or_else(|| {
            malformed(path, "date", &format!("is not an ISO-8601 date: {}", date_raw))
        })?;

        let tags = match fm.get("tags") {
            Some(value) => deserialize_tags(value.clone())
                .map_err(|e| malformed(path, "tags", &e.to_string()))?,
            None => Vec::new(),
        };

        for key in OPTIONAL_KEYS {
            optional_scalar(fm, path, key)?;
        }

        Ok(PostMeta {
            title: required_scalar(fm, path, "title")?,
            date,
            id: required_scalar(fm, path, "id")?,
            tags,
            lang: required_scalar(fm, path, "lang")?,
        })
    }
}

/// Parse the date formats authors use: RFC 3339, a naive timestamp, or a bare date
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn required_scalar(fm: &FrontMatter, path: &Path, key: &str) -> SiteResult<String> {
    match optional_scalar(fm, path, key)? {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(malformed(path, key, "is empty")),
        None => Err(malformed(path, key, "is missing")),
    }
}

fn optional_scalar(fm: &FrontMatter, path: &Path, key: &str) -> SiteResult<Option<String>> {
    match fm.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(malformed(path, key, "must be a scalar value")),
    }
}

fn malformed(path: &Path, key: &str, reason: &str) -> SiteError {
    SiteError::MalformedContent {
        path: path.to_path_buf(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
