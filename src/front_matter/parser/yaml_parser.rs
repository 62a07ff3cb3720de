use log::debug;
use serde_yaml::Value;

use crate::front_matter::types::FrontMatter;
use crate::utils::error::{SiteError, SiteResult};

/// Front matter delimiter line
const DELIMITER: &str = "---";

/// A content file split into its metadata block and the rest
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedContent {
    pub data: FrontMatter,
    /// Everything after the closing delimiter line, untouched
    pub content: String,
}

impl ParsedContent {
    fn absent(raw: &str) -> Self {
        ParsedContent {
            data: FrontMatter::default(),
            content: raw.to_string(),
        }
    }
}

/// Split `raw` into front matter and content.
///
/// The block must open on the first line with `---` and close on a later
/// `---` line. Exactly one line break after the closing delimiter belongs
/// to the block. A missing or unclosed block is not an error: the data is
/// empty and the content is the whole text. A block that does not hold a
/// YAML mapping is an error.
pub fn split(raw: &str) -> SiteResult<ParsedContent> {
    let Some(body_start) = opening_delimiter_end(raw) else {
        return Ok(ParsedContent::absent(raw));
    };

    let mut pos = body_start;
    loop {
        let line_end = raw[pos..].find('\n').map(|i| pos + i);
        let line = &raw[pos..line_end.unwrap_or(raw.len())];

        if is_delimiter(line) {
            let data = parse_yaml(&raw[body_start..pos])?;
            let content_start = line_end.map_or(raw.len(), |i| i + 1);
            return Ok(ParsedContent {
                data,
                content: raw[content_start..].to_string(),
            });
        }

        match line_end {
            Some(i) => pos = i + 1,
            None => break,
        }
    }

    debug!("Front matter block is never closed, treating file as plain content");
    Ok(ParsedContent::absent(raw))
}

/// Byte offset just past the opening delimiter line, if the text has one
fn opening_delimiter_end(raw: &str) -> Option<usize> {
    let line_end = raw.find('\n')?;
    is_delimiter(&raw[..line_end]).then_some(line_end + 1)
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn parse_yaml(block: &str) -> SiteResult<FrontMatter> {
    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    let value: Value = serde_yaml::from_str(block)
        .map_err(|e| SiteError::FrontMatter(format!("invalid YAML: {}", e)))?;

    match value {
        Value::Mapping(mapping) => Ok(FrontMatter::from_mapping(mapping)),
        Value::Null => Ok(FrontMatter::default()),
        _ => Err(SiteError::FrontMatter(
            "front matter must be a mapping of keys to values".to_string(),
        )),
    }
}
