use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Common result type for CLI and configuration code
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Result type for the content pipeline
pub type SiteResult<T> = Result<T, SiteError>;

/// Error types for Sitepress operations
#[derive(Debug)]
pub enum SiteError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Content directory missing or unreadable
    DirectoryScan { path: PathBuf, source: io::Error },
    /// A listed content file could not be read
    FileRead { path: PathBuf, source: io::Error },
    /// Front matter block present but not a YAML mapping
    FrontMatter(String),
    /// Front matter parsed but a required key is missing or invalid
    MalformedContent { path: PathBuf, key: String, reason: String },
    /// File watcher error
    Watch(String),
    /// Generic error message
    Generic(String),
}

impl SiteError {
    /// Attach a file path to a front matter error
    pub fn in_file(self, path: &std::path::Path) -> Self {
        match self {
            SiteError::FrontMatter(msg) => {
                SiteError::FrontMatter(format!("{}: {}", path.display(), msg))
            }
            other => other,
        }
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Io(err) => write!(f, "IO error: {}", err),
            SiteError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SiteError::DirectoryScan { path, source } => {
                write!(f, "Cannot scan content directory {}: {}", path.display(), source)
            }
            SiteError::FileRead { path, source } => {
                write!(f, "Cannot read content file {}: {}", path.display(), source)
            }
            SiteError::FrontMatter(msg) => write!(f, "Front matter error: {}", msg),
            SiteError::MalformedContent { path, key, reason } => write!(
                f,
                "Malformed content in {}: key `{}` {}",
                path.display(),
                key,
                reason
            ),
            SiteError::Watch(msg) => write!(f, "Watch error: {}", msg),
            SiteError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for SiteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SiteError::Io(err) => Some(err),
            SiteError::DirectoryScan { source, .. } | SiteError::FileRead { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl From<io::Error> for SiteError {
    fn from(err: io::Error) -> Self {
        SiteError::Io(err)
    }
}

impl From<notify::Error> for SiteError {
    fn from(err: notify::Error) -> Self {
        SiteError::Watch(err.to_string())
    }
}

impl From<String> for SiteError {
    fn from(msg: String) -> Self {
        SiteError::Generic(msg)
    }
}

impl From<&str> for SiteError {
    fn from(msg: &str) -> Self {
        SiteError::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_malformed_content_names_file_and_key() {
        let err = SiteError::MalformedContent {
            path: PathBuf::from("pages/blog/hello.mdx"),
            key: "title".to_string(),
            reason: "is missing".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pages/blog/hello.mdx"));
        assert!(msg.contains("`title`"));
    }

    #[test]
    fn test_in_file_only_touches_front_matter_errors() {
        let err = SiteError::FrontMatter("bad yaml".to_string()).in_file(Path::new("a.mdx"));
        assert_eq!(err.to_string(), "Front matter error: a.mdx: bad yaml");

        let err = SiteError::Generic("other".to_string()).in_file(Path::new("a.mdx"));
        assert_eq!(err.to_string(), "other");
    }
}
