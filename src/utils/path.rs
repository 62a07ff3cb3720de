use std::path::Path;

/// Check whether a file name carries the content extension (given without the dot)
pub fn has_content_extension(file_name: &str, extension: &str) -> bool {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    file_name.ends_with(&suffix)
}

/// Derive a post slug from a file name by stripping the content extension
pub fn slug_from_file_name(file_name: &str, extension: &str) -> Option<String> {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    file_name.strip_suffix(&suffix).map(|s| s.to_string())
}

/// File name of a path as UTF-8, if it has one
pub fn file_name_str(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_content_extension() {
        assert!(has_content_extension("hello.mdx", "mdx"));
        assert!(has_content_extension("hello.mdx", ".mdx"));
        assert!(!has_content_extension("hello.md", "mdx"));
        assert!(!has_content_extension("notes.txt", "mdx"));
    }

    #[test]
    fn test_slug_strips_only_the_extension() {
        assert_eq!(slug_from_file_name("my-first-post.en.mdx", "mdx"), Some("my-first-post.en".to_string()));
        assert_eq!(slug_from_file_name("c.txt", "mdx"), None);
    }
}
