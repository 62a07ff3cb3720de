use std::path::PathBuf;

/// Default site root
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default content directory, relative to the site root
pub fn default_content_dir() -> PathBuf {
    PathBuf::from("pages/blog")
}

/// Default content file extension (without the dot)
pub fn default_content_extension() -> String {
    "mdx".to_string()
}

/// Default layout component name
pub fn default_layout_component() -> String {
    "BlogLayoutPage".to_string()
}

/// Default import specifier of the layout component, relative to the compiled post
pub fn default_layout_import() -> String {
    "../../components/blog-layout.tsx".to_string()
}

/// Default supported locales
pub fn default_locales() -> Vec<String> {
    vec!["en".to_string(), "es".to_string()]
}

/// Default locale
pub fn default_locale() -> String {
    "en".to_string()
}

/// Default route prefix handled by the locale rewrite
pub fn default_route_prefix() -> String {
    "/blog/".to_string()
}

/// Strict front matter validation
pub fn default_strict_front_matter() -> bool {
    true
}

/// Default debounce for the content watcher
pub fn default_watch_debounce_ms() -> u64 {
    500
}
