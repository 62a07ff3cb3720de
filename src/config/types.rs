use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::layout::LayoutBinding;
use crate::locale::LocaleRewriter;

/// Site configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site root
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Directory holding the posts, relative to `source` unless absolute
    #[serde(default = "defaults::default_content_dir")]
    pub content_dir: PathBuf,

    /// Extension of post files, without the dot
    #[serde(default = "defaults::default_content_extension")]
    pub content_extension: String,

    /// Layout component every post renders through
    #[serde(default = "defaults::default_layout_component")]
    pub layout_component: String,

    /// Module the layout component is imported from
    #[serde(default = "defaults::default_layout_import")]
    pub layout_import: String,

    /// Supported locales
    #[serde(default = "defaults::default_locales")]
    pub locales: Vec<String>,

    /// Locale served without a path prefix
    #[serde(default = "defaults::default_locale")]
    pub default_locale: String,

    /// Route prefix whose paths get a locale suffix
    #[serde(default = "defaults::default_route_prefix")]
    pub route_prefix: String,

    /// Validate the post schema while building the index
    #[serde(default = "defaults::default_strict_front_matter")]
    pub strict_front_matter: bool,

    /// Quiet period before a change triggers a re-scan
    #[serde(default = "defaults::default_watch_debounce_ms")]
    pub watch_debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            content_dir: defaults::default_content_dir(),
            content_extension: defaults::default_content_extension(),
            layout_component: defaults::default_layout_component(),
            layout_import: defaults::default_layout_import(),
            locales: defaults::default_locales(),
            default_locale: defaults::default_locale(),
            route_prefix: defaults::default_route_prefix(),
            strict_front_matter: defaults::default_strict_front_matter(),
            watch_debounce_ms: defaults::default_watch_debounce_ms(),
        }
    }
}

impl Config {
    /// Resolved content directory
    pub fn content_path(&self) -> PathBuf {
        if self.content_dir.is_absolute() {
            self.content_dir.clone()
        } else {
            self.source.join(&self.content_dir)
        }
    }

    pub fn layout_binding(&self) -> LayoutBinding {
        LayoutBinding {
            component: self.layout_component.clone(),
            import_source: self.layout_import.clone(),
        }
    }

    pub fn locale_rewriter(&self) -> LocaleRewriter {
        LocaleRewriter::new(&self.route_prefix, &self.default_locale, self.locales.clone())
    }

    pub fn watch_debounce(&self) -> Duration {
        Duration::from_millis(self.watch_debounce_ms)
    }
}
