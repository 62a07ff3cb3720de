use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref INTERNAL_PATH_REGEX: Regex = Regex::new(r"^/(api|_next)/").unwrap();
    static ref ASSET_PATH_REGEX: Regex = Regex::new(r"\.(jpe?g|svg|png|webmanifest)$").unwrap();
}

/// Maps a post route onto the localized file that serves it:
/// `/blog/hello` becomes `/blog/hello.en`, or `/es/blog/hello.es` for a
/// non-default locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleRewriter {
    route_prefix: String,
    default_locale: String,
    locales: Vec<String>,
}

impl LocaleRewriter {
    pub fn new(route_prefix: &str, default_locale: &str, locales: Vec<String>) -> Self {
        LocaleRewriter {
            route_prefix: route_prefix.to_string(),
            default_locale: default_locale.to_string(),
            locales,
        }
    }

    /// Whether a request path is subject to rewriting
    pub fn should_handle(&self, pathname: &str) -> bool {
        pathname.starts_with(&self.route_prefix)
            && !INTERNAL_PATH_REGEX.is_match(pathname)
            && !ASSET_PATH_REGEX.is_match(pathname)
            && pathname != "/500"
    }

    /// The requested locale if supported, the default locale otherwise
    pub fn resolve_locale<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(locale) if self.locales.iter().any(|l| l == locale) => locale,
            _ => self.default_locale.as_str(),
        }
    }

    /// Rewritten path for `pathname` (plus query `search`, including its `?`),
    /// or `None` when the path is not handled or already localized.
    pub fn rewrite(&self, pathname: &str, search: &str, locale: Option<&str>) -> Option<String> {
        if !self.should_handle(pathname) {
            return None;
        }

        let locale = self.resolve_locale(locale);
        let pathname = pathname.strip_suffix('/').unwrap_or(pathname);

        if pathname.ends_with(&format!(".{}", locale)) {
            return None;
        }

        let localized = format!("{}.{}{}", pathname, locale, search);
        let rewritten = self.add_locale_prefix(&localized, locale);
        debug!("Rewriting {} to {}", pathname, rewritten);
        Some(rewritten)
    }

    fn add_locale_prefix(&self, path: &str, locale: &str) -> String {
        let prefix = format!("/{}", locale);
        let already_prefixed = path == prefix || path.starts_with(&format!("{}/", prefix));

        if locale == self.default_locale || already_prefixed {
            path.to_string()
        } else {
            format!("{}{}", prefix, path)
        }
    }
}
