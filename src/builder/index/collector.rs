use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::builder::index::model::PostSummary;
use crate::config::Config;
use crate::front_matter;
use crate::markdown::reading_time;
use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs;
use crate::utils::path::{file_name_str, has_content_extension, slug_from_file_name};

/// Scan the content directory and summarize every post, in directory
/// listing order. Any failure aborts the whole scan.
pub fn build_index(config: &Config) -> SiteResult<Vec<PostSummary>> {
    let dir = config.content_path();
    debug!("Scanning content directory {}", dir.display());

    let posts = list_content_files(&dir, &config.content_extension)?
        .iter()
        .map(|path| summarize(path, config))
        .collect::<SiteResult<Vec<_>>>()?;

    info!("Indexed {} posts from {}", posts.len(), dir.display());
    Ok(posts)
}

/// Re-scan for a live index: files that fail are skipped with a warning and
/// their previous entry is kept; if the directory itself fails the previous
/// index is returned as is.
pub fn rebuild_lenient(config: &Config, previous: &[PostSummary]) -> Vec<PostSummary> {
    let dir = config.content_path();

    let files = match list_content_files(&dir, &config.content_extension) {
        Ok(files) => files,
        Err(e) => {
            warn!("{}; keeping the previous index", e);
            return previous.to_vec();
        }
    };

    let mut posts = Vec::with_capacity(files.len());
    for path in files {
        match summarize(&path, config) {
            Ok(post) => posts.push(post),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                let slug = slug_for(&path, &config.content_extension);
                if let Some(old) = previous.iter().find(|post| post.slug == slug) {
                    posts.push(old.clone());
                }
            }
        }
    }

    info!("Re-indexed {} posts from {}", posts.len(), dir.display());
    posts
}

/// Content files directly inside `dir` whose name ends with the extension
pub fn list_content_files(dir: &Path, extension: &str) -> SiteResult<Vec<PathBuf>> {
    if !fs::is_directory(dir) {
        return Err(SiteError::DirectoryScan {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "not an existing directory"),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| SiteError::DirectoryScan {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;

        let path = entry.path();
        match file_name_str(path) {
            Some(name) if path.is_file() && has_content_extension(name, extension) => {
                files.push(entry.into_path());
            }
            _ => debug!("Skipping {}", path.display()),
        }
    }

    Ok(files)
}

/// Read one content file and build its summary
pub fn summarize(path: &Path, config: &Config) -> SiteResult<PostSummary> {
    let raw = fs::read_content(path)?;
    let parsed = front_matter::split(&raw).map_err(|e| e.in_file(path))?;

    let meta = if config.strict_front_matter {
        let meta = parsed.data.validate(path)?;
        debug!("{}: `{}` ({}) tagged [{}]", meta.id, meta.title, meta.lang, meta.tags.join(", "));
        Some(meta)
    } else {
        None
    };

    Ok(PostSummary {
        read_time: reading_time(&parsed.content),
        slug: slug_for(path, &config.content_extension),
        data: parsed.data,
        meta,
    })
}

fn slug_for(path: &Path, extension: &str) -> String {
    let name = file_name_str(path).unwrap_or_default();
    slug_from_file_name(name, extension).unwrap_or_else(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    fn post(title: &str, id: &str, lang: &str, body: &str) -> String {
        format!(
            "---\ntitle: {}\ndescription: A post\ndate: 2023-03-01\nid: {}\ntags: rust, web\nlang: {}\n---\n{}",
            title, id, lang, body
        )
    }

    fn site() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("pages/blog");
        stdfs::create_dir_all(&content).unwrap();
        let config = Config {
            source: dir.path().to_path_buf(),
            ..Config::default()
        };
        (dir, config)
    }

    /// File names as the OS lists them
    fn listing_order(dir: &Path) -> Vec<String> {
        stdfs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .filter(|name| name.ends_with(".mdx"))
            .map(|name| name.trim_end_matches(".mdx").to_string())
            .collect()
    }

    #[test]
    fn test_index_filters_extension_and_keeps_listing_order() {
        let (_dir, config) = site();
        let content = config.content_path();
        stdfs::write(content.join("a.mdx"), post("Hola", "hola", "es", "Hola mundo")).unwrap();
        stdfs::write(content.join("b.mdx"), post("Hello", "hello", "en", "Hello world")).unwrap();
        stdfs::write(content.join("c.txt"), "not a post").unwrap();

        let posts = build_index(&config).unwrap();
        let slugs: Vec<String> = posts.iter().map(|p| p.slug.clone()).collect();
        assert_eq!(slugs, listing_order(&content));
        assert_eq!(posts.len(), 2);

        let english: Vec<&PostSummary> = posts.iter().filter(|p| p.lang() == Some("en")).collect();
        assert_eq!(english.len(), 1);
        assert_eq!(english[0].slug, "b");
    }

    #[test]
    fn test_summary_fields() {
        let (_dir, config) = site();
        let body = vec!["word"; 300].join(" ");
        stdfs::write(config.content_path().join("long-read.mdx"), post("Long", "long", "en", &body)).unwrap();

        let posts = build_index(&config).unwrap();
        let summary = &posts[0];
        assert_eq!(summary.slug, "long-read");
        assert_eq!(summary.read_time, 2);
        assert_eq!(summary.data.get_str("title"), Some("Long"));
        assert_eq!(summary.meta.as_ref().unwrap().tags, vec!["rust", "web"]);
    }

    #[test]
    fn test_summary_serializes_for_listing_page() {
        let (_dir, config) = site();
        stdfs::write(config.content_path().join("b.mdx"), post("Hello", "hello", "en", "Hi")).unwrap();

        let posts = build_index(&config).unwrap();
        let json: serde_json::Value = serde_json::to_value(&posts).unwrap();
        assert_eq!(json[0]["slug"], "b");
        assert_eq!(json[0]["readTime"], 1);
        assert_eq!(json[0]["data"]["lang"], "en");
        assert!(json[0].get("meta").is_none());
    }

    #[test]
    fn test_subdirectories_are_not_scanned() {
        let (_dir, config) = site();
        let nested = config.content_path().join("drafts.mdx");
        stdfs::create_dir_all(&nested).unwrap();
        stdfs::write(nested.join("inner.mdx"), post("x", "x", "en", "x")).unwrap();

        assert!(build_index(&config).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let (_dir, config) = site();
        let config = Config {
            content_dir: PathBuf::from("nope"),
            ..config
        };

        match build_index(&config) {
            Err(SiteError::DirectoryScan { path, .. }) => assert!(path.ends_with("nope")),
            other => panic!("expected DirectoryScan, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_post_fails_whole_scan() {
        let (_dir, config) = site();
        let content = config.content_path();
        stdfs::write(content.join("good.mdx"), post("Good", "good", "en", "ok")).unwrap();
        stdfs::write(content.join("bad.mdx"), "---\ntitle: No date\n---\nbody").unwrap();

        match build_index(&config) {
            Err(SiteError::MalformedContent { path, key, .. }) => {
                assert!(path.ends_with("bad.mdx"));
                assert_eq!(key, "date");
            }
            other => panic!("expected MalformedContent, got {:?}", other),
        }
    }

    #[test]
    fn test_lenient_mode_skips_validation() {
        let (_dir, config) = site();
        stdfs::write(config.content_path().join("loose.mdx"), "no front matter at all").unwrap();
        let config = Config {
            strict_front_matter: false,
            ..config
        };

        let posts = build_index(&config).unwrap();
        assert!(posts[0].data.is_empty());
        assert!(posts[0].meta.is_none());
    }

    #[test]
    fn test_rebuild_lenient_keeps_previous_entry_for_broken_file() {
        let (_dir, config) = site();
        let content = config.content_path();
        stdfs::write(content.join("a.mdx"), post("A", "a", "en", "first")).unwrap();
        stdfs::write(content.join("b.mdx"), post("B", "b", "en", "second")).unwrap();
        let previous = build_index(&config).unwrap();

        stdfs::write(content.join("a.mdx"), "---\ntitle: [broken\n---\n").unwrap();
        stdfs::write(content.join("c.mdx"), post("C", "c", "es", "third")).unwrap();

        let next = rebuild_lenient(&config, &previous);
        assert_eq!(next.len(), 3);
        let a = next.iter().find(|p| p.slug == "a").unwrap();
        assert_eq!(a.data.get_str("title"), Some("A"));
        assert!(next.iter().any(|p| p.slug == "c"));
    }

    #[test]
    fn test_rebuild_lenient_keeps_index_when_directory_vanishes() {
        let (_dir, config) = site();
        stdfs::write(config.content_path().join("a.mdx"), post("A", "a", "en", "first")).unwrap();
        let previous = build_index(&config).unwrap();

        stdfs::remove_dir_all(config.content_path()).unwrap();
        assert_eq!(rebuild_lenient(&config, &previous), previous);
    }
}
