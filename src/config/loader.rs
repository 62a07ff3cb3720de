use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::defaults;
use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, SiteError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = [
    "sitepress.yml",
    "sitepress.yaml",
    "sitepress.toml",
    "sitepress.json",
];

/// Load configuration from config files found in (or given for) `source_dir`
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<Config> {
    // Start with default configuration
    let mut config = Config::default();

    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&source_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    // Set source directory if not already set
    if config.source == defaults::default_source() {
        config.source = source_dir.as_ref().to_path_buf();
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut Config, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(SiteError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| SiteError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    // Parse based on file extension, YAML when there is none
    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    let file_config: Config = match ext.as_str() {
        "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|e| parse_error(config_path, e))?,
        "toml" => toml::from_str(&content).map_err(|e| parse_error(config_path, e))?,
        "json" => serde_json::from_str(&content).map_err(|e| parse_error(config_path, e))?,
        other => {
            return Err(SiteError::Config(format!(
                "Unsupported configuration file format: {}", other
            )).into());
        }
    };

    merge_configs(config, &file_config);
    Ok(())
}

fn parse_error(path: &Path, e: impl std::fmt::Display) -> SiteError {
    SiteError::Config(format!(
        "Failed to parse configuration ({}): {}", path.display(), e
    ))
}

/// Merge two configurations, keeping target values where source is at its default
fn merge_configs(target: &mut Config, source: &Config) {
    let fallback = Config::default();

    if source.source != fallback.source {
        target.source = source.source.clone();
    }

    if source.content_dir != fallback.content_dir {
        target.content_dir = source.content_dir.clone();
    }

    if source.content_extension != fallback.content_extension {
        target.content_extension = source.content_extension.clone();
    }

    if source.layout_component != fallback.layout_component {
        target.layout_component = source.layout_component.clone();
    }

    if source.layout_import != fallback.layout_import {
        target.layout_import = source.layout_import.clone();
    }

    if source.locales != fallback.locales {
        target.locales = source.locales.clone();
    }

    if source.default_locale != fallback.default_locale {
        target.default_locale = source.default_locale.clone();
    }

    if source.route_prefix != fallback.route_prefix {
        target.route_prefix = source.route_prefix.clone();
    }

    // Boolean flags are simply cleared if they're off in the source
    if !source.strict_front_matter {
        target.strict_front_matter = false;
    }

    if source.watch_debounce_ms != fallback.watch_debounce_ms {
        target.watch_debounce_ms = source.watch_debounce_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.source, dir.path());
        assert_eq!(config.content_extension, "mdx");
    }

    #[test]
    fn test_yaml_and_toml_are_layered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("sitepress.yml"),
            "content_dir: posts\nlocales: [en, es, fr]\n",
        ).unwrap();
        fs::write(
            dir.path().join("sitepress.toml"),
            "default_locale = \"fr\"\nstrict_front_matter = false\n",
        ).unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.content_dir, PathBuf::from("posts"));
        assert_eq!(config.locales, vec!["en", "es", "fr"]);
        assert_eq!(config.default_locale, "fr");
        assert!(!config.strict_front_matter);
    }

    #[test]
    fn test_explicit_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{"layout_component": "PostLayout", "watch_debounce_ms": 50}"#).unwrap();

        let config = load_config(dir.path(), Some(vec![path])).unwrap();
        assert_eq!(config.layout_component, "PostLayout");
        assert_eq!(config.watch_debounce_ms, 50);
    }

    #[test]
    fn test_invalid_yaml_names_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sitepress.yml"), "locales: [unclosed\n").unwrap();

        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("sitepress.yml"));
    }
}
