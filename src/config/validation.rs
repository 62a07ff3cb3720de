use log::{info, warn};

use crate::config::Config;
use crate::utils::error::{BoxResult, SiteError};
use crate::utils::fs;

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_source_directory(config)?;
    validate_content(config)?;
    validate_locales(config)?;
    Ok(())
}

/// Validate the source directory
fn validate_source_directory(config: &Config) -> BoxResult<()> {
    let source = &config.source;

    if !source.exists() {
        return Err(SiteError::Config(format!(
            "Source directory does not exist: {}", source.display()
        )).into());
    }

    if !fs::is_directory(source) {
        return Err(SiteError::Config(format!(
            "Source path is not a directory: {}", source.display()
        )).into());
    }

    info!("Source directory: {}", source.display());
    Ok(())
}

/// Validate content settings. A missing content directory only warns here;
/// scanning it fails loudly later.
fn validate_content(config: &Config) -> BoxResult<()> {
    if config.content_extension.trim_start_matches('.').is_empty() {
        return Err(SiteError::Config("content_extension must not be empty".to_string()).into());
    }

    if config.layout_component.is_empty() {
        return Err(SiteError::Config("layout_component must not be empty".to_string()).into());
    }

    let content_path = config.content_path();
    if !fs::is_directory(&content_path) {
        warn!("Content directory does not exist: {}", content_path.display());
    }

    Ok(())
}

/// Validate locale settings
fn validate_locales(config: &Config) -> BoxResult<()> {
    if !config.locales.contains(&config.default_locale) {
        return Err(SiteError::Config(format!(
            "Default locale '{}' is not one of the configured locales {:?}",
            config.default_locale, config.locales
        )).into());
    }

    if !config.route_prefix.starts_with('/') {
        return Err(SiteError::Config(format!(
            "route_prefix must start with '/': {}", config.route_prefix
        )).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            source: dir.to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn test_default_config_in_existing_dir_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_config(&config_in(dir.path())).is_ok());
    }

    #[test]
    fn test_missing_source_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir.path().join("missing"));
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_default_locale_must_be_listed() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            default_locale: "fr".to_string(),
            ..config_in(dir.path())
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("'fr'"));
    }

    #[test]
    fn test_empty_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            content_extension: ".".to_string(),
            ..config_in(dir.path())
        };
        assert!(validate_config(&config).is_err());
    }
}
