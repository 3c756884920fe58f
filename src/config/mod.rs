mod init;
mod schema;

pub use init::write_default_config;
pub use schema::{Config, SubmissionConfig, ThumbnailConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::scoring::validate_scoring;

/// Get the config directory path (~/.config/showcase/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("showcase"))
}

/// Get the default config file path (~/.config/showcase/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => {
            let default_path = get_config_path()?;
            if !default_path.exists() {
                debug!(path = %default_path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            default_path
        }
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Validate the whole configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref scoring) = config.scoring {
        if let Err(scoring_errors) = validate_scoring(scoring) {
            errors.extend(scoring_errors);
        }
    }

    if let Err(e) = config.submission.delay_duration() {
        errors.push(format!("submission.delay: {:#}", e));
    }
    if config.submission.author.trim().is_empty() {
        errors.push("submission.author: must not be empty".to_string());
    }

    let thumbnails = &config.thumbnails;
    if !thumbnails.service.starts_with("http://") && !thumbnails.service.starts_with("https://") {
        errors.push(format!(
            "thumbnails.service: '{}' must be an http(s) URL",
            thumbnails.service
        ));
    }
    if thumbnails.width == 0 {
        errors.push("thumbnails.width: must be positive".to_string());
    }
    if thumbnails.crop == 0 {
        errors.push("thumbnails.crop: must be positive".to_string());
    }
    if let Err(e) = thumbnails.timeout_duration() {
        errors.push(format!("thumbnails.timeout: {:#}", e));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
