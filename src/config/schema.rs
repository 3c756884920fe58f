use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::gallery::DEFAULT_AUTHOR;
use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Marker overrides for the scorer; defaults apply when absent
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub submission: SubmissionConfig,

    #[serde(default)]
    pub thumbnails: ThumbnailConfig,
}

/// Submission flow settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SubmissionConfig {
    /// Simulated latency before a submission is scored (e.g. "2s", "500ms")
    #[serde(default = "default_delay")]
    pub delay: String,

    /// Author recorded for submissions that do not name one
    #[serde(default = "default_author")]
    pub author: String,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay: default_delay(),
            author: default_author(),
        }
    }
}

impl SubmissionConfig {
    pub fn delay_duration(&self) -> Result<Duration> {
        humantime::parse_duration(self.delay.trim())
            .with_context(|| format!("Invalid submission delay '{}'", self.delay))
    }
}

/// Screenshot service used for demo cards.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThumbnailConfig {
    #[serde(default = "default_service")]
    pub service: String,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_crop")]
    pub crop: u32,

    /// Per-request timeout (humantime format)
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            service: default_service(),
            width: default_width(),
            crop: default_crop(),
            timeout: default_timeout(),
        }
    }
}

impl ThumbnailConfig {
    pub fn timeout_duration(&self) -> Result<Duration> {
        humantime::parse_duration(self.timeout.trim())
            .with_context(|| format!("Invalid thumbnail timeout '{}'", self.timeout))
    }
}

fn default_delay() -> String {
    "2s".to_string()
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

fn default_service() -> String {
    "https://image.thum.io/get".to_string()
}

fn default_width() -> u32 {
    800
}

fn default_crop() -> u32 {
    600
}

fn default_timeout() -> String {
    "10s".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.scoring.is_none());
        assert_eq!(config.submission.delay, "2s");
        assert_eq!(config.submission.author, "Anonymous Builder");
        assert_eq!(config.thumbnails.width, 800);
        assert_eq!(config.thumbnails.crop, 600);
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
scoring:
  alt_host_markers: ["netlify", "pages.dev"]
submission:
  delay: 500ms
  author: Guest Builder
thumbnails:
  service: https://thumbs.example.com/get
  width: 400
  crop: 300
  timeout: 3s
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let scoring = config.scoring.unwrap();
        assert_eq!(scoring.alt_host_markers().len(), 2);
        assert_eq!(
            config.submission.delay_duration().unwrap(),
            Duration::from_millis(500)
        );
        assert_eq!(config.submission.author, "Guest Builder");
        assert_eq!(config.thumbnails.width, 400);
        assert_eq!(
            config.thumbnails.timeout_duration().unwrap(),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let yaml = r#"
submission:
  author: Guest Builder
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.submission.delay, "2s");
        assert_eq!(config.submission.author, "Guest Builder");
    }

    #[test]
    fn test_invalid_delay() {
        let submission = SubmissionConfig {
            delay: "soon".to_string(),
            ..SubmissionConfig::default()
        };
        assert!(submission.delay_duration().is_err());
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("password: v021");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            scoring: Some(ScoringConfig::default()),
            ..Config::default()
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
