use serde::{Deserialize, Serialize};

pub const DEFAULT_PAAS_MARKERS: &[&str] = &[".vercel.app"];
pub const DEFAULT_ALT_HOST_MARKERS: &[&str] = &["netlify", "github.io"];
pub const DEFAULT_LOW_EFFORT_NAMES: &[&str] = &["test", "untitled"];
pub const DEFAULT_MIN_NAME_LENGTH: usize = 5;

/// Marker lists the scorer matches submissions against.
///
/// Point values and thresholds are fixed; only what counts as a recognised
/// host or a placeholder name can be tuned. Unset fields fall back to the
/// built-in defaults, so `scoring: {}` behaves like no section at all.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   paas_markers: [".vercel.app"]
///   alt_host_markers: ["netlify", "github.io", "pages.dev"]
///   low_effort_names: ["test", "untitled", "my-app"]
///   min_name_length: 5
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Substrings of a lower-cased URL that mark the recommended platform (+8)
    #[serde(default)]
    pub paas_markers: Option<Vec<String>>,

    /// Substrings marking other recognised static hosts (+5)
    #[serde(default)]
    pub alt_host_markers: Option<Vec<String>>,

    /// Substrings of a lower-cased name that mark a placeholder title (-8)
    #[serde(default)]
    pub low_effort_names: Option<Vec<String>>,

    /// Names shorter than this (in characters) are penalised like placeholders
    #[serde(default)]
    pub min_name_length: Option<usize>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            paas_markers: Some(to_owned(DEFAULT_PAAS_MARKERS)),
            alt_host_markers: Some(to_owned(DEFAULT_ALT_HOST_MARKERS)),
            low_effort_names: Some(to_owned(DEFAULT_LOW_EFFORT_NAMES)),
            min_name_length: Some(DEFAULT_MIN_NAME_LENGTH),
        }
    }
}

impl ScoringConfig {
    pub fn paas_markers(&self) -> Vec<String> {
        markers_or(&self.paas_markers, DEFAULT_PAAS_MARKERS)
    }

    pub fn alt_host_markers(&self) -> Vec<String> {
        markers_or(&self.alt_host_markers, DEFAULT_ALT_HOST_MARKERS)
    }

    pub fn low_effort_names(&self) -> Vec<String> {
        markers_or(&self.low_effort_names, DEFAULT_LOW_EFFORT_NAMES)
    }

    pub fn min_name_length(&self) -> usize {
        self.min_name_length.unwrap_or(DEFAULT_MIN_NAME_LENGTH)
    }
}

fn to_owned(markers: &[&str]) -> Vec<String> {
    markers.iter().map(|m| m.to_string()).collect()
}

// Markers are compared against lower-cased input
fn markers_or(configured: &Option<Vec<String>>, defaults: &[&str]) -> Vec<String> {
    match configured {
        Some(markers) => markers.iter().map(|m| m.to_lowercase()).collect(),
        None => to_owned(defaults),
    }
}
