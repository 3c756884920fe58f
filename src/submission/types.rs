use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// A project record as entered in the builder form, before scoring.
///
/// Tag sets deduplicate on insert; only their size feeds the score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSubmission {
    pub name: String,
    pub url: String,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub technologies: BTreeSet<String>,

    #[serde(default)]
    pub features: BTreeSet<String>,

    #[serde(default)]
    pub join_team: bool,

    /// Image reference uploaded by the submitter, if any
    #[serde(default)]
    pub screenshot: Option<String>,
}

impl ProjectSubmission {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_technologies<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.technologies.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_features<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_join_team(mut self, join_team: bool) -> Self {
        self.join_team = join_team;
        self
    }

    pub fn technology_count(&self) -> usize {
        self.technologies.len()
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

/// A scored submission as stored in the gallery.
///
/// Fields are read-only once created: the gallery is append-only and
/// nothing revises a score or timestamp after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredProject {
    id: String,
    name: String,
    author: String,
    url: String,
    technologies: BTreeSet<String>,
    features: BTreeSet<String>,
    join_team: bool,
    screenshot: Option<String>,
    score: u8,
    submitted_at: DateTime<Utc>,
}

impl ScoredProject {
    pub(crate) fn from_submission(
        id: String,
        submission: ProjectSubmission,
        default_author: &str,
        score: u8,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: submission.name,
            author: submission
                .author
                .unwrap_or_else(|| default_author.to_string()),
            url: submission.url,
            technologies: submission.technologies,
            features: submission.features,
            join_team: submission.join_team,
            screenshot: submission.screenshot,
            score,
            submitted_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn technologies(&self) -> &BTreeSet<String> {
        &self.technologies
    }

    pub fn features(&self) -> &BTreeSet<String> {
        &self.features
    }

    pub fn join_team(&self) -> bool {
        self.join_team
    }

    pub fn screenshot(&self) -> Option<&str> {
        self.screenshot.as_deref()
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

/// Batch of submissions read from a YAML file.
///
/// Example:
/// ```yaml
/// submissions:
///   - name: Pixel Forge
///     url: https://pixelforge.dev
///     technologies: [TypeScript, Prisma]
///     features: [Dark Mode]
///     join_team: true
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SubmissionFile {
    #[serde(default)]
    pub submissions: Vec<ProjectSubmission>,
}

/// Load a batch of submissions from a YAML file
pub fn load_submissions(path: &Path) -> Result<Vec<ProjectSubmission>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read submissions file at {}", path.display()))?;

    let file: SubmissionFile = serde_saphyr::from_str(&content).with_context(|| {
        format!(
            "Failed to parse submissions: invalid YAML in {}",
            path.display()
        )
    })?;

    Ok(file.submissions)
}
