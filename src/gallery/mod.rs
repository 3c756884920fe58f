pub mod ranking;

pub use ranking::{rank, showcase, RankedEntry, Showcase};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::scoring::{calculate_score, RollSource, ScoringConfig};
use crate::submission::{ProjectSubmission, ScoredProject};

pub const DEFAULT_AUTHOR: &str = "Anonymous Builder";

/// Issues millisecond-timestamp ids, bumping past any id already handed out
/// so two submissions in the same millisecond still get distinct ids.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let id = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(id);
        id.to_string()
    }
}

/// In-memory, append-only collection of scored projects, newest first.
///
/// Nothing is ever updated or removed. Display order lives in
/// [`rank`]/[`showcase`] and is recomputed on every call.
#[derive(Debug, Clone)]
pub struct Gallery {
    projects: Vec<ScoredProject>,
    ids: IdGenerator,
    scoring: ScoringConfig,
    default_author: String,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(ScoringConfig::default(), DEFAULT_AUTHOR)
    }
}

impl Gallery {
    pub fn new(scoring: ScoringConfig, default_author: impl Into<String>) -> Self {
        Self {
            projects: Vec::new(),
            ids: IdGenerator::new(),
            scoring,
            default_author: default_author.into(),
        }
    }

    /// Score a submission and store it at the front of the gallery.
    ///
    /// The submission must already have passed `validate_submission`.
    pub fn add<R: RollSource + ?Sized>(
        &mut self,
        submission: ProjectSubmission,
        roll: &mut R,
    ) -> &ScoredProject {
        let result = calculate_score(&submission, &self.scoring, roll);
        let submitted_at = Utc::now();
        let id = self.ids.next_id(submitted_at);

        info!(id = %id, name = %submission.name, score = result.score, "added project to gallery");

        let project = ScoredProject::from_submission(
            id,
            submission,
            &self.default_author,
            result.score,
            submitted_at,
        );
        self.projects.insert(0, project);
        &self.projects[0]
    }

    pub fn get(&self, id: &str) -> Option<&ScoredProject> {
        self.projects.iter().find(|p| p.id() == id)
    }

    /// Stored projects in submission order, newest first
    pub fn projects(&self) -> &[ScoredProject] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn showcase(&self) -> Showcase<'_> {
        showcase(&self.projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{FixedRoll, ScriptedRoll};
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn test_id_generator_uses_timestamp() {
        let mut ids = IdGenerator::new();
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(ids.next_id(now), "1700000000123");
    }

    #[test]
    fn test_id_generator_bumps_same_millisecond() {
        let mut ids = IdGenerator::new();
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        assert_eq!(ids.next_id(now), "1700000000000");
        assert_eq!(ids.next_id(now), "1700000000001");
        assert_eq!(ids.next_id(now), "1700000000002");
    }

    #[test]
    fn test_id_generator_never_goes_backwards() {
        let mut ids = IdGenerator::new();
        let later = Utc.timestamp_millis_opt(1_700_000_000_500).unwrap();
        let earlier = Utc.timestamp_millis_opt(1_700_000_000_100).unwrap();
        assert_eq!(ids.next_id(later), "1700000000500");
        assert_eq!(ids.next_id(earlier), "1700000000501");
    }

    #[test]
    fn test_empty_gallery() {
        let gallery = Gallery::default();
        assert!(gallery.is_empty());
        assert_eq!(gallery.len(), 0);
        assert!(matches!(gallery.showcase(), Showcase::Empty));
    }

    #[test]
    fn test_add_prepends() {
        let mut gallery = Gallery::default();
        let mut roll = FixedRoll(0.5);
        gallery.add(ProjectSubmission::new("First Project", "https://first.dev"), &mut roll);
        gallery.add(ProjectSubmission::new("Second Project", "https://second.dev"), &mut roll);

        let names: Vec<&str> = gallery.projects().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Second Project", "First Project"]);
    }

    #[test]
    fn test_add_assigns_unique_ids() {
        let mut gallery = Gallery::default();
        let mut roll = FixedRoll(0.5);
        for i in 0..50 {
            gallery.add(
                ProjectSubmission::new(format!("Project {}", i), "https://p.dev"),
                &mut roll,
            );
        }
        let ids: HashSet<&str> = gallery.projects().iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_add_scores_submission() {
        let mut gallery = Gallery::default();
        let submission = ProjectSubmission::new("MyGreatProject", "https://myproject.io")
            .with_technologies(["a", "b", "c", "d", "e", "f"])
            .with_features(["a", "b", "c", "d", "e", "f"])
            .with_join_team(true);
        let project = gallery.add(submission, &mut FixedRoll(0.01));
        assert_eq!(project.score(), 82);
        assert_eq!(project.author(), DEFAULT_AUTHOR);
    }

    #[test]
    fn test_get_by_id() {
        let mut gallery = Gallery::default();
        let id = gallery
            .add(ProjectSubmission::new("Quiz Garden", "https://quiz.dev"), &mut FixedRoll(0.5))
            .id()
            .to_string();
        assert_eq!(gallery.get(&id).map(|p| p.name()), Some("Quiz Garden"));
        assert!(gallery.get("missing").is_none());
    }

    #[test]
    fn test_custom_default_author() {
        let mut gallery = Gallery::new(ScoringConfig::default(), "Guest");
        let project = gallery.add(
            ProjectSubmission::new("Quiz Garden", "https://quiz.dev"),
            &mut FixedRoll(0.5),
        );
        assert_eq!(project.author(), "Guest");
    }

    #[test]
    fn test_showcase_ranks_gallery() {
        let mut gallery = Gallery::default();
        let mut roll = ScriptedRoll::new(vec![0.9, 0.01]);
        gallery.add(ProjectSubmission::new("Plain Project", "https://plain.dev"), &mut roll);
        gallery.add(ProjectSubmission::new("Lucky Project", "https://lucky.dev"), &mut roll);

        match gallery.showcase() {
            Showcase::Ranked(entries) => {
                assert_eq!(entries[0].project.name(), "Lucky Project");
                assert!(entries[0].top_score);
                assert!(!entries[1].top_score);
            }
            Showcase::Empty => panic!("expected ranked showcase"),
        }
    }
}
