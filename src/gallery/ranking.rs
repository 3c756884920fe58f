use serde::Serialize;

use crate::scoring::{Tier, TierDescriptor};
use crate::submission::ScoredProject;

/// Order projects by score, highest first.
///
/// The sort is stable: equal scores keep their input order, which for a
/// gallery means newest first. Ranking a ranked list returns it unchanged.
pub fn rank(projects: &[ScoredProject]) -> Vec<&ScoredProject> {
    let mut ranked: Vec<&ScoredProject> = projects.iter().collect();
    ranked.sort_by(|a, b| b.score().cmp(&a.score()));
    ranked
}

/// One card in the rendered showcase.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry<'a> {
    /// 1-based display position
    pub rank: usize,
    /// Only the first entry carries the "Top Score" badge
    pub top_score: bool,
    pub tier: TierDescriptor,
    #[serde(flatten)]
    pub project: &'a ScoredProject,
}

#[derive(Debug, Clone)]
pub enum Showcase<'a> {
    /// Nothing submitted yet; renderers show an empty-state message
    Empty,
    Ranked(Vec<RankedEntry<'a>>),
}

impl Showcase<'_> {
    pub fn entries(&self) -> &[RankedEntry<'_>] {
        match self {
            Showcase::Empty => &[],
            Showcase::Ranked(entries) => entries,
        }
    }
}

/// Build the display view: rank, position and top-score flag, derived fresh.
pub fn showcase(projects: &[ScoredProject]) -> Showcase<'_> {
    if projects.is_empty() {
        return Showcase::Empty;
    }

    let entries = rank(projects)
        .into_iter()
        .enumerate()
        .map(|(idx, project)| RankedEntry {
            rank: idx + 1,
            top_score: idx == 0,
            tier: Tier::from_score(project.score()).descriptor(),
            project,
        })
        .collect();

    Showcase::Ranked(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::ProjectSubmission;
    use chrono::Utc;

    fn project(id: &str, score: u8) -> ScoredProject {
        ScoredProject::from_submission(
            id.to_string(),
            ProjectSubmission::new(format!("Project {}", id), format!("https://{}.dev", id)),
            "Anonymous Builder",
            score,
            Utc::now(),
        )
    }

    fn ids(ranked: &[&ScoredProject]) -> Vec<String> {
        ranked.iter().map(|p| p.id().to_string()).collect()
    }

    #[test]
    fn test_rank_empty() {
        let projects: Vec<ScoredProject> = vec![];
        assert!(rank(&projects).is_empty());
    }

    #[test]
    fn test_rank_by_score_descending() {
        let projects = vec![project("a", 40), project("b", 90), project("c", 65)];
        assert_eq!(ids(&rank(&projects)), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rank_stable_on_ties() {
        // Gallery order is newest first; ties keep it
        let projects = vec![
            project("newest", 50),
            project("top", 80),
            project("middle", 50),
            project("oldest", 50),
        ];
        assert_eq!(ids(&rank(&projects)), vec!["top", "newest", "middle", "oldest"]);
    }

    #[test]
    fn test_rank_idempotent() {
        let projects = vec![project("a", 30), project("b", 70), project("c", 70), project("d", 15)];
        let once: Vec<ScoredProject> = rank(&projects).into_iter().cloned().collect();
        let twice: Vec<ScoredProject> = rank(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_showcase_empty() {
        let projects: Vec<ScoredProject> = vec![];
        let view = showcase(&projects);
        assert!(matches!(view, Showcase::Empty));
        assert!(view.entries().is_empty());
    }

    #[test]
    fn test_showcase_positions_and_top_score() {
        let projects = vec![project("a", 52), project("b", 88)];
        let view = showcase(&projects);
        let entries = view.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].rank, 1);
        assert!(entries[0].top_score);
        assert_eq!(entries[0].tier.label, "Legendary");
        assert_eq!(entries[1].rank, 2);
        assert!(!entries[1].top_score);
        assert_eq!(entries[1].tier.label, "Good");
    }

    #[test]
    fn test_showcase_single_project_is_top() {
        let projects = vec![project("solo", 20)];
        let view = showcase(&projects);
        assert!(view.entries()[0].top_score);
    }
}
