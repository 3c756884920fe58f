use tracing::debug;

use super::config::ScoringConfig;
use super::factors::{
    breadth_points, is_local_url, is_low_effort_name, HostingTier, QualityBand,
    FEATURE_BUCKETS, TECHNOLOGY_BUCKETS,
};
use super::roll::RollSource;
use super::tier::Tier;
use crate::submission::ProjectSubmission;

pub const MIN_SCORE: u8 = 15;
pub const MAX_SCORE: u8 = 95;

const BASE_POINTS: i32 = 10;
const SECURE_SCHEME_POINTS: i32 = 3;
const TEAM_POINTS: i32 = 5;
const LOW_EFFORT_NAME_PENALTY: i32 = -8;
const LOCAL_URL_PENALTY: i32 = -15;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorContribution {
    pub label: String,       // e.g. "Hosting", "Technologies", "Quality"
    pub description: String, // e.g. "custom domain", "6 selected"
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub base: i32,
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Final score, clamped to [MIN_SCORE, MAX_SCORE]
    pub score: u8,
    /// Sum of all points before clamping
    pub raw: i32,
    pub quality: QualityBand,
    pub breakdown: ScoreBreakdown,
}

impl ScoreResult {
    pub fn tier(&self) -> Tier {
        Tier::from_score(self.score)
    }
}

/// Score a submission with the default marker lists.
pub fn score<R: RollSource + ?Sized>(submission: &ProjectSubmission, roll: &mut R) -> u8 {
    calculate_score(submission, &ScoringConfig::default(), roll).score
}

/// Add up the heuristic bonuses and penalties for a submission, then clamp.
///
/// Never fails. The caller must have checked that `name` and `url` are
/// present (see `validate_submission`); the engine does not look.
/// Draws exactly one value from `roll`.
pub fn calculate_score<R: RollSource + ?Sized>(
    submission: &ProjectSubmission,
    config: &ScoringConfig,
    roll: &mut R,
) -> ScoreResult {
    let url = submission.url.to_lowercase();
    let mut factors = Vec::new();

    if url.contains("https://") {
        push_factor(&mut factors, "Secure URL", "https".to_string(), SECURE_SCHEME_POINTS);
    }

    let hosting = HostingTier::classify(&url, &config.paas_markers(), &config.alt_host_markers());
    push_factor(&mut factors, "Hosting", hosting.label().to_string(), hosting.points());

    let tech_count = submission.technology_count();
    push_factor(
        &mut factors,
        "Technologies",
        format!("{} selected", tech_count),
        breadth_points(tech_count, &TECHNOLOGY_BUCKETS),
    );

    let feature_count = submission.feature_count();
    push_factor(
        &mut factors,
        "Features",
        format!("{} selected", feature_count),
        breadth_points(feature_count, &FEATURE_BUCKETS),
    );

    if submission.join_team {
        push_factor(&mut factors, "Team", "applying to join".to_string(), TEAM_POINTS);
    }

    let r = roll.roll();
    let quality = QualityBand::from_roll(r);
    push_factor(
        &mut factors,
        "Quality",
        format!("{} (roll {:.3})", quality.label(), r),
        quality.points(),
    );

    if is_low_effort_name(
        &submission.name,
        &config.low_effort_names(),
        config.min_name_length(),
    ) {
        push_factor(
            &mut factors,
            "Name",
            "looks like a placeholder".to_string(),
            LOW_EFFORT_NAME_PENALTY,
        );
    }

    if is_local_url(&url) {
        push_factor(
            &mut factors,
            "Local URL",
            "not publicly reachable".to_string(),
            LOCAL_URL_PENALTY,
        );
    }

    let raw = BASE_POINTS + factors.iter().map(|f| f.points).sum::<i32>();
    let score = raw.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8;

    debug!(
        name = %submission.name,
        raw,
        score,
        quality = quality.label(),
        "scored submission"
    );

    ScoreResult {
        score,
        raw,
        quality,
        breakdown: ScoreBreakdown {
            base: BASE_POINTS,
            factors,
        },
    }
}

// Zero-point factors are left out of the breakdown
fn push_factor(factors: &mut Vec<FactorContribution>, label: &str, description: String, points: i32) {
    if points != 0 {
        factors.push(FactorContribution {
            label: label.to_string(),
            description,
            points,
        });
    }
}
