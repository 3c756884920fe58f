pub mod config;
pub mod engine;
pub mod factors;
pub mod roll;
pub mod tier;
pub mod validation;

pub use config::ScoringConfig;
pub use engine::{
    calculate_score, score, FactorContribution, ScoreBreakdown, ScoreResult, MAX_SCORE, MIN_SCORE,
};
pub use factors::{HostingTier, QualityBand};
pub use roll::{FixedRoll, RandomRoll, RollSource, ScriptedRoll, SeededRoll};
pub use tier::{Tier, TierColor, TierDescriptor, TierIcon};
pub use validation::validate_scoring;
