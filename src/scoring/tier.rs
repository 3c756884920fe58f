//! Score tiers for badges and severity colors.
//!
//! One set of breakpoints drives label, color and icon together.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Tier {
    Learning,
    Good,
    Great,
    Excellent,
    Legendary,
}

/// Minimum score per tier, highest first; first match wins
const THRESHOLDS: [(u8, Tier); 4] = [
    (85, Tier::Legendary),
    (75, Tier::Excellent),
    (65, Tier::Great),
    (50, Tier::Good),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TierColor {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TierIcon {
    Trophy,
    Award,
    Star,
    Target,
    Zap,
}

impl TierIcon {
    pub fn key(&self) -> &'static str {
        match self {
            TierIcon::Trophy => "trophy",
            TierIcon::Award => "award",
            TierIcon::Star => "star",
            TierIcon::Target => "target",
            TierIcon::Zap => "zap",
        }
    }
}

/// Everything a renderer needs to draw a score badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierDescriptor {
    pub tier: Tier,
    pub label: &'static str,
    pub color: TierColor,
    pub icon: TierIcon,
}

impl Tier {
    pub fn from_score(score: u8) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::Learning)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Legendary => "Legendary",
            Tier::Excellent => "Excellent",
            Tier::Great => "Great",
            Tier::Good => "Good",
            Tier::Learning => "Learning",
        }
    }

    pub fn descriptor(&self) -> TierDescriptor {
        let (color, icon) = match self {
            Tier::Legendary => (TierColor::Green, TierIcon::Trophy),
            Tier::Excellent => (TierColor::Blue, TierIcon::Award),
            Tier::Great => (TierColor::Yellow, TierIcon::Star),
            Tier::Good => (TierColor::Orange, TierIcon::Target),
            Tier::Learning => (TierColor::Red, TierIcon::Zap),
        };
        TierDescriptor {
            tier: *self,
            label: self.label(),
            color,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(Tier::from_score(95), Tier::Legendary);
        assert_eq!(Tier::from_score(85), Tier::Legendary);
        assert_eq!(Tier::from_score(84), Tier::Excellent);
        assert_eq!(Tier::from_score(75), Tier::Excellent);
        assert_eq!(Tier::from_score(74), Tier::Great);
        assert_eq!(Tier::from_score(65), Tier::Great);
        assert_eq!(Tier::from_score(64), Tier::Good);
        assert_eq!(Tier::from_score(50), Tier::Good);
        assert_eq!(Tier::from_score(49), Tier::Learning);
        assert_eq!(Tier::from_score(15), Tier::Learning);
        assert_eq!(Tier::from_score(0), Tier::Learning);
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(Tier::from_score(90).label(), "Legendary");
        assert_eq!(Tier::from_score(20).label(), "Learning");
    }

    #[test]
    fn test_descriptor_colors_follow_tier() {
        assert_eq!(Tier::Legendary.descriptor().color, TierColor::Green);
        assert_eq!(Tier::Excellent.descriptor().color, TierColor::Blue);
        assert_eq!(Tier::Great.descriptor().color, TierColor::Yellow);
        assert_eq!(Tier::Good.descriptor().color, TierColor::Orange);
        assert_eq!(Tier::Learning.descriptor().color, TierColor::Red);
    }

    #[test]
    fn test_descriptor_icons() {
        assert_eq!(Tier::Legendary.descriptor().icon.key(), "trophy");
        assert_eq!(Tier::Good.descriptor().icon.key(), "target");
        assert_eq!(Tier::Learning.descriptor().icon.key(), "zap");
    }

    #[test]
    fn test_tiers_ordered() {
        assert!(Tier::Legendary > Tier::Excellent);
        assert!(Tier::Good > Tier::Learning);
    }

    #[test]
    fn test_tier_monotonic_in_score() {
        let mut previous = Tier::from_score(0);
        for score in 1..=100u8 {
            let tier = Tier::from_score(score);
            assert!(tier >= previous, "tier dropped at score {}", score);
            previous = tier;
        }
    }
}
