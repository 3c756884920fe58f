use serde::Serialize;

/// Where a project is deployed, judged from its URL.
///
/// Tiers are mutually exclusive and checked in declaration order, so a
/// `.vercel.app` URL is `Paas` even though it also contains a dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostingTier {
    Paas,
    AlternativeHost,
    CustomDomain,
    Unrecognized,
}

impl HostingTier {
    /// Classify an already lower-cased URL
    pub fn classify(url: &str, paas_markers: &[String], alt_host_markers: &[String]) -> Self {
        if paas_markers.iter().any(|m| url.contains(m.as_str())) {
            HostingTier::Paas
        } else if alt_host_markers.iter().any(|m| url.contains(m.as_str())) {
            HostingTier::AlternativeHost
        } else if url.contains('.') && !url.contains("localhost") {
            HostingTier::CustomDomain
        } else {
            HostingTier::Unrecognized
        }
    }

    // A custom domain outscores the recognised platforms on purpose
    pub fn points(&self) -> i32 {
        match self {
            HostingTier::Paas => 8,
            HostingTier::AlternativeHost => 5,
            HostingTier::CustomDomain => 12,
            HostingTier::Unrecognized => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HostingTier::Paas => "recommended platform",
            HostingTier::AlternativeHost => "alternative host",
            HostingTier::CustomDomain => "custom domain",
            HostingTier::Unrecognized => "unrecognized host",
        }
    }
}

/// Minimum tag count for a breadth bonus.
#[derive(Debug, Clone, Copy)]
pub struct BreadthBucket {
    pub min: usize,
    pub points: i32,
}

/// Ordered highest first; first match wins.
pub const TECHNOLOGY_BUCKETS: [BreadthBucket; 3] = [
    BreadthBucket { min: 6, points: 15 },
    BreadthBucket { min: 4, points: 10 },
    BreadthBucket { min: 2, points: 5 },
];

pub const FEATURE_BUCKETS: [BreadthBucket; 3] = [
    BreadthBucket { min: 6, points: 12 },
    BreadthBucket { min: 4, points: 8 },
    BreadthBucket { min: 2, points: 4 },
];

pub fn breadth_points(count: usize, buckets: &[BreadthBucket]) -> i32 {
    buckets
        .iter()
        .find(|bucket| count >= bucket.min)
        .map(|bucket| bucket.points)
        .unwrap_or(0)
}

/// Outcome of the quality roll that stands in for subjective judging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityBand {
    Exceptional,
    Great,
    Good,
    Decent,
    Basic,
}

impl QualityBand {
    /// Map a draw from [0, 1) onto the band distribution:
    /// 5% exceptional, 10% great, 20% good, 30% decent, 35% basic.
    ///
    /// Draws below zero land in `Exceptional`; draws at or above one, and
    /// NaN, land in `Basic`.
    pub fn from_roll(r: f64) -> Self {
        if r < 0.05 {
            QualityBand::Exceptional
        } else if r < 0.15 {
            QualityBand::Great
        } else if r < 0.35 {
            QualityBand::Good
        } else if r < 0.65 {
            QualityBand::Decent
        } else {
            QualityBand::Basic
        }
    }

    pub fn points(&self) -> i32 {
        match self {
            QualityBand::Exceptional => 25,
            QualityBand::Great => 18,
            QualityBand::Good => 12,
            QualityBand::Decent => 8,
            QualityBand::Basic => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityBand::Exceptional => "exceptional",
            QualityBand::Great => "great",
            QualityBand::Good => "good",
            QualityBand::Decent => "decent",
            QualityBand::Basic => "basic",
        }
    }
}

/// Placeholder-looking names: a marker substring or too short.
pub fn is_low_effort_name(name: &str, markers: &[String], min_length: usize) -> bool {
    let lowered = name.to_lowercase();
    markers.iter().any(|m| lowered.contains(m.as_str())) || name.chars().count() < min_length
}

/// Local development URLs that nobody else can open
pub fn is_local_url(url: &str) -> bool {
    url.contains("localhost") || url.contains("127.0.0.1")
}
