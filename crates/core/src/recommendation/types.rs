//! Types for the Size Recommendation Engine

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::measurement::Metric;
use crate::domain::profile::SizeProfileId;

/// Outcome of scoring one shopper measurement set against one size profile.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchScore {
    /// Root-mean-square of effective deviations across shared metrics; lower
    /// is better. `f64::INFINITY` when the sets share no metrics, which keeps
    /// the profile from ever winning.
    pub distance: f64,
    /// Number of metrics present in both sets.
    pub matched_count: usize,
    /// Effective deviation per shared metric, after stretch and tolerance.
    pub per_metric_deviation: BTreeMap<Metric, f64>,
}

impl MatchScore {
    /// A profile with no metric overlap: cannot be evaluated, must never win.
    pub fn incomparable() -> Self {
        Self {
            distance: f64::INFINITY,
            matched_count: 0,
            per_metric_deviation: BTreeMap::new(),
        }
    }
}

/// A size recommendation with confidence and justification tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Display name of the winning size profile (e.g. "M", "UK 10").
    pub recommended_size: String,
    pub size_profile_id: SizeProfileId,
    /// 0-100, rounded.
    pub confidence: u8,
    pub reason: ReasonTier,
}

/// Justification tier shown alongside a recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonTier {
    /// Confidence >= 90
    Excellent,
    /// Confidence 75-89
    Good,
    /// Confidence 60-74
    Suggested,
}

impl ReasonTier {
    /// Human-readable justification text.
    pub fn description(&self) -> &'static str {
        match self {
            ReasonTier::Excellent => "excellent match",
            ReasonTier::Good => "good match",
            ReasonTier::Suggested => "suggested match",
        }
    }
}
