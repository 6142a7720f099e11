//! Size Recommendation Engine
//!
//! Pure recommendation pipeline: feedback-corrected size profiles are scored
//! against a shopper's measurements, the closest profile is converted into a
//! 0-100 confidence, and anything under the confidence floor collapses to
//! "no recommendation". No I/O, no state between calls.

mod adjuster;
mod engine;
mod matcher;
mod types;

pub use adjuster::apply_adjustments;
pub use engine::{RecommendationEngine, ScoringPolicy};
pub use matcher::match_profile;
pub use types::{MatchScore, ReasonTier, Recommendation};

/// Decay constant for the distance-to-confidence curve, in centimeters.
/// `confidence = 100 * e^(-distance / DECAY)`: distance 0 maps to 100, a
/// ~5.5cm RMS deviation maps to ~50. The single tunable of the curve.
pub const CONFIDENCE_DECAY_CM: f64 = 8.0;

/// Confidence below this is treated as no recommendation at all; a wrong size
/// shown with false authority is worse than no suggestion.
pub const CONFIDENCE_FLOOR: u8 = 60;

/// Confidence at or above this reads as "excellent match".
pub const EXCELLENT_CONFIDENCE: u8 = 90;

/// Confidence at or above this (but under excellent) reads as "good match".
pub const GOOD_CONFIDENCE: u8 = 75;

/// Default scoring policy
pub const DEFAULT_POLICY: ScoringPolicy = ScoringPolicy {
    decay_cm: CONFIDENCE_DECAY_CM,
    confidence_floor: CONFIDENCE_FLOOR,
    excellent_confidence: EXCELLENT_CONFIDENCE,
    good_confidence: GOOD_CONFIDENCE,
};
