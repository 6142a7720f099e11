//! Recommendation engine implementation

use std::collections::HashMap;

use tracing::debug;

use crate::domain::measurement::Measurements;
use crate::domain::profile::{FitFeedbackSummary, SizeProfile, SizeProfileId};

use super::adjuster::apply_adjustments;
use super::matcher::match_profile;
use super::types::{MatchScore, ReasonTier, Recommendation};

/// Scoring policy: how distances become confidences and where the cutoffs
/// sit. Injected at engine construction so the policy stays tunable and
/// testable independently of the matching mechanics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringPolicy {
    /// Decay constant of `confidence = 100 * e^(-distance / decay_cm)`.
    /// Must be positive. Default: 8.0.
    pub decay_cm: f64,
    /// Confidence below this yields no recommendation. Default: 60.
    pub confidence_floor: u8,
    /// Confidence at or above this reads as "excellent match". Default: 90.
    pub excellent_confidence: u8,
    /// Confidence at or above this reads as "good match". Default: 75.
    pub good_confidence: u8,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        super::DEFAULT_POLICY
    }
}

/// The size recommendation engine.
///
/// Pure and stateless: every call depends only on its arguments, so
/// concurrent calls for unrelated shoppers need no coordination.
#[derive(Clone, Debug, Default)]
pub struct RecommendationEngine {
    policy: ScoringPolicy,
}

impl RecommendationEngine {
    /// Create an engine with the default scoring policy.
    pub fn new() -> Self {
        Self { policy: ScoringPolicy::default() }
    }

    /// Create with a custom scoring policy.
    pub fn with_policy(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    /// Recommend the best-fitting size among `profiles`, or `None` when no
    /// profile clears the confidence floor.
    ///
    /// Profiles are evaluated in the order given; on exactly equal distance
    /// the first-encountered profile wins. This tie-break is a stable part of
    /// the contract, so callers control tie priority through list order.
    pub fn recommend(
        &self,
        shopper: &Measurements,
        profiles: &[SizeProfile],
    ) -> Option<Recommendation> {
        if profiles.is_empty() || shopper.is_empty() {
            return None;
        }

        let mut best: Option<(&SizeProfile, MatchScore)> = None;
        for profile in profiles {
            let score = match_profile(shopper, profile);
            debug!(
                profile = %profile.id.0,
                size = %profile.display_name,
                distance = score.distance,
                matched = score.matched_count,
                "scored size profile"
            );

            let improves = match &best {
                None => true,
                Some((_, current)) => score.distance < current.distance,
            };
            if improves {
                best = Some((profile, score));
            }
        }

        let (winner, score) = best?;
        if !score.distance.is_finite() {
            // No profile shared a single metric with the shopper.
            debug!("no size profile comparable to shopper measurements");
            return None;
        }

        let confidence = self.confidence(score.distance);
        if confidence < self.policy.confidence_floor {
            debug!(
                profile = %winner.id.0,
                confidence,
                floor = self.policy.confidence_floor,
                "best candidate below confidence floor"
            );
            return None;
        }

        Some(Recommendation {
            recommended_size: winner.display_name.clone(),
            size_profile_id: winner.id.clone(),
            confidence,
            reason: self.reason_tier(confidence),
        })
    }

    /// Production entry point: correct each profile with its own feedback
    /// summaries (looked up by profile id) before recommending, so confidence
    /// is always computed against bias-corrected measurements.
    pub fn recommend_with_feedback(
        &self,
        shopper: &Measurements,
        profiles: &[SizeProfile],
        feedback_by_profile: &HashMap<SizeProfileId, Vec<FitFeedbackSummary>>,
    ) -> Option<Recommendation> {
        let corrected: Vec<SizeProfile> = profiles
            .iter()
            .map(|profile| {
                let summaries =
                    feedback_by_profile.get(&profile.id).map(Vec::as_slice).unwrap_or(&[]);
                apply_adjustments(profile, summaries)
            })
            .collect();

        self.recommend(shopper, &corrected)
    }

    /// Exponential decay of distance into a 0-100 confidence, rounded.
    fn confidence(&self, distance: f64) -> u8 {
        let raw = 100.0 * (-distance / self.policy.decay_cm).exp();
        raw.clamp(0.0, 100.0).round() as u8
    }

    fn reason_tier(&self, confidence: u8) -> ReasonTier {
        if confidence >= self.policy.excellent_confidence {
            ReasonTier::Excellent
        } else if confidence >= self.policy.good_confidence {
            ReasonTier::Good
        } else {
            ReasonTier::Suggested
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::measurement::Metric;

    use super::*;

    fn shopper() -> Measurements {
        Measurements::new()
            .with(Metric::Chest, 98.0)
            .with(Metric::Waist, 84.0)
            .with(Metric::Shoulder, 46.0)
    }

    fn profile(id: &str, name: &str, chest: f64, waist: f64, shoulder: f64) -> SizeProfile {
        SizeProfile::new(
            id,
            name,
            Measurements::new()
                .with(Metric::Chest, chest)
                .with(Metric::Waist, waist)
                .with(Metric::Shoulder, shoulder),
        )
    }

    fn small_medium_large() -> Vec<SizeProfile> {
        vec![
            profile("sp_s", "S", 92.0, 78.0, 44.0),
            profile("sp_m", "M", 97.0, 83.0, 46.0),
            profile("sp_l", "L", 104.0, 90.0, 48.0),
        ]
    }

    #[test]
    fn picks_medium_with_full_confidence() {
        let engine = RecommendationEngine::new();

        let result = engine.recommend(&shopper(), &small_medium_large()).unwrap();

        // M deviates by (1, 1, 0), all inside the 3cm tolerance.
        assert_eq!(result.recommended_size, "M");
        assert_eq!(result.size_profile_id, SizeProfileId("sp_m".to_owned()));
        assert_eq!(result.confidence, 100);
        assert_eq!(result.reason, ReasonTier::Excellent);
    }

    #[test]
    fn empty_profiles_or_measurements_yield_none() {
        let engine = RecommendationEngine::new();

        assert_eq!(engine.recommend(&shopper(), &[]), None);
        assert_eq!(engine.recommend(&Measurements::new(), &small_medium_large()), None);
    }

    #[test]
    fn confidence_floor_is_exact() {
        let engine = RecommendationEngine::new();
        let garment = |chest: f64| {
            vec![SizeProfile::new("sp_x", "M", Measurements::new().with(Metric::Chest, chest))
                .with_tolerance_cm(0.0)]
        };
        let shopper = Measurements::new().with(Metric::Chest, 100.0);

        // Distance 4.222 -> round(100 * e^(-0.52775)) = 59: below the floor.
        assert_eq!(engine.recommend(&shopper, &garment(95.778)), None);

        // Distance 4.08 -> round(100 * e^(-0.51)) = 60: on the floor.
        let result = engine.recommend(&shopper, &garment(95.92)).unwrap();
        assert_eq!(result.confidence, 60);
        assert_eq!(result.reason, ReasonTier::Suggested);
    }

    #[test]
    fn reason_tier_thresholds_are_exact() {
        let engine = RecommendationEngine::new();

        assert_eq!(engine.reason_tier(100), ReasonTier::Excellent);
        assert_eq!(engine.reason_tier(90), ReasonTier::Excellent);
        assert_eq!(engine.reason_tier(89), ReasonTier::Good);
        assert_eq!(engine.reason_tier(75), ReasonTier::Good);
        assert_eq!(engine.reason_tier(74), ReasonTier::Suggested);
        assert_eq!(engine.reason_tier(60), ReasonTier::Suggested);
    }

    #[test]
    fn first_profile_wins_exact_ties() {
        let engine = RecommendationEngine::new();
        let shopper = Measurements::new().with(Metric::Chest, 100.0);
        // Equidistant above and below, zero tolerance: both score distance 2.
        let profiles = vec![
            SizeProfile::new("sp_a", "A", Measurements::new().with(Metric::Chest, 98.0))
                .with_tolerance_cm(0.0),
            SizeProfile::new("sp_b", "B", Measurements::new().with(Metric::Chest, 102.0))
                .with_tolerance_cm(0.0),
        ];

        let result = engine.recommend(&shopper, &profiles).unwrap();

        assert_eq!(result.recommended_size, "A");
    }

    #[test]
    fn incomparable_profile_never_beats_a_finite_one() {
        let engine = RecommendationEngine::new();
        let shopper = Measurements::new().with(Metric::Chest, 98.0);
        let profiles = vec![
            SizeProfile::new("sp_inseam", "30R", Measurements::new().with(Metric::Inseam, 76.0)),
            profile("sp_m", "M", 97.0, 83.0, 46.0),
        ];

        let result = engine.recommend(&shopper, &profiles).unwrap();

        assert_eq!(result.recommended_size, "M");
    }

    #[test]
    fn all_incomparable_profiles_yield_none() {
        let engine = RecommendationEngine::new();
        let shopper = Measurements::new().with(Metric::Chest, 98.0);
        let profiles =
            vec![SizeProfile::new("sp_inseam", "30R", Measurements::new().with(Metric::Inseam, 76.0))];

        assert_eq!(engine.recommend(&shopper, &profiles), None);
    }

    #[test]
    fn feedback_corrections_change_the_winner() {
        let engine = RecommendationEngine::new();
        let shopper = Measurements::new().with(Metric::Chest, 100.0);
        let profiles = vec![
            SizeProfile::new("sp_m", "M", Measurements::new().with(Metric::Chest, 94.0))
                .with_tolerance_cm(0.0),
            SizeProfile::new("sp_l", "L", Measurements::new().with(Metric::Chest, 104.0))
                .with_tolerance_cm(0.0),
        ];

        // Without feedback L is closer (4cm vs 6cm).
        let raw = engine.recommend(&shopper, &profiles).unwrap();
        assert_eq!(raw.recommended_size, "L");

        // Crowd feedback says M actually runs 5cm larger than stated.
        let feedback: HashMap<SizeProfileId, Vec<FitFeedbackSummary>> = HashMap::from([(
            SizeProfileId("sp_m".to_owned()),
            vec![FitFeedbackSummary { metric: Metric::Chest, adjustment_cm: 5.0 }],
        )]);

        let corrected = engine.recommend_with_feedback(&shopper, &profiles, &feedback).unwrap();
        assert_eq!(corrected.recommended_size, "M");

        // Inputs are untouched.
        assert_eq!(profiles[0].measurements.get(Metric::Chest), Some(94.0));
    }

    #[test]
    fn custom_policy_moves_the_floor() {
        let lenient = RecommendationEngine::with_policy(ScoringPolicy {
            confidence_floor: 30,
            ..ScoringPolicy::default()
        });
        let strict = RecommendationEngine::with_policy(ScoringPolicy {
            confidence_floor: 95,
            ..ScoringPolicy::default()
        });
        let shopper = Measurements::new().with(Metric::Chest, 100.0);
        let profiles = vec![SizeProfile::new(
            "sp_m",
            "M",
            Measurements::new().with(Metric::Chest, 93.0),
        )
        .with_tolerance_cm(0.0)];

        // Distance 7 -> confidence round(100 * e^(-7/8)) = 42.
        assert!(lenient.recommend(&shopper, &profiles).is_some());
        assert_eq!(strict.recommend(&shopper, &profiles), None);
    }
}
