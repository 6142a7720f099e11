pub mod domain;
pub mod errors;
pub mod recommendation;
pub mod validation;

pub use domain::measurement::{Measurements, Metric};
pub use domain::profile::{FitFeedbackSummary, SizeProfile, SizeProfileId};
pub use errors::DomainError;
pub use recommendation::{
    apply_adjustments, match_profile, MatchScore, ReasonTier, Recommendation,
    RecommendationEngine, ScoringPolicy,
};
pub use validation::validate_measurements;
