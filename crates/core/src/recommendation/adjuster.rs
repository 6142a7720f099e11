//! Learned bias correction for size profiles

use crate::domain::profile::{FitFeedbackSummary, SizeProfile};

/// Apply aggregated fit-feedback corrections to a profile's stated
/// measurements, returning a corrected copy. The input profile is never
/// mutated.
///
/// A summary moves the profile's value for its metric by `adjustment_cm`
/// (positive: the garment runs larger than stated). Summaries with a zero
/// adjustment, or for metrics the profile does not carry, are no-ops. With no
/// summaries the result is value-equal to the input.
pub fn apply_adjustments(profile: &SizeProfile, summaries: &[FitFeedbackSummary]) -> SizeProfile {
    let mut corrected = profile.clone();

    for summary in summaries {
        if summary.adjustment_cm == 0.0 {
            continue;
        }
        if let Some(stated_cm) = corrected.measurements.get(summary.metric) {
            corrected.measurements.set(summary.metric, stated_cm + summary.adjustment_cm);
        }
    }

    corrected
}
