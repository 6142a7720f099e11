//! Distance scoring between a shopper and one size profile

use std::collections::BTreeMap;

use crate::domain::measurement::Measurements;
use crate::domain::profile::SizeProfile;

use super::types::MatchScore;

/// Score a shopper's measurements against one size profile.
///
/// Only metrics present in both sets participate. Per metric, the raw
/// absolute deviation is reduced by the stretch allowance (only when the
/// shopper exceeds the garment) and then by the profile's tolerance, each
/// floored at zero; the result is the effective deviation. The distance is
/// the root-mean-square of effective deviations, normalized by the matched
/// metric count so profiles compared on fewer shared metrics are not skewed
/// purely by metric count.
pub fn match_profile(shopper: &Measurements, profile: &SizeProfile) -> MatchScore {
    let mut per_metric_deviation = BTreeMap::new();
    let mut sum_of_squares = 0.0;
    let mut matched_count = 0usize;

    for (metric, shopper_cm) in shopper.iter() {
        let Some(profile_cm) = profile.measurements.get(metric) else {
            continue;
        };

        let mut deviation = (shopper_cm - profile_cm).abs();

        // Stretch only forgives shoppers larger than the garment's stated
        // size, never the reverse direction.
        if shopper_cm > profile_cm && profile.stretch_allowance_cm > 0.0 {
            deviation = (deviation - profile.stretch_allowance_cm).max(0.0);
        }

        let effective = (deviation - profile.tolerance_cm).max(0.0);

        per_metric_deviation.insert(metric, effective);
        sum_of_squares += effective * effective;
        matched_count += 1;
    }

    if matched_count == 0 {
        return MatchScore::incomparable();
    }

    MatchScore {
        distance: (sum_of_squares / matched_count as f64).sqrt(),
        matched_count,
        per_metric_deviation,
    }
}
