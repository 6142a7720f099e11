//! Boundary range checks for shopper-supplied measurements
//!
//! The scoring path assumes pre-validated input; callers run measurements
//! through here before handing them to the engine. Out-of-range values are
//! rejected, never clamped.

use crate::domain::measurement::{Measurements, Metric};
use crate::errors::DomainError;

/// Plausible physiological range for a metric, in centimeters.
pub fn plausible_range_cm(metric: Metric) -> (f64, f64) {
    match metric {
        Metric::Chest | Metric::Bust => (70.0, 150.0),
        Metric::Waist => (50.0, 150.0),
        Metric::Hip => (70.0, 160.0),
        Metric::Shoulder => (30.0, 70.0),
        Metric::Length => (30.0, 120.0),
        Metric::Inseam => (50.0, 100.0),
        Metric::Rise => (15.0, 50.0),
        Metric::Sleeve => (40.0, 100.0),
        Metric::Thigh => (30.0, 100.0),
    }
}

/// Validate every present value against its metric's plausible range.
///
/// Fails on the first offending metric in canonical order. An empty set is
/// valid here; the engine separately treats it as "no recommendation".
pub fn validate_measurements(measurements: &Measurements) -> Result<(), DomainError> {
    for (metric, value_cm) in measurements.iter() {
        if !value_cm.is_finite() {
            return Err(DomainError::NonFiniteMeasurement { metric });
        }
        if value_cm <= 0.0 {
            return Err(DomainError::NonPositiveMeasurement { metric, value_cm });
        }
        let (min_cm, max_cm) = plausible_range_cm(metric);
        if value_cm < min_cm || value_cm > max_cm {
            return Err(DomainError::MeasurementOutOfRange { metric, value_cm, min_cm, max_cm });
        }
    }
    Ok(())
}
