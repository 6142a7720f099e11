use thiserror::Error;

use crate::domain::measurement::Metric;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("{metric:?} measurement is not a finite number")]
    NonFiniteMeasurement { metric: Metric },
    #[error("{metric:?} measurement must be positive, got {value_cm}cm")]
    NonPositiveMeasurement { metric: Metric, value_cm: f64 },
    #[error("{metric:?} measurement {value_cm}cm outside plausible range {min_cm}-{max_cm}cm")]
    MeasurementOutOfRange { metric: Metric, value_cm: f64, min_cm: f64, max_cm: f64 },
}
