//! Body/garment measurement vocabulary and sparse measurement sets

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fixed vocabulary of supported measurement metrics, all in centimeters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Chest,
    Bust,
    Waist,
    Hip,
    Shoulder,
    Length,
    Inseam,
    Rise,
    Sleeve,
    Thigh,
}

impl Metric {
    /// All known metrics, in canonical order.
    pub const ALL: [Metric; 10] = [
        Metric::Chest,
        Metric::Bust,
        Metric::Waist,
        Metric::Hip,
        Metric::Shoulder,
        Metric::Length,
        Metric::Inseam,
        Metric::Rise,
        Metric::Sleeve,
        Metric::Thigh,
    ];

    /// Snake-case wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Chest => "chest",
            Metric::Bust => "bust",
            Metric::Waist => "waist",
            Metric::Hip => "hip",
            Metric::Shoulder => "shoulder",
            Metric::Length => "length",
            Metric::Inseam => "inseam",
            Metric::Rise => "rise",
            Metric::Sleeve => "sleeve",
            Metric::Thigh => "thigh",
        }
    }
}

/// A sparse set of measurements: metric name to centimeters.
///
/// Sets may be partial (shoppers fill their profile progressively; garments
/// only list the metrics that apply to the garment type). An absent metric is
/// distinct from a zero value. Backed by a `BTreeMap` so iteration order is
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Measurements(BTreeMap<Metric, f64>);

impl Measurements {
    /// Create an empty measurement set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, metric: Metric, cm: f64) -> Self {
        self.0.insert(metric, cm);
        self
    }

    /// Set or replace a metric's value.
    pub fn set(&mut self, metric: Metric, cm: f64) {
        self.0.insert(metric, cm);
    }

    /// Value in centimeters, if the metric is present.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.0.get(&metric).copied()
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.0.contains_key(&metric)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate present metrics and values in canonical metric order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.0.iter().map(|(metric, cm)| (*metric, *cm))
    }
}

impl FromIterator<(Metric, f64)> for Measurements {
    fn from_iter<I: IntoIterator<Item = (Metric, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
