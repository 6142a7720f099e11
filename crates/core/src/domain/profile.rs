//! Size profiles and aggregated fit feedback

use serde::{Deserialize, Serialize};

use super::measurement::{Measurements, Metric};

/// Deviation in centimeters treated as free when no explicit tolerance is set.
pub const DEFAULT_TOLERANCE_CM: f64 = 3.0;

/// Default stretch allowance: rigid fabric, no give.
pub const DEFAULT_STRETCH_ALLOWANCE_CM: f64 = 0.0;

/// Opaque identifier for a size profile, assigned by the catalog store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeProfileId(pub String);

/// One size (e.g. "M", "UK 10") of one garment category: the garment's own
/// reference measurements plus its fit rules.
///
/// Profiles are authored externally and are read-only inputs here; the engine
/// only ever produces corrected copies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SizeProfile {
    pub id: SizeProfileId,
    /// Shopper-facing size label.
    pub display_name: String,
    /// What the garment measures, not what a body measures.
    pub measurements: Measurements,
    /// Deviation within this margin costs nothing.
    #[serde(default = "default_tolerance_cm")]
    pub tolerance_cm: f64,
    /// Extra centimeters a shopper may exceed the stated measurement without
    /// penalty. Models fabric stretch, so it only forgives the
    /// shopper-larger-than-garment direction.
    #[serde(default)]
    pub stretch_allowance_cm: f64,
}

fn default_tolerance_cm() -> f64 {
    DEFAULT_TOLERANCE_CM
}

impl SizeProfile {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        measurements: Measurements,
    ) -> Self {
        Self {
            id: SizeProfileId(id.into()),
            display_name: display_name.into(),
            measurements,
            tolerance_cm: DEFAULT_TOLERANCE_CM,
            stretch_allowance_cm: DEFAULT_STRETCH_ALLOWANCE_CM,
        }
    }

    pub fn with_tolerance_cm(mut self, tolerance_cm: f64) -> Self {
        self.tolerance_cm = tolerance_cm;
        self
    }

    pub fn with_stretch_allowance_cm(mut self, stretch_allowance_cm: f64) -> Self {
        self.stretch_allowance_cm = stretch_allowance_cm;
        self
    }
}

/// Aggregated fit feedback for one metric of one size profile.
///
/// Produced externally from many purchases' fit reports. A positive
/// `adjustment_cm` means the garment runs larger than its stated measurement,
/// negative means smaller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitFeedbackSummary {
    pub metric: Metric,
    pub adjustment_cm: f64,
}
