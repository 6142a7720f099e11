pub mod measurement;
pub mod profile;

pub use measurement::{Measurements, Metric};
pub use profile::{FitFeedbackSummary, SizeProfile, SizeProfileId};
