//! Domain layer: Core business types and logic.
//!
//! Pure types with no I/O: the feature catalogue, input vectors,
//! reference bounds and diagnosis results.

mod diagnosis;
pub mod features;
mod measurements;
mod reference;

pub use diagnosis::{format_probability, Diagnosis, Prediction};
pub use features::{FeatureGroup, FeatureKey, Measure, FEATURE_COUNT, FEATURE_NAMES, MEASURE_COUNT};
pub use measurements::{Measurements, ScaledMeasurements};
pub use reference::{BoundsAccumulator, FeatureBounds, ReferenceDataset};
