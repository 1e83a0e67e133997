//! Min-max normalization of raw measurements against the reference bounds.
//!
//! Used for visualization only; the classifier receives the raw values.

use crate::domain::{FeatureBounds, Measurements, ReferenceDataset, ScaledMeasurements};

/// Value returned for a feature whose reference range is zero-width.
pub const DEGENERATE_FALLBACK: f64 = 0.0;

/// Scale `value` to `(value - min) / (max - min)`.
///
/// The result is not clamped: values below `min` map below 0 and values
/// above `max` map above 1. Constant columns map to [`DEGENERATE_FALLBACK`].
#[must_use]
pub fn normalize(value: f64, bounds: FeatureBounds) -> f64 {
    if bounds.is_degenerate() {
        return DEGENERATE_FALLBACK;
    }
    (value - bounds.min) / bounds.range()
}

/// Normalize every feature of `input` against `reference`.
#[must_use]
pub fn scale_measurements(input: &Measurements, reference: &ReferenceDataset) -> ScaledMeasurements {
    let mut values = [0.0; crate::domain::FEATURE_COUNT];
    for (key, value) in input.iter() {
        values[key.index()] = normalize(value, reference.bounds(key));
    }
    ScaledMeasurements::from_array(values)
}
