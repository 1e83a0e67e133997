//! Input vectors: raw slider values and their normalized counterpart.

use serde::{Deserialize, Serialize};

use super::features::{FeatureGroup, FeatureKey, Measure, FEATURE_COUNT, MEASURE_COUNT};
use super::reference::ReferenceDataset;

/// Raw measurements, one value per feature in canonical order.
///
/// The fixed-size array makes a vector with missing or extra keys
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    values: [f64; FEATURE_COUNT],
}

impl Measurements {
    #[must_use]
    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Every feature at its reference-dataset mean (the slider defaults).
    #[must_use]
    pub fn defaults(reference: &ReferenceDataset) -> Self {
        Self::from_fn(|key| reference.bounds(key).mean)
    }

    /// Every feature at its reference-dataset minimum.
    #[must_use]
    pub fn minimums(reference: &ReferenceDataset) -> Self {
        Self::from_fn(|key| reference.bounds(key).min)
    }

    /// Every feature at its reference-dataset maximum.
    #[must_use]
    pub fn maximums(reference: &ReferenceDataset) -> Self {
        Self::from_fn(|key| reference.bounds(key).max)
    }

    pub fn from_fn(mut f: impl FnMut(FeatureKey) -> f64) -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        for key in FeatureKey::all() {
            values[key.index()] = f(key);
        }
        Self { values }
    }

    #[must_use]
    pub fn get(&self, key: FeatureKey) -> f64 {
        self.values[key.index()]
    }

    pub fn set(&mut self, key: FeatureKey, value: f64) {
        self.values[key.index()] = value;
    }

    /// Values in canonical order, as the classifier expects them.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, f64)> + '_ {
        FeatureKey::all().map(move |key| (key, self.values[key.index()]))
    }
}

/// Min-max normalized measurements. Same layout as [`Measurements`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledMeasurements {
    values: [f64; FEATURE_COUNT],
}

impl ScaledMeasurements {
    #[must_use]
    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    #[must_use]
    pub fn get(&self, key: FeatureKey) -> f64 {
        self.values[key.index()]
    }

    /// The ten scaled values of one group, in measure order.
    #[must_use]
    pub fn group(&self, group: FeatureGroup) -> [f64; MEASURE_COUNT] {
        Measure::ALL.map(|measure| self.get(FeatureKey::new(group, measure)))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
