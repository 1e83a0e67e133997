//! Reference dataset summary: per-feature bounds derived from historical samples.

use serde::{Deserialize, Serialize};

use super::features::{FeatureKey, FEATURE_COUNT};

/// Observed range and mean of one feature column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureBounds {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl FeatureBounds {
    /// Width of the observed range.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Whether the column is constant (or the range is unusable).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let range = self.range();
        !range.is_finite() || range.abs() < f64::EPSILON
    }
}

/// Immutable per-feature bounds of the reference dataset.
///
/// Loaded once at startup and shared read-only between the slider panel,
/// the normalizer and the header summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDataset {
    bounds: [FeatureBounds; FEATURE_COUNT],
    samples: usize,
    benign: usize,
    malignant: usize,
}

impl ReferenceDataset {
    #[must_use]
    pub fn new(
        bounds: [FeatureBounds; FEATURE_COUNT],
        samples: usize,
        benign: usize,
        malignant: usize,
    ) -> Self {
        Self {
            bounds,
            samples,
            benign,
            malignant,
        }
    }

    #[must_use]
    pub fn bounds(&self, key: FeatureKey) -> FeatureBounds {
        self.bounds[key.index()]
    }

    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    #[must_use]
    pub fn benign(&self) -> usize {
        self.benign
    }

    #[must_use]
    pub fn malignant(&self) -> usize {
        self.malignant
    }
}

/// Accumulates column bounds one row at a time.
#[derive(Debug, Clone)]
pub struct BoundsAccumulator {
    min: [f64; FEATURE_COUNT],
    max: [f64; FEATURE_COUNT],
    mean: [f64; FEATURE_COUNT],
    rows: usize,
    benign: usize,
    malignant: usize,
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        Self {
            min: [f64::INFINITY; FEATURE_COUNT],
            max: [f64::NEG_INFINITY; FEATURE_COUNT],
            mean: [0.0; FEATURE_COUNT],
            rows: 0,
            benign: 0,
            malignant: 0,
        }
    }
}

impl BoundsAccumulator {
    /// Fold one sample in. `malignant` is the row's diagnosis label.
    pub fn push(&mut self, row: &[f64; FEATURE_COUNT], malignant: bool) {
        self.rows += 1;
        let n = self.rows as f64;
        for (i, &v) in row.iter().enumerate() {
            self.min[i] = self.min[i].min(v);
            self.max[i] = self.max[i].max(v);
            // running mean keeps precision on large columns like area
            self.mean[i] += (v - self.mean[i]) / n;
        }
        if malignant {
            self.malignant += 1;
        } else {
            self.benign += 1;
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Finish accumulation. Returns `None` if no rows were pushed.
    #[must_use]
    pub fn finish(self) -> Option<ReferenceDataset> {
        if self.rows == 0 {
            return None;
        }
        let bounds = std::array::from_fn(|i| FeatureBounds {
            min: self.min[i],
            max: self.max[i],
            mean: self.mean[i],
        });
        Some(ReferenceDataset::new(
            bounds,
            self.rows,
            self.benign,
            self.malignant,
        ))
    }
}
