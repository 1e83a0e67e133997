//! The 30 cell-nuclei features and their fixed ordering.
//!
//! Every feature is one of ten measures taken in one of three groups
//! (mean, standard error, worst). The canonical order below is the column
//! order the classifier artifacts are exported with.

use serde::{Deserialize, Serialize};

/// Number of features in an input vector.
pub const FEATURE_COUNT: usize = 30;

/// Number of measures per group (and radar axes).
pub const MEASURE_COUNT: usize = 10;

/// Statistic group a feature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureGroup {
    Mean,
    StandardError,
    Worst,
}

impl FeatureGroup {
    pub const ALL: [FeatureGroup; 3] = [Self::Mean, Self::StandardError, Self::Worst];

    /// Column name suffix used by the reference dataset.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::StandardError => "se",
            Self::Worst => "worst",
        }
    }

    /// Legend label for the radar series of this group.
    #[must_use]
    pub fn series_name(&self) -> &'static str {
        match self {
            Self::Mean => "Mean Value",
            Self::StandardError => "Standard Error",
            Self::Worst => "Worst Value",
        }
    }

    fn offset(&self) -> usize {
        match self {
            Self::Mean => 0,
            Self::StandardError => MEASURE_COUNT,
            Self::Worst => 2 * MEASURE_COUNT,
        }
    }
}

/// Physical measure of a cell nucleus. Doubles as the radar axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    Radius,
    Texture,
    Perimeter,
    Area,
    Smoothness,
    Compactness,
    Concavity,
    ConcavePoints,
    Symmetry,
    FractalDimension,
}

impl Measure {
    pub const ALL: [Measure; MEASURE_COUNT] = [
        Self::Radius,
        Self::Texture,
        Self::Perimeter,
        Self::Area,
        Self::Smoothness,
        Self::Compactness,
        Self::Concavity,
        Self::ConcavePoints,
        Self::Symmetry,
        Self::FractalDimension,
    ];

    /// Radar category label.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Radius => "Radius",
            Self::Texture => "Texture",
            Self::Perimeter => "Perimeter",
            Self::Area => "Area",
            Self::Smoothness => "Smoothness",
            Self::Compactness => "Compactness",
            Self::Concavity => "Concavity",
            Self::ConcavePoints => "Concave Points",
            Self::Symmetry => "Symmetry",
            Self::FractalDimension => "Fractal Dimension",
        }
    }

    fn column_stem(&self) -> &'static str {
        match self {
            Self::Radius => "radius",
            Self::Texture => "texture",
            Self::Perimeter => "perimeter",
            Self::Area => "area",
            Self::Smoothness => "smoothness",
            Self::Compactness => "compactness",
            Self::Concavity => "concavity",
            Self::ConcavePoints => "concave points",
            Self::Symmetry => "symmetry",
            Self::FractalDimension => "fractal_dimension",
        }
    }

    fn label_stem(&self) -> &'static str {
        match self {
            Self::ConcavePoints => "Concave points",
            Self::FractalDimension => "Fractal dimension",
            other => other.category(),
        }
    }

    fn index(&self) -> usize {
        // ALL is declared in discriminant order
        *self as usize
    }
}

/// One of the 30 input features, identified by its canonical index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureKey(usize);

/// Column names in canonical order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "radius_mean",
    "texture_mean",
    "perimeter_mean",
    "area_mean",
    "smoothness_mean",
    "compactness_mean",
    "concavity_mean",
    "concave points_mean",
    "symmetry_mean",
    "fractal_dimension_mean",
    "radius_se",
    "texture_se",
    "perimeter_se",
    "area_se",
    "smoothness_se",
    "compactness_se",
    "concavity_se",
    "concave points_se",
    "symmetry_se",
    "fractal_dimension_se",
    "radius_worst",
    "texture_worst",
    "perimeter_worst",
    "area_worst",
    "smoothness_worst",
    "compactness_worst",
    "concavity_worst",
    "concave points_worst",
    "symmetry_worst",
    "fractal_dimension_worst",
];

impl FeatureKey {
    /// Build the key for a measure within a group.
    #[must_use]
    pub fn new(group: FeatureGroup, measure: Measure) -> Self {
        Self(group.offset() + measure.index())
    }

    /// Key at a canonical index, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < FEATURE_COUNT).then_some(Self(index))
    }

    /// Look up a key by its dataset column name.
    #[must_use]
    pub fn from_column(name: &str) -> Option<Self> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name.trim())
            .map(Self)
    }

    /// Iterate all keys in canonical order.
    pub fn all() -> impl Iterator<Item = FeatureKey> {
        (0..FEATURE_COUNT).map(Self)
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }

    #[must_use]
    pub fn group(&self) -> FeatureGroup {
        FeatureGroup::ALL[self.0 / MEASURE_COUNT]
    }

    #[must_use]
    pub fn measure(&self) -> Measure {
        Measure::ALL[self.0 % MEASURE_COUNT]
    }

    /// Dataset column name, e.g. `concave points_worst`.
    #[must_use]
    pub fn column(&self) -> &'static str {
        FEATURE_NAMES[self.0]
    }

    /// Human-readable slider label, e.g. `Concave points (worst)`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.measure().label_stem(), self.group().suffix())
    }
}

impl std::fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names_follow_group_and_measure() {
        for key in FeatureKey::all() {
            let expected = format!("{}_{}", key.measure().column_stem(), key.group().suffix());
            assert_eq!(key.column(), expected);
        }
    }

    #[test]
    fn test_key_roundtrip_by_group_and_measure() {
        let key = FeatureKey::new(FeatureGroup::Worst, Measure::ConcavePoints);
        assert_eq!(key.column(), "concave points_worst");
        assert_eq!(key.group(), FeatureGroup::Worst);
        assert_eq!(key.measure(), Measure::ConcavePoints);
        assert_eq!(FeatureKey::from_column("concave points_worst"), Some(key));
    }

    #[test]
    fn test_labels() {
        let key = FeatureKey::new(FeatureGroup::StandardError, Measure::FractalDimension);
        assert_eq!(key.label(), "Fractal dimension (se)");
        let key = FeatureKey::new(FeatureGroup::Mean, Measure::Radius);
        assert_eq!(key.label(), "Radius (mean)");
    }

    #[test]
    fn test_unknown_column() {
        assert!(FeatureKey::from_column("diagnosis").is_none());
        assert!(FeatureKey::from_index(FEATURE_COUNT).is_none());
    }
}
