//! Diagnosis result types.
//!
//! Represents the classifier output shown in the prediction panel.

use serde::{Deserialize, Serialize};

/// Predicted class of the cell cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnosis {
    /// Class 0
    Benign,
    /// Class 1
    Malignant,
}

impl Diagnosis {
    /// Map a classifier label to a diagnosis.
    #[must_use]
    pub fn from_label(label: u8) -> Option<Self> {
        match label {
            0 => Some(Self::Benign),
            1 => Some(Self::Malignant),
            _ => None,
        }
    }

    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Benign => (16, 185, 129),   // Emerald (#10B981)
            Self::Malignant => (244, 63, 94), // Rose (#F43F5E)
        }
    }
}

impl std::fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Benign => write!(f, "Benign"),
            Self::Malignant => write!(f, "Malignant"),
        }
    }
}

/// Classifier output for one input vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub diagnosis: Diagnosis,

    /// `[p_benign, p_malignant]`
    pub probabilities: [f64; 2],
}

impl Prediction {
    #[must_use]
    pub fn benign_probability(&self) -> f64 {
        self.probabilities[0]
    }

    #[must_use]
    pub fn malignant_probability(&self) -> f64 {
        self.probabilities[1]
    }
}

/// Fixed-precision probability rendering (10 decimal places).
#[must_use]
pub fn format_probability(p: f64) -> String {
    format!("{p:.10}")
}
