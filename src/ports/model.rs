//! Model ports: capability traits for the pre-fitted scaler and classifier.
//!
//! These traits abstract whatever ML backend produced the artifacts from
//! the application logic. The application only relies on the call contract
//! `transform` / `predict` / `predict_proba`.

use crate::domain::FEATURE_NAMES;

/// Errors raised by model artifacts and their adapters.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model unavailable: {0}")]
    Unavailable(String),

    #[error("Model artifact corrupt: {0}")]
    Corrupt(String),

    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Classifier returned invalid output: {0}")]
    InvalidOutput(String),
}

/// Trait for a pre-fitted feature scaler.
pub trait FeatureScaler: Send + Sync {
    /// Feature names the scaler was fitted on, in order.
    fn feature_names(&self) -> &[String];

    /// Transform a raw feature vector into the classifier's input space.
    ///
    /// # Errors
    /// Returns `ModelError::SchemaMismatch` if the vector length differs
    /// from the fitted feature count.
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError>;
}

/// Trait for a pre-fitted binary classifier.
pub trait Classifier: Send + Sync {
    /// Feature names the classifier was trained on, in order.
    fn feature_names(&self) -> &[String];

    /// Predict the class label (0 = benign, 1 = malignant).
    ///
    /// # Errors
    /// Returns `ModelError::SchemaMismatch` on a feature count mismatch.
    fn predict(&self, features: &[f64]) -> Result<u8, ModelError>;

    /// Per-class probabilities `[p0, p1]`.
    ///
    /// # Errors
    /// Returns `ModelError::SchemaMismatch` on a feature count mismatch.
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], ModelError>;
}

/// Check artifact feature names against the canonical feature order.
///
/// # Errors
/// Returns `ModelError::SchemaMismatch` describing the first difference.
pub fn ensure_canonical_features(artifact: &str, names: &[String]) -> Result<(), ModelError> {
    if names.len() != FEATURE_NAMES.len() {
        return Err(ModelError::SchemaMismatch(format!(
            "{artifact} expects {} features, dashboard provides {}",
            names.len(),
            FEATURE_NAMES.len()
        )));
    }
    if let Some((i, (got, want))) = names
        .iter()
        .zip(FEATURE_NAMES.iter())
        .enumerate()
        .find(|(_, (got, want))| got.as_str() != **want)
    {
        return Err(ModelError::SchemaMismatch(format!(
            "{artifact} feature #{i} is '{got}', expected '{want}'"
        )));
    }
    Ok(())
}
