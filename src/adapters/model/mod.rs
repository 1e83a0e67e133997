//! JSON model adapter: pre-fitted standard scaler and logistic regression.
//!
//! The training pipeline exports two artifacts into the model directory:
//!
//! - `scaler.json`: `{ feature_names, mean, scale }`
//! - `model.json`: `{ feature_names, coefficients, intercept, classes }`
//!
//! Both are loaded once at startup and never modified. An optional
//! `manifest.json` binds them by SHA-256 digest (see [`manifest`]).

pub mod manifest;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ports::{ensure_canonical_features, Classifier, FeatureScaler, ModelError};

pub use manifest::{ArtifactManifest, MANIFEST_FILE};

/// File name of the classifier artifact.
pub const MODEL_FILE: &str = "model.json";

/// File name of the scaler artifact.
pub const SCALER_FILE: &str = "scaler.json";

/// Standard scaler parameters: `z = (x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScalerModel {
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

fn default_classes() -> Vec<u8> {
    vec![0, 1]
}

/// Binary logistic regression parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_classes")]
    pub classes: Vec<u8>,
}

fn check_len(got: usize, expected: usize) -> Result<(), ModelError> {
    if got != expected {
        return Err(ModelError::SchemaMismatch(format!(
            "Feature count mismatch: got {got}, expected {expected}"
        )));
    }
    Ok(())
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

impl StandardScalerModel {
    fn validate(&self) -> Result<(), ModelError> {
        let n = self.feature_names.len();
        if n == 0 {
            return Err(ModelError::Corrupt("scaler has no features".into()));
        }
        if self.mean.len() != n || self.scale.len() != n {
            return Err(ModelError::Corrupt(
                "scaler parameter lengths do not match feature_names length".into(),
            ));
        }
        if !all_finite(&self.mean) || !all_finite(&self.scale) {
            return Err(ModelError::Corrupt("scaler contains non-finite values".into()));
        }
        Ok(())
    }
}

impl FeatureScaler for StandardScalerModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        check_len(features.len(), self.feature_names.len())?;
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| {
                // zero-variance columns are exported with scale 0; treat as unit scale
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / scale
            })
            .collect())
    }
}

/// Logistic function that does not overflow for large |z|.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl LogisticModel {
    fn validate(&self) -> Result<(), ModelError> {
        let n = self.feature_names.len();
        if n == 0 {
            return Err(ModelError::Corrupt("classifier has no features".into()));
        }
        if self.coefficients.len() != n {
            return Err(ModelError::Corrupt(
                "coefficient count does not match feature_names length".into(),
            ));
        }
        if !all_finite(&self.coefficients) || !self.intercept.is_finite() {
            return Err(ModelError::Corrupt("classifier contains non-finite values".into()));
        }
        if self.classes != [0, 1] {
            return Err(ModelError::Corrupt(format!(
                "expected binary classes [0, 1], got {:?}",
                self.classes
            )));
        }
        Ok(())
    }

    fn decision(&self, features: &[f64]) -> Result<f64, ModelError> {
        check_len(features.len(), self.coefficients.len())?;
        let dot: f64 = features
            .iter()
            .zip(&self.coefficients)
            .map(|(x, w)| x * w)
            .sum();
        Ok(dot + self.intercept)
    }
}

impl Classifier for LogisticModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, features: &[f64]) -> Result<u8, ModelError> {
        // decision > 0 <=> p1 > 0.5; ties go to class 0 like argmax
        Ok(u8::from(self.decision(features)? > 0.0))
    }

    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], ModelError> {
        let p1 = sigmoid(self.decision(features)?);
        Ok([1.0 - p1, p1])
    }
}

/// Loaded scaler + classifier pair.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub scaler: StandardScalerModel,
    pub classifier: LogisticModel,
}

/// Loads [`ModelArtifacts`] from a model directory.
#[derive(Debug, Clone)]
pub struct JsonModelLoader {
    dir: PathBuf,
    require_manifest: bool,
}

impl JsonModelLoader {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            require_manifest: false,
        }
    }

    /// Refuse to load artifacts that are not bound by `manifest.json`.
    #[must_use]
    pub fn require_manifest(mut self, require: bool) -> Self {
        self.require_manifest = require;
        self
    }

    /// Load, verify and validate both artifacts.
    ///
    /// # Errors
    /// - `Unavailable` if the directory or a file is missing
    /// - `Corrupt` on bad JSON, inconsistent parameters or a digest mismatch
    /// - `SchemaMismatch` if feature names differ from the canonical 30
    pub fn load(&self) -> Result<ModelArtifacts, ModelError> {
        if !self.dir.is_dir() {
            return Err(ModelError::Unavailable(format!(
                "Model directory not found at {:?}",
                self.dir
            )));
        }

        match ArtifactManifest::read(&self.dir)? {
            Some(manifest) => {
                manifest.verify(&self.dir, &[MODEL_FILE, SCALER_FILE])?;
                tracing::info!("Verified model artifacts against {}", MANIFEST_FILE);
            }
            None if self.require_manifest => {
                return Err(ModelError::Unavailable(format!(
                    "{MANIFEST_FILE} required but not found in {:?}",
                    self.dir
                )));
            }
            None => {
                tracing::warn!(
                    "No {} in {:?}; loading artifacts without integrity check",
                    MANIFEST_FILE,
                    self.dir
                );
            }
        }

        let scaler: StandardScalerModel = self.read_json(SCALER_FILE)?;
        scaler.validate()?;
        ensure_canonical_features(SCALER_FILE, &scaler.feature_names)?;

        let classifier: LogisticModel = self.read_json(MODEL_FILE)?;
        classifier.validate()?;
        ensure_canonical_features(MODEL_FILE, &classifier.feature_names)?;

        tracing::info!(
            "Loaded model artifacts from {:?} (n_features={})",
            self.dir,
            classifier.feature_names.len()
        );

        Ok(ModelArtifacts { scaler, classifier })
    }

    fn read_json<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<T, ModelError> {
        let path = self.dir.join(name);
        let content = fs::read_to_string(&path)
            .map_err(|e| ModelError::Unavailable(format!("Failed to read {path:?}: {e}")))?;
        serde_json::from_str(&content)
            .map_err(|e| ModelError::Corrupt(format!("Failed to parse {name}: {e}")))
    }
}
