//! Prediction service: runs the external scaler and classifier on raw input.
//!
//! The artifacts are opaque; this service only enforces the call contract:
//! the feature schema must match before the call, and the output must be a
//! valid probability pair whose argmax agrees with the predicted label.

use std::sync::Arc;

use crate::domain::{Diagnosis, Measurements, Prediction};
use crate::ports::{ensure_canonical_features, Classifier, FeatureScaler, ModelError};
use crate::CytoradarError;

/// Allowed deviation of `p0 + p1` from 1.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Below this gap between `p0` and `p1` either label is accepted.
const TIE_TOLERANCE: f64 = 1e-12;

/// Service for running the pre-fitted classifier.
pub struct PredictionService<S, C>
where
    S: FeatureScaler,
    C: Classifier,
{
    scaler: Arc<S>,
    classifier: Arc<C>,
}

impl<S, C> Clone for PredictionService<S, C>
where
    S: FeatureScaler,
    C: Classifier,
{
    fn clone(&self) -> Self {
        Self {
            scaler: Arc::clone(&self.scaler),
            classifier: Arc::clone(&self.classifier),
        }
    }
}

impl<S, C> PredictionService<S, C>
where
    S: FeatureScaler,
    C: Classifier,
{
    /// Create a new prediction service.
    pub fn new(scaler: Arc<S>, classifier: Arc<C>) -> Self {
        Self { scaler, classifier }
    }

    /// Predict the diagnosis for raw measurements.
    ///
    /// Pipeline:
    /// 1. Verify scaler and classifier feature schemas
    /// 2. Scale the raw vector
    /// 3. Predict label and class probabilities
    /// 4. Validate the output
    ///
    /// # Errors
    /// Returns `ModelError::SchemaMismatch` if the artifacts disagree with the
    /// input layout, `ModelError::InvalidOutput` if the classifier output is
    /// inconsistent, or whatever the artifacts themselves report.
    pub fn predict(&self, input: &Measurements) -> Result<Prediction, CytoradarError> {
        ensure_canonical_features("scaler", self.scaler.feature_names())?;
        ensure_canonical_features("classifier", self.classifier.feature_names())?;

        let scaled = self.scaler.transform(input.as_slice())?;
        let label = self.classifier.predict(&scaled)?;
        let probabilities = self.classifier.predict_proba(&scaled)?;

        let prediction = validate_output(label, probabilities)?;
        tracing::debug!(
            "Prediction: {} (p_benign={:.4}, p_malignant={:.4})",
            prediction.diagnosis,
            prediction.benign_probability(),
            prediction.malignant_probability()
        );
        Ok(prediction)
    }
}

fn validate_output(label: u8, probabilities: [f64; 2]) -> Result<Prediction, ModelError> {
    let diagnosis = Diagnosis::from_label(label)
        .ok_or_else(|| ModelError::InvalidOutput(format!("unknown class label {label}")))?;

    if probabilities
        .iter()
        .any(|p| !p.is_finite() || !(0.0..=1.0).contains(p))
    {
        return Err(ModelError::InvalidOutput(format!(
            "probabilities out of range: {probabilities:?}"
        )));
    }

    let sum = probabilities[0] + probabilities[1];
    if (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(ModelError::InvalidOutput(format!(
            "probabilities sum to {sum}, expected 1"
        )));
    }

    let [p0, p1] = probabilities;
    if (p1 - p0).abs() > TIE_TOLERANCE {
        let argmax = u8::from(p1 > p0);
        if argmax != label {
            return Err(ModelError::InvalidOutput(format!(
                "label {label} disagrees with probabilities {probabilities:?}"
            )));
        }
    }

    Ok(Prediction {
        diagnosis,
        probabilities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{LogisticModel, StandardScalerModel};
    use crate::domain::{FEATURE_COUNT, FEATURE_NAMES};

    fn names() -> Vec<String> {
        FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
    }

    fn service(intercept: f64) -> PredictionService<StandardScalerModel, LogisticModel> {
        let scaler = StandardScalerModel {
            feature_names: names(),
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        };
        let classifier = LogisticModel {
            feature_names: names(),
            coefficients: vec![1.0; FEATURE_COUNT],
            intercept,
            classes: vec![0, 1],
        };
        PredictionService::new(Arc::new(scaler), Arc::new(classifier))
    }

    /// Classifier returning fixed outputs regardless of input.
    struct Fixed {
        names: Vec<String>,
        label: u8,
        proba: [f64; 2],
    }

    impl Classifier for Fixed {
        fn feature_names(&self) -> &[String] {
            &self.names
        }
        fn predict(&self, _: &[f64]) -> Result<u8, ModelError> {
            Ok(self.label)
        }
        fn predict_proba(&self, _: &[f64]) -> Result<[f64; 2], ModelError> {
            Ok(self.proba)
        }
    }

    fn fixed(label: u8, proba: [f64; 2]) -> PredictionService<StandardScalerModel, Fixed> {
        let scaler = StandardScalerModel {
            feature_names: names(),
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        };
        PredictionService::new(
            Arc::new(scaler),
            Arc::new(Fixed {
                names: names(),
                label,
                proba,
            }),
        )
    }

    #[test]
    fn test_benign_and_malignant() {
        let input = Measurements::from_array([0.0; FEATURE_COUNT]);

        let p = service(-2.0).predict(&input).expect("Should predict");
        assert_eq!(p.diagnosis, Diagnosis::Benign);
        assert!(p.benign_probability() > p.malignant_probability());

        let p = service(2.0).predict(&input).expect("Should predict");
        assert_eq!(p.diagnosis, Diagnosis::Malignant);
        assert!((p.benign_probability() + p.malignant_probability() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let input = Measurements::from_array([0.1; FEATURE_COUNT]);
        let svc = service(-3.0);
        let a = svc.predict(&input).expect("first");
        let b = svc.predict(&input).expect("second");
        assert_eq!(a, b);
    }

    #[test]
    fn test_schema_mismatch_surfaces() {
        let scaler = StandardScalerModel {
            feature_names: names()[..9].to_vec(),
            mean: vec![0.0; 9],
            scale: vec![1.0; 9],
        };
        let classifier = LogisticModel {
            feature_names: names(),
            coefficients: vec![1.0; FEATURE_COUNT],
            intercept: 0.0,
            classes: vec![0, 1],
        };
        let svc = PredictionService::new(Arc::new(scaler), Arc::new(classifier));

        let err = svc
            .predict(&Measurements::from_array([0.0; FEATURE_COUNT]))
            .expect_err("Should fail");
        assert!(matches!(
            err,
            CytoradarError::Model(ModelError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_rejects_bad_probabilities() {
        let input = Measurements::from_array([0.0; FEATURE_COUNT]);

        let err = fixed(1, [0.7, 0.7]).predict(&input).expect_err("sum != 1");
        assert!(matches!(err, CytoradarError::Model(ModelError::InvalidOutput(_))));

        let err = fixed(0, [f64::NAN, 0.5]).predict(&input).expect_err("NaN");
        assert!(matches!(err, CytoradarError::Model(ModelError::InvalidOutput(_))));

        let err = fixed(2, [0.5, 0.5]).predict(&input).expect_err("bad label");
        assert!(matches!(err, CytoradarError::Model(ModelError::InvalidOutput(_))));
    }

    #[test]
    fn test_rejects_label_disagreeing_with_argmax() {
        let input = Measurements::from_array([0.0; FEATURE_COUNT]);
        let err = fixed(0, [0.2, 0.8]).predict(&input).expect_err("Should fail");
        assert!(matches!(err, CytoradarError::Model(ModelError::InvalidOutput(_))));
    }

    #[test]
    fn test_tie_accepts_either_label() {
        let input = Measurements::from_array([0.0; FEATURE_COUNT]);
        assert!(fixed(0, [0.5, 0.5]).predict(&input).is_ok());
        assert!(fixed(1, [0.5, 0.5]).predict(&input).is_ok());
    }
}
