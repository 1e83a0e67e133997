//! Dashboard service: one full render cycle per input vector.
//!
//! normalize -> radar chart -> predict. The result is all-or-nothing: a
//! failed prediction yields no chart either, so the UI never shows a chart
//! next to a stale or missing prediction.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{Measurements, Prediction, ReferenceDataset};
use crate::ports::{Classifier, FeatureScaler};
use crate::CytoradarError;

use super::normalizer::scale_measurements;
use super::prediction::PredictionService;
use super::radar::{build_radar_chart, RadarChart};

/// Output of a successful render cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub chart: RadarChart,
    pub prediction: Prediction,
}

/// Service composing the normalizer, chart assembly and prediction.
pub struct DashboardService<S, C>
where
    S: FeatureScaler,
    C: Classifier,
{
    reference: Arc<ReferenceDataset>,
    predictor: PredictionService<S, C>,
}

impl<S, C> DashboardService<S, C>
where
    S: FeatureScaler,
    C: Classifier,
{
    /// Create a new dashboard service over shared, read-only state.
    pub fn new(reference: Arc<ReferenceDataset>, predictor: PredictionService<S, C>) -> Self {
        Self {
            reference,
            predictor,
        }
    }

    /// Reference bounds backing the sliders and the normalizer.
    #[must_use]
    pub fn reference(&self) -> &Arc<ReferenceDataset> {
        &self.reference
    }

    /// Run one render cycle.
    ///
    /// # Errors
    /// Returns error if prediction fails; no partial assessment is produced.
    pub fn evaluate(&self, input: &Measurements) -> Result<Assessment, CytoradarError> {
        let scaled = scale_measurements(input, &self.reference);
        let chart = build_radar_chart(&scaled);

        let prediction = self.predictor.predict(input).map_err(|e| {
            tracing::warn!("Render cycle failed: {}", e);
            e
        })?;

        Ok(Assessment { chart, prediction })
    }
}
