//! # Cytoradar
//!
//! Decision-support dashboard for breast cytology measurements.
//!
//! This crate provides:
//! - Min-max normalization of 30 cell-nuclei measurements against a reference dataset
//! - Radar chart assembly for the mean / standard error / worst feature groups
//! - Benign/malignant prediction through pluggable, pre-fitted model artifacts
//! - Terminal UI with one slider per measurement
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (feature catalogue, measurements, reference bounds, diagnosis)
//! - `ports`: Trait definitions for the scaler, classifier and reference source
//! - `adapters`: Concrete implementations (CSV dataset, JSON model artifacts)
//! - `application`: Normalizer, radar assembly and the render-cycle services
//! - `config`: Environment-based configuration
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{Diagnosis, Measurements, Prediction, ReferenceDataset};

/// Result type for Cytoradar operations
pub type Result<T> = std::result::Result<T, CytoradarError>;

/// Main error type for Cytoradar
#[derive(Debug, thiserror::Error)]
pub enum CytoradarError {
    #[error(transparent)]
    Model(#[from] ports::ModelError),

    #[error("Reference dataset error: {0}")]
    Dataset(#[from] adapters::DatasetError),
}
