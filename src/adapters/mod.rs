//! Adapters layer: Concrete implementations of ports.
//!
//! - `dataset`: CSV reference dataset loader
//! - `model`: JSON scaler/classifier artifacts with digest manifest

pub mod dataset;
pub mod model;

pub use dataset::{CsvReferenceLoader, DatasetError};
pub use model::{JsonModelLoader, LogisticModel, ModelArtifacts, StandardScalerModel};
