//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and external systems (ML artifacts, datasets).

mod model;
mod reference;

pub use model::{ensure_canonical_features, Classifier, FeatureScaler, ModelError};
pub use reference::ReferenceSource;
