//! Reference source port: where the per-feature bounds come from.

use crate::domain::ReferenceDataset;

/// Trait for loading the reference dataset summary.
///
/// Called once at startup; the result is shared read-only afterwards.
pub trait ReferenceSource {
    /// Error type for this source
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load and summarize the reference dataset.
    ///
    /// # Errors
    /// Returns error if the data cannot be read or fails schema checks.
    fn load_reference(&self) -> Result<ReferenceDataset, Self::Error>;
}
