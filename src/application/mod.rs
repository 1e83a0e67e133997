//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the render cycle of the dashboard.

mod dashboard;
pub mod normalizer;
mod prediction;
pub mod radar;

pub use dashboard::{Assessment, DashboardService};
pub use normalizer::{normalize, scale_measurements, DEGENERATE_FALLBACK};
pub use prediction::{PredictionService, PROBABILITY_TOLERANCE};
pub use radar::{build_radar_chart, RadarChart, RadarSeries, RADAR_CATEGORIES};
