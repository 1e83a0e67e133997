//! TUI module: Terminal User Interface using Ratatui.
//!
//! Single-screen dashboard:
//! - Measurement sliders in the sidebar
//! - Radar chart of the normalized measurements
//! - Classifier prediction with class probabilities

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::MedicalTheme;
