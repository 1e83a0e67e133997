//! Medical-themed color palette and styles.
//!
//! Colors chosen for:
//! - Clinical, low-distraction appearance
//! - High contrast for accessibility
//! - Three radar series that stay distinguishable when overlapping

use ratatui::style::{Color, Modifier, Style};

use crate::domain::{Diagnosis, FeatureGroup};

/// Medical theme color palette.
pub struct MedicalTheme;

impl MedicalTheme {
    // === Primary Colors ===

    /// Deep teal - Primary color
    pub const PRIMARY: Color = Color::Rgb(13, 148, 136); // #0D9488

    /// Lighter teal for highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(45, 212, 191); // #2DD4BF

    /// Light slate for borders
    pub const SECONDARY_LIGHT: Color = Color::Rgb(148, 163, 184); // #94A3B8

    // === Semantic Colors ===

    /// Rose - errors
    pub const DANGER: Color = Color::Rgb(244, 63, 94); // #F43F5E

    /// Blue - Info
    pub const INFO: Color = Color::Rgb(59, 130, 246); // #3B82F6

    // === Chart Colors ===

    /// Faint grid lines and spokes
    pub const GRID: Color = Color::Rgb(71, 85, 105); // #475569

    pub const SERIES_MEAN: Color = Color::Rgb(59, 130, 246); // #3B82F6
    pub const SERIES_SE: Color = Color::Rgb(251, 146, 60); // #FB923C
    pub const SERIES_WORST: Color = Color::Rgb(244, 63, 94); // #F43F5E

    // === Text Colors ===

    /// Primary text (white)
    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252); // #F8FAFC

    /// Secondary text (gray)
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Muted text
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    // === Preset Styles ===

    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    #[must_use]
    pub fn info() -> Style {
        Style::default().fg(Self::INFO)
    }

    /// Style for focused elements (selected slider)
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::SECONDARY_LIGHT)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Filled part of a slider track
    #[must_use]
    pub fn track_filled() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Empty part of a slider track
    #[must_use]
    pub fn track_empty() -> Style {
        Style::default().fg(Self::GRID)
    }

    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style of the predicted label.
    #[must_use]
    pub fn diagnosis(diagnosis: Diagnosis) -> Style {
        let (r, g, b) = diagnosis.color();
        Style::default()
            .fg(Color::Rgb(r, g, b))
            .add_modifier(Modifier::BOLD)
    }

    /// Line color of a radar series.
    #[must_use]
    pub fn series(group: FeatureGroup) -> Color {
        match group {
            FeatureGroup::Mean => Self::SERIES_MEAN,
            FeatureGroup::StandardError => Self::SERIES_SE,
            FeatureGroup::Worst => Self::SERIES_WORST,
        }
    }
}
