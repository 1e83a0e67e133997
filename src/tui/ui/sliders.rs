//! Measurement sidebar: one bounded slider per feature.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{FeatureKey, Measurements, ReferenceDataset};
use crate::tui::styles::MedicalTheme;

/// Coarse steps across the full slider range.
const STEPS: f64 = 100.0;

/// Fine steps across the full slider range.
const FINE_STEPS: f64 = 1000.0;

/// Width of the slider track in cells.
const TRACK_WIDTH: usize = 12;

/// Static bounds of one slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub key: FeatureKey,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl Slider {
    /// Slider over `[0, max]` starting at the dataset mean.
    #[must_use]
    pub fn from_reference(key: FeatureKey, reference: &ReferenceDataset) -> Self {
        let bounds = reference.bounds(key);
        let max = bounds.max.max(0.0);
        Self {
            key,
            min: 0.0,
            max,
            default: bounds.mean.clamp(0.0, max),
        }
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        (self.max - self.min) / STEPS
    }

    #[must_use]
    pub fn fine_step(&self) -> f64 {
        (self.max - self.min) / FINE_STEPS
    }

    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Position of `value` along the track, 0..=1.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        let range = self.max - self.min;
        if range <= 0.0 {
            0.0
        } else {
            ((value - self.min) / range).clamp(0.0, 1.0)
        }
    }
}

/// Sidebar state: slider bounds, current values and the selection.
#[derive(Debug, Clone)]
pub struct SliderPanel {
    sliders: Vec<Slider>,
    values: Measurements,
    pub selected: usize,
}

impl SliderPanel {
    /// Build all 30 sliders, initialized to the dataset means.
    #[must_use]
    pub fn from_reference(reference: &ReferenceDataset) -> Self {
        let sliders: Vec<Slider> = FeatureKey::all()
            .map(|key| Slider::from_reference(key, reference))
            .collect();
        let values = Measurements::from_fn(|key| sliders[key.index()].default);
        Self {
            sliders,
            values,
            selected: 0,
        }
    }

    #[must_use]
    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    /// Current input vector.
    #[must_use]
    pub fn measurements(&self) -> Measurements {
        self.values
    }

    #[must_use]
    pub fn selected_slider(&self) -> Slider {
        self.sliders[self.selected]
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.sliders.len();
    }

    pub fn prev(&mut self) {
        if self.selected == 0 {
            self.selected = self.sliders.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Set the selected slider, clamped to its range.
    pub fn set_selected(&mut self, value: f64) {
        let slider = self.selected_slider();
        self.values.set(slider.key, slider.clamp(value));
    }

    /// Move the selected slider by `steps` (negative moves down).
    pub fn nudge(&mut self, steps: f64, fine: bool) {
        let slider = self.selected_slider();
        let step = if fine { slider.fine_step() } else { slider.step() };
        self.set_selected(self.values.get(slider.key) + steps * step);
    }

    pub fn to_min(&mut self) {
        let slider = self.selected_slider();
        self.set_selected(slider.min);
    }

    pub fn to_max(&mut self) {
        let slider = self.selected_slider();
        self.set_selected(slider.max);
    }

    /// Replace all values, clamping each into its slider range.
    pub fn load(&mut self, values: &Measurements) {
        let sliders = &self.sliders;
        self.values = Measurements::from_fn(|key| sliders[key.index()].clamp(values.get(key)));
    }

    /// Back to the dataset means.
    pub fn reset(&mut self) {
        let sliders = &self.sliders;
        self.values = Measurements::from_fn(|key| sliders[key.index()].default);
    }
}

/// Render the measurement sidebar.
pub fn render_sliders(f: &mut Frame, area: Rect, panel: &SliderPanel) {
    let block = Block::default()
        .title(Span::styled(" Cell Nuclei Measurements ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());

    let visible = usize::from(block.inner(area).height).max(1);
    // keep the selection on screen
    let start = (panel.selected + 1).saturating_sub(visible);

    let lines: Vec<Line> = panel
        .sliders
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, slider)| slider_line(slider, panel.values.get(slider.key), i == panel.selected))
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn slider_line(slider: &Slider, value: f64, selected: bool) -> Line<'static> {
    let filled = (slider.fraction(value) * TRACK_WIDTH as f64).round() as usize;
    let filled = filled.min(TRACK_WIDTH);

    let (marker, label_style) = if selected {
        ("▶ ", MedicalTheme::focused())
    } else {
        ("  ", MedicalTheme::text_secondary())
    };

    Line::from(vec![
        Span::styled(marker, MedicalTheme::focused()),
        Span::styled(format!("{:<26}", slider.key.label()), label_style),
        Span::styled("━".repeat(filled), MedicalTheme::track_filled()),
        Span::styled("─".repeat(TRACK_WIDTH - filled), MedicalTheme::track_empty()),
        Span::styled(format!(" {value:>10.4}"), MedicalTheme::text()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeatureBounds, FEATURE_COUNT};

    fn reference() -> ReferenceDataset {
        let bounds = std::array::from_fn(|i| FeatureBounds {
            min: 1.0,
            max: 10.0 * (i as f64 + 1.0),
            mean: 5.0,
        });
        ReferenceDataset::new(bounds, 3, 2, 1)
    }

    #[test]
    fn test_slider_bounds_from_reference() {
        let reference = reference();
        let slider = Slider::from_reference(FeatureKey::from_index(2).expect("key"), &reference);
        assert_eq!(slider.min, 0.0);
        assert_eq!(slider.max, 30.0);
        assert_eq!(slider.default, 5.0);
        assert!((slider.step() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_defaults_are_means() {
        let panel = SliderPanel::from_reference(&reference());
        assert_eq!(panel.sliders().len(), FEATURE_COUNT);
        assert!(panel.measurements().as_slice().iter().all(|v| *v == 5.0));
    }

    #[test]
    fn test_nudge_and_clamp() {
        let mut panel = SliderPanel::from_reference(&reference());
        panel.nudge(1.0, false);
        assert!((panel.measurements().as_slice()[0] - 5.1).abs() < 1e-12);

        panel.nudge(-1.0, true);
        assert!((panel.measurements().as_slice()[0] - 5.09).abs() < 1e-12);

        panel.nudge(1000.0, false);
        assert_eq!(panel.measurements().as_slice()[0], 10.0);

        panel.nudge(-1000.0, false);
        assert_eq!(panel.measurements().as_slice()[0], 0.0);
    }

    #[test]
    fn test_jump_to_bounds() {
        let mut panel = SliderPanel::from_reference(&reference());
        panel.next();
        panel.to_max();
        assert_eq!(panel.measurements().as_slice()[1], 20.0);
        panel.to_min();
        assert_eq!(panel.measurements().as_slice()[1], 0.0);
    }

    #[test]
    fn test_selection_wraps() {
        let mut panel = SliderPanel::from_reference(&reference());
        panel.prev();
        assert_eq!(panel.selected, FEATURE_COUNT - 1);
        panel.next();
        assert_eq!(panel.selected, 0);
    }

    #[test]
    fn test_load_clamps_and_reset_restores() {
        let mut panel = SliderPanel::from_reference(&reference());
        panel.load(&Measurements::from_array([1000.0; FEATURE_COUNT]));
        assert_eq!(panel.measurements().as_slice()[0], 10.0);
        assert_eq!(panel.measurements().as_slice()[29], 300.0);

        panel.reset();
        assert!(panel.measurements().as_slice().iter().all(|v| *v == 5.0));
    }

    #[test]
    fn test_fraction_of_empty_range() {
        let slider = Slider {
            key: FeatureKey::from_index(0).expect("key"),
            min: 0.0,
            max: 0.0,
            default: 0.0,
        };
        assert_eq!(slider.fraction(0.0), 0.0);
    }
}
