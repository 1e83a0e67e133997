//! Main TUI application state.
//!
//! Handles:
//! - Startup wiring (reference dataset, model artifacts)
//! - Input event handling
//! - One synchronous render cycle per value change

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};

use crate::adapters::{CsvReferenceLoader, JsonModelLoader, LogisticModel, StandardScalerModel};
use crate::application::{Assessment, DashboardService, PredictionService};
use crate::config::AppConfig;
use crate::domain::Measurements;
use crate::ports::ReferenceSource;

use super::ui::{
    prediction::{render_error, render_prediction},
    radar::render_radar,
    render_disclaimer, render_header, render_key_hints,
    sliders::{render_sliders, SliderPanel},
};

/// Sidebar width in cells.
const SIDEBAR_WIDTH: u16 = 55;

type Service = DashboardService<StandardScalerModel, LogisticModel>;

/// Main application state
pub struct App {
    /// Render-cycle service over shared read-only state
    service: Service,

    /// Slider values and selection
    sliders: SliderPanel,

    /// Outcome of the latest render cycle
    last_cycle: std::result::Result<Assessment, String>,

    /// Whether the app should quit
    should_quit: bool,
}

impl App {
    /// Create a new application, loading the dataset and model artifacts.
    ///
    /// # Errors
    /// Returns error if the reference dataset or artifacts are missing,
    /// unreadable or inconsistent. Startup must not continue in that case.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let reference = CsvReferenceLoader::new(&config.data_path)
            .load_reference()
            .with_context(|| {
                format!(
                    "Failed to load reference dataset from {:?}. Set CYTORADAR_DATA_PATH to the processed CSV.",
                    config.data_path
                )
            })?;

        let artifacts = JsonModelLoader::new(&config.model_dir)
            .require_manifest(config.require_manifest)
            .load()
            .map_err(|e| {
                anyhow!(
                    "Failed to load model from {:?}: {}. Set CYTORADAR_MODEL_DIR to a directory containing model.json and scaler.json.",
                    config.model_dir,
                    e
                )
            })?;

        let predictor = PredictionService::new(
            Arc::new(artifacts.scaler),
            Arc::new(artifacts.classifier),
        );
        let service = DashboardService::new(Arc::new(reference), predictor);

        Ok(Self::with_dependencies(service))
    }

    /// Create application with an injected service (Composition Root pattern).
    #[must_use]
    pub fn with_dependencies(service: Service) -> Self {
        let sliders = SliderPanel::from_reference(service.reference());
        let mut app = Self {
            service,
            sliders,
            last_cycle: Err(String::from("Not evaluated yet")),
            should_quit: false,
        };
        app.recompute();
        app
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut terminal = match Self::setup_terminal() {
            Ok(terminal) => terminal,
            Err(e) => {
                // undo partial setup
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
                disable_raw_mode()?;
                return Err(e);
            }
        };

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Ok(Terminal::new(backend)?)
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Key hints
                Constraint::Length(3), // Disclaimer
            ])
            .split(f.area());

        render_header(f, chunks[0], self.service.reference());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);

        render_sliders(f, body[0], &self.sliders);
        self.draw_results(f, body[1]);

        render_key_hints(f, chunks[2]);
        render_disclaimer(f, chunks[3]);
    }

    fn draw_results(&self, f: &mut Frame, area: Rect) {
        match &self.last_cycle {
            Ok(assessment) => {
                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
                    .split(area);
                render_radar(f, columns[0], &assessment.chart);
                render_prediction(f, columns[1], &assessment.prediction);
            }
            Err(message) => render_error(f, area, message),
        }
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let fine = modifiers.contains(KeyModifiers::SHIFT);
        let reference = Arc::clone(self.service.reference());

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.sliders.prev();
                return;
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.sliders.next();
                return;
            }
            KeyCode::Right | KeyCode::Char('l') => self.sliders.nudge(1.0, fine),
            KeyCode::Left | KeyCode::Char('h') => self.sliders.nudge(-1.0, fine),
            KeyCode::Home | KeyCode::PageDown => self.sliders.to_min(),
            KeyCode::End | KeyCode::PageUp => self.sliders.to_max(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.sliders.reset(),
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.sliders.load(&Measurements::minimums(&reference));
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                self.sliders.load(&Measurements::maximums(&reference));
            }
            _ => return,
        }

        self.recompute();
    }

    /// Run one render cycle for the current slider values.
    fn recompute(&mut self) {
        let input = self.sliders.measurements();
        self.last_cycle = self.service.evaluate(&input).map_err(|e| {
            tracing::error!("Render cycle failed: {}", e);
            e.to_string()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Diagnosis, FeatureBounds, ReferenceDataset, FEATURE_COUNT, FEATURE_NAMES};

    fn names() -> Vec<String> {
        FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
    }

    fn service(feature_names: Vec<String>) -> Service {
        let bounds = std::array::from_fn(|_| FeatureBounds {
            min: 1.0,
            max: 4.0,
            mean: 2.0,
        });
        let reference = Arc::new(ReferenceDataset::new(bounds, 4, 2, 2));
        let scaler = StandardScalerModel {
            feature_names: names(),
            mean: vec![2.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        };
        let classifier = LogisticModel {
            coefficients: vec![1.0; feature_names.len()],
            feature_names,
            intercept: 0.0,
            classes: vec![0, 1],
        };
        DashboardService::new(
            reference,
            PredictionService::new(Arc::new(scaler), Arc::new(classifier)),
        )
    }

    #[test]
    fn test_initial_cycle_uses_means() {
        let app = App::with_dependencies(service(names()));
        assert!(app.sliders.measurements().as_slice().iter().all(|v| *v == 2.0));

        let assessment = app.last_cycle.as_ref().expect("Should evaluate");
        // at the scaler mean the decision is exactly 0: tie resolves to benign
        assert_eq!(assessment.prediction.diagnosis, Diagnosis::Benign);
        assert!((assessment.chart.series[0].values[0] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_presets_trigger_recompute() {
        let mut app = App::with_dependencies(service(names()));

        app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        let assessment = app.last_cycle.as_ref().expect("Should evaluate");
        assert_eq!(assessment.prediction.diagnosis, Diagnosis::Malignant);
        assert!(assessment.chart.series.iter().all(|s| s.values.iter().all(|v| *v == 1.0)));

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        let assessment = app.last_cycle.as_ref().expect("Should evaluate");
        assert!(assessment.chart.series.iter().all(|s| s.values.iter().all(|v| *v == 0.0)));
    }

    #[test]
    fn test_slider_keys() {
        let mut app = App::with_dependencies(service(names()));

        app.handle_key(KeyCode::Down, KeyModifiers::NONE);
        app.handle_key(KeyCode::End, KeyModifiers::NONE);
        assert_eq!(app.sliders.measurements().as_slice()[1], 4.0);

        app.handle_key(KeyCode::Left, KeyModifiers::SHIFT);
        assert!((app.sliders.measurements().as_slice()[1] - 3.996).abs() < 1e-12);

        app.handle_key(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(app.sliders.measurements().as_slice()[1], 2.0);

        app.handle_key(KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(app.sliders.measurements().as_slice()[1], 4.0);

        app.handle_key(KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(app.sliders.measurements().as_slice()[1], 0.0);
        let assessment = app.last_cycle.as_ref().expect("Should evaluate");
        assert_eq!(assessment.chart.series[0].values[1], 0.0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::with_dependencies(service(names()));
        app.handle_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_schema_mismatch_replaces_results_with_error() {
        let mut shifted = names();
        shifted.rotate_left(1);
        let app = App::with_dependencies(service(shifted));

        let message = app.last_cycle.as_ref().expect_err("Should fail");
        assert!(message.contains("schema mismatch"));
    }
}
