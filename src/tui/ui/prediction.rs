//! Prediction panel and render-cycle error view.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::domain::{format_probability, Diagnosis, Prediction};
use crate::tui::styles::MedicalTheme;

/// Render the classifier output.
pub fn render_prediction(f: &mut Frame, area: Rect, prediction: &Prediction) {
    let block = Block::default()
        .title(Span::styled(" Cell cluster prediction ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Label
            Constraint::Length(5), // Probabilities
            Constraint::Length(3), // Malignancy gauge
            Constraint::Min(0),    // Padding
        ])
        .margin(1)
        .split(inner);

    let label = Paragraph::new(vec![
        Line::from(Span::styled("The cell cluster is:", MedicalTheme::text_secondary())),
        Line::from(Span::styled(
            prediction.diagnosis.to_string(),
            MedicalTheme::diagnosis(prediction.diagnosis),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(label, chunks[0]);

    let probabilities = Paragraph::new(vec![
        Line::from(Span::styled(
            "Probability of being benign:",
            MedicalTheme::text_secondary(),
        )),
        Line::from(Span::styled(
            format_probability(prediction.benign_probability()),
            MedicalTheme::info(),
        )),
        Line::from(Span::styled(
            "Probability of being malignant:",
            MedicalTheme::text_secondary(),
        )),
        Line::from(Span::styled(
            format_probability(prediction.malignant_probability()),
            MedicalTheme::info(),
        )),
    ]);
    f.render_widget(probabilities, chunks[1]);

    let p = prediction.malignant_probability().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .gauge_style(MedicalTheme::diagnosis(Diagnosis::Malignant))
        .ratio(p)
        .label(format!("{:.1}% malignant", p * 100.0));
    f.render_widget(gauge, chunks[2]);
}

/// Render a failed render cycle in place of chart and prediction.
pub fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("! Prediction unavailable", MedicalTheme::danger())),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), MedicalTheme::text())),
        Line::from(""),
        Line::from(Span::styled(
            "Check that the model artifacts match the 30 dashboard features.",
            MedicalTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(MedicalTheme::danger()),
    );

    f.render_widget(content, area);
}
