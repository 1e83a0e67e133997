//! UI module: View components for the TUI.

pub mod prediction;
pub mod radar;
pub mod sliders;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::ReferenceDataset;
use crate::tui::styles::MedicalTheme;

pub fn render_header(f: &mut Frame, area: Rect, reference: &ReferenceDataset) {
    let text = vec![
        Line::from(vec![
            Span::styled(" ", MedicalTheme::text()),
            Span::styled("Breast Cancer Predictor", MedicalTheme::title()),
            Span::styled(" │ ", MedicalTheme::text_muted()),
            Span::styled(
                format!(
                    "Reference: {} samples ({} benign / {} malignant)",
                    reference.samples(),
                    reference.benign(),
                    reference.malignant()
                ),
                MedicalTheme::text_secondary(),
            ),
        ]),
        Line::from(Span::styled(
            " Predicts whether a breast mass is benign or malignant from cytology measurements. Adjust the measurements by hand in the sidebar.",
            MedicalTheme::text_muted(),
        )),
    ];

    let header = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

pub fn render_key_hints(f: &mut Frame, area: Rect) {
    let hints = [
        ("[↑↓] ", "Select "),
        ("[←→] ", "Adjust "),
        ("[Shift] ", "Fine "),
        ("[PgDn/PgUp Home/End] ", "Bounds "),
        ("[R] ", "Means "),
        ("[N] ", "Minimums "),
        ("[X] ", "Maximums "),
        ("[Q] ", "Quit"),
    ];
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(*key, MedicalTheme::key_hint()),
                Span::styled(*desc, MedicalTheme::key_desc()),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![Span::styled(
        "DISCLAIMER: This app can assist medical professionals in making a diagnosis, but should not be used as a substitute for a professional diagnosis.",
        MedicalTheme::text_muted(),
    )])];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(MedicalTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
