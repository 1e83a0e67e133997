//! Radar chart view drawn on a braille canvas.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::application::radar::{axis_angle, RadarChart};
use crate::tui::styles::MedicalTheme;

/// Grid ring radii.
const RINGS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Canvas half-width; wider than tall to offset the terminal cell aspect.
const X_EXTENT: f64 = 1.9;
const Y_EXTENT: f64 = 1.25;

/// Render the radar chart with its legend.
pub fn render_radar(f: &mut Frame, area: Rect, chart: &RadarChart) {
    let block = Block::default()
        .title(Span::styled(" Feature Profile ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let cell_width = 2.0 * X_EXTENT / f64::from(chunks[0].width.max(1));

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-X_EXTENT, X_EXTENT])
        .y_bounds([-Y_EXTENT, Y_EXTENT])
        .paint(|ctx| {
            draw_grid(ctx, chart.categories.len());
            ctx.layer();

            for series in &chart.series {
                let color = MedicalTheme::series(series.group);
                for pair in series.polygon().windows(2) {
                    let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
                }
            }
            ctx.layer();

            for (i, category) in chart.categories.iter().enumerate() {
                let (x, y) = label_position(i, category.chars().count(), cell_width);
                ctx.print(x, y, Span::styled(*category, MedicalTheme::text_secondary()));
            }
        });
    f.render_widget(canvas, chunks[0]);

    let mut legend = Vec::with_capacity(chart.series.len() * 2);
    for series in &chart.series {
        legend.push(Span::styled(
            "● ",
            Style::default().fg(MedicalTheme::series(series.group)),
        ));
        legend.push(Span::styled(format!("{}   ", series.name), MedicalTheme::text()));
    }
    f.render_widget(
        Paragraph::new(Line::from(legend)).alignment(ratatui::layout::Alignment::Center),
        chunks[1],
    );
}

fn draw_grid(ctx: &mut Context<'_>, axes: usize) {
    let color = MedicalTheme::GRID;
    for i in 0..axes {
        let theta = axis_angle(i);
        ctx.draw(&CanvasLine::new(0.0, 0.0, theta.cos(), theta.sin(), color));
    }
    for r in RINGS {
        for i in 0..axes {
            let a = axis_angle(i);
            let b = axis_angle((i + 1) % axes);
            ctx.draw(&CanvasLine::new(
                r * a.cos(),
                r * a.sin(),
                r * b.cos(),
                r * b.sin(),
                color,
            ));
        }
    }
}

/// Text anchor just outside the unit ring, shifted so the label does not
/// overlap the chart on the left-hand side.
fn label_position(axis: usize, chars: usize, cell_width: f64) -> (f64, f64) {
    let theta = axis_angle(axis);
    let (x, y) = (1.08 * theta.cos(), 1.1 * theta.sin());
    let text_width = chars as f64 * cell_width;
    let x = if x < -0.1 {
        x - text_width
    } else if x <= 0.1 {
        x - text_width / 2.0
    } else {
        x
    };
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_labels_end_before_axis() {
        // axis 7 (Concave Points) sits on the left half
        let (x, _) = label_position(7, 14, 0.05);
        assert!(x + 14.0 * 0.05 < 0.0);
    }

    #[test]
    fn test_top_label_centered() {
        let (x, y) = label_position(0, 6, 0.1);
        assert!((x + 0.3).abs() < 1e-9);
        assert!(y > 1.0);
    }
}
