//! UI rendering components for each screen.

pub mod dashboard;
pub mod diabetes;
pub mod form;
pub mod heart;
pub mod results;

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::styles::ScanTheme;

/// Render a single-line key hint footer: `[key] desc  [key] desc ...`.
pub fn render_footer(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, desc) in hints {
        spans.push(Span::styled(format!(" [{key}] "), ScanTheme::key_hint()));
        spans.push(Span::styled((*desc).to_string(), ScanTheme::key_desc()));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the screening disclaimer shown at the bottom of every screen.
pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let disclaimer = Paragraph::new(Line::from(Span::styled(
        "Screening aid only — not a medical diagnosis. Consult a healthcare professional.",
        ScanTheme::text_muted(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(disclaimer, area);
}
