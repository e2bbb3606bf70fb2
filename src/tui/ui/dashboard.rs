//! Dashboard screen: entry point with scan shortcuts and session stats.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::styles::ScanTheme;
use crate::tui::ui::render_footer;

/// Session-level state shown on the dashboard.
pub struct DashboardState {
    /// Directory the model artifacts were loaded from.
    pub models_dir: String,
    /// Diabetes scans completed this session.
    pub diabetes_scans: u32,
    /// Heart scans completed this session.
    pub heart_scans: u32,
}

impl DashboardState {
    #[must_use]
    pub fn new(models_dir: impl Into<String>) -> Self {
        Self {
            models_dir: models_dir.into(),
            diabetes_scans: 0,
            heart_scans: 0,
        }
    }
}

/// Render the dashboard screen.
pub fn render_dashboard(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ScanTheme::border())
        .title(Span::styled(
            " Riskscan — Disease Risk Screening ",
            ScanTheme::subtitle(),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(8),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let intro = Paragraph::new(vec![Line::from(Span::styled(
        "Run a risk scan against the pre-trained screening models.",
        ScanTheme::text_secondary(),
    ))])
    .alignment(Alignment::Center);
    f.render_widget(intro, chunks[0]);

    render_scan_cards(f, chunks[1]);
    render_session_stats(f, chunks[2], state);

    render_footer(
        f,
        chunks[4],
        &[
            ("D", "Diabetes Scan"),
            ("H", "Heart Scan"),
            ("Q", "Quit"),
        ],
    );
}

fn render_scan_cards(f: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let diabetes = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("  [D] Diabetes Risk", ScanTheme::title())),
        Line::from(""),
        Line::from(Span::styled(
            "  Age, BMI, HbA1c, glucose, smoking",
            ScanTheme::text_secondary(),
        )),
        Line::from(Span::styled(
            "  history and comorbidities.",
            ScanTheme::text_secondary(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ScanTheme::border_focused()),
    );
    f.render_widget(diabetes, columns[0]);

    let heart = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("  [H] Heart Disease Risk", ScanTheme::title())),
        Line::from(""),
        Line::from(Span::styled(
            "  Vitals, cholesterol, glucose and",
            ScanTheme::text_secondary(),
        )),
        Line::from(Span::styled(
            "  lifestyle factors. BMI is derived.",
            ScanTheme::text_secondary(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ScanTheme::border_focused()),
    );
    f.render_widget(heart, columns[1]);
}

fn render_session_stats(f: &mut Frame, area: Rect, state: &DashboardState) {
    let stats = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("  Models: ", ScanTheme::text_muted()),
            Span::styled(state.models_dir.clone(), ScanTheme::text()),
        ]),
        Line::from(vec![
            Span::styled("  Scans this session: ", ScanTheme::text_muted()),
            Span::styled(
                format!(
                    "{} diabetes, {} heart",
                    state.diabetes_scans, state.heart_scans
                ),
                ScanTheme::text(),
            ),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ScanTheme::border())
            .title(Span::styled(" Session ", ScanTheme::text_secondary())),
    );
    f.render_widget(stats, area);
}
