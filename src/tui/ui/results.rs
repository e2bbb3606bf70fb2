//! Results screen: risk verdict, probability gauge and answered inputs.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::application::display_name;
use crate::domain::{Assessment, Condition};
use crate::tui::styles::ScanTheme;
use crate::tui::ui::render_footer;

/// Outcome of the last report save attempt, shown under the verdict.
pub enum ReportNotice {
    Saved(String),
    Failed(String),
}

/// Everything the results screen needs to render and to save a report.
pub struct ResultsState {
    pub assessment: Assessment,
    pub patient_name: String,
    /// Ordered questionnaire answers, already formatted for display.
    pub inputs: Vec<(String, String)>,
    pub report_notice: Option<ReportNotice>,
}

impl ResultsState {
    #[must_use]
    pub fn new(assessment: Assessment, patient_name: String, inputs: Vec<(String, String)>) -> Self {
        Self {
            assessment,
            patient_name,
            inputs,
            report_notice: None,
        }
    }
}

/// Render the results screen.
pub fn render_results(f: &mut Frame, area: Rect, state: &ResultsState) {
    let prediction = &state.assessment.prediction;

    let title = format!(" {} Scan Result ", state.assessment.condition.display_name());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ScanTheme::border())
        .title(Span::styled(title, ScanTheme::subtitle()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // verdict
            Constraint::Length(3), // gauge
            Constraint::Length(2), // notice
            Constraint::Min(4),    // inputs
            Constraint::Length(1), // footer
        ])
        .split(inner);

    render_verdict(f, chunks[0], state);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(ScanTheme::border())
                .title(Span::styled(" Probability ", ScanTheme::text_secondary())),
        )
        .gauge_style(ScanTheme::risk_gauge(prediction.probability))
        .ratio(prediction.probability)
        .label(format!("{:.1}%", prediction.percent()));
    f.render_widget(gauge, chunks[1]);

    if let Some(notice) = &state.report_notice {
        let line = match notice {
            ReportNotice::Saved(path) => Line::from(vec![
                Span::styled("  ✓ Report saved: ", ScanTheme::success()),
                Span::styled(path.clone(), ScanTheme::text()),
            ]),
            ReportNotice::Failed(reason) => Line::from(vec![
                Span::styled("  ✗ Report failed: ", ScanTheme::danger()),
                Span::styled(reason.clone(), ScanTheme::text()),
            ]),
        };
        f.render_widget(Paragraph::new(line), chunks[2]);
    }

    render_inputs(f, chunks[3], state);

    render_footer(
        f,
        chunks[4],
        &[
            ("R", "Save PDF Report"),
            ("N", "New Scan"),
            ("Esc", "Dashboard"),
        ],
    );
}

fn render_verdict(f: &mut Frame, area: Rect, state: &ResultsState) {
    let prediction = &state.assessment.prediction;
    let risk_style = ScanTheme::risk(prediction.is_high_risk());

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {}  ", prediction.risk_label().to_uppercase()),
                risk_style,
            ),
            Span::styled(
                format!("— {}", display_name(&state.patient_name)),
                ScanTheme::text_secondary(),
            ),
        ]),
    ];

    if state.assessment.condition == Condition::Heart {
        if let Some(bmi) = state.assessment.bmi {
            lines.push(Line::from(Span::styled(
                format!("  Derived BMI: {bmi:.1} kg/m²"),
                ScanTheme::text_secondary(),
            )));
        }
    }

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Left), area);
}

fn render_inputs(f: &mut Frame, area: Rect, state: &ResultsState) {
    let mut lines = Vec::with_capacity(state.inputs.len());
    for (label, value) in &state.inputs {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label:<24}"), ScanTheme::text_muted()),
            Span::styled(value.clone(), ScanTheme::text()),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ScanTheme::border())
            .title(Span::styled(" Inputs ", ScanTheme::text_secondary())),
    );
    f.render_widget(paragraph, area);
}
