//! Main TUI application and screen state machine.
//!
//! Screen flow:
//! - Dashboard: pick a scan or quit
//! - DiabetesForm / HeartForm: questionnaire entry, Enter runs the scan
//! - Results: verdict, probability, report save
//!
//! Scans run synchronously on the event thread. Inference is a dot product
//! over at most 15 features, so there is nothing to defer to a worker; the
//! draw after submit already shows the result.

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{Frame, Terminal};

use crate::adapters::{LinearClassifier, ModelArtifacts, PdfReportRenderer, StandardScaler};
use crate::application::{report_file_name, Predictor, ReportService, RiskService};
use crate::domain::Condition;
use crate::ports::{Classifier, ReportRenderer, Scaler};
use crate::tui::ui::dashboard::{render_dashboard, DashboardState};
use crate::tui::ui::diabetes::{self, render_diabetes_form};
use crate::tui::ui::form::FormState;
use crate::tui::ui::heart::{self, render_heart_form};
use crate::tui::ui::render_disclaimer;
use crate::tui::ui::results::{render_results, ReportNotice, ResultsState};
use crate::Result;

/// Current screen in the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    DiabetesForm,
    HeartForm,
    Results,
}

/// Main application state.
pub struct App<S, C, R>
where
    S: Scaler,
    C: Classifier,
    R: ReportRenderer,
{
    pub screen: Screen,
    should_quit: bool,
    risk_service: RiskService<S, C>,
    report_service: Option<ReportService<R>>,
    report_dir: PathBuf,
    dashboard: DashboardState,
    diabetes_form: FormState,
    heart_form: FormState,
    results: Option<ResultsState>,
}

impl App<StandardScaler, LinearClassifier, PdfReportRenderer> {
    /// Build the production app from loaded artifacts.
    #[must_use]
    pub fn new(artifacts: ModelArtifacts, models_dir: impl Into<String>) -> Self {
        let risk_service = RiskService::new(
            Predictor::new(artifacts.diabetes_scaler, artifacts.diabetes_model),
            Predictor::new(artifacts.heart_scaler, artifacts.heart_model),
        );
        Self::with_services(
            risk_service,
            Some(ReportService::new(PdfReportRenderer::new())),
            models_dir,
        )
    }
}

impl<S, C, R> App<S, C, R>
where
    S: Scaler,
    C: Classifier,
    R: ReportRenderer,
{
    /// Build an app from explicit services. Report generation is disabled
    /// when `report_service` is `None`.
    pub fn with_services(
        risk_service: RiskService<S, C>,
        report_service: Option<ReportService<R>>,
        models_dir: impl Into<String>,
    ) -> Self {
        Self {
            screen: Screen::Dashboard,
            should_quit: false,
            risk_service,
            report_service,
            report_dir: report_dir_from_env(),
            dashboard: DashboardState::new(models_dir),
            diabetes_form: diabetes::diabetes_form(),
            heart_form: heart::heart_form(),
            results: None,
        }
    }

    /// Run the TUI event loop until quit.
    ///
    /// # Errors
    /// Returns error on terminal I/O failure.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        match self.screen {
            Screen::Dashboard => render_dashboard(f, chunks[0], &self.dashboard),
            Screen::DiabetesForm => render_diabetes_form(f, chunks[0], &self.diabetes_form),
            Screen::HeartForm => render_heart_form(f, chunks[0], &self.heart_form),
            Screen::Results => {
                if let Some(results) = &self.results {
                    render_results(f, chunks[0], results);
                }
            }
        }

        render_disclaimer(f, chunks[1]);
    }

    /// Dispatch a key press to the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global quit, available even inside text fields.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::DiabetesForm | Screen::HeartForm => self.handle_form_key(key),
            Screen::Results => self.handle_results_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('d' | 'D') => self.screen = Screen::DiabetesForm,
            KeyCode::Char('h' | 'H') => self.screen = Screen::HeartForm,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let is_diabetes = self.screen == Screen::DiabetesForm;
        let form = if is_diabetes {
            &mut self.diabetes_form
        } else {
            &mut self.heart_form
        };

        // Ctrl+S loads sample data; plain 's' must stay typable in the
        // patient name field.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            if is_diabetes {
                diabetes::load_sample(form);
            } else {
                heart::load_sample(form);
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.screen = Screen::Dashboard,
            KeyCode::Up | KeyCode::BackTab => form.prev_field(),
            KeyCode::Down | KeyCode::Tab => form.next_field(),
            KeyCode::Left => form.cycle(false),
            KeyCode::Right => form.cycle(true),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Delete => form.clear_field(),
            KeyCode::Char(c) => form.input_char(c),
            KeyCode::Enter => {
                if is_diabetes {
                    self.submit_diabetes();
                } else {
                    self.submit_heart();
                }
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r' | 'R') => self.save_report(),
            KeyCode::Char('n' | 'N') => self.new_scan(),
            KeyCode::Esc | KeyCode::Enter => self.screen = Screen::Dashboard,
            _ => {}
        }
    }

    fn submit_diabetes(&mut self) {
        match diabetes::to_input(&self.diabetes_form) {
            Ok((name, input)) => match self.risk_service.assess_diabetes(&input) {
                Ok(assessment) => {
                    self.dashboard.diabetes_scans += 1;
                    let inputs = diabetes::display_inputs(&input);
                    self.results = Some(ResultsState::new(assessment, name, inputs));
                    self.screen = Screen::Results;
                }
                Err(err) => {
                    tracing::error!("Diabetes scan failed: {err}");
                    self.diabetes_form.error = Some(format!("Scan failed: {err}"));
                }
            },
            Err(message) => self.diabetes_form.error = Some(message),
        }
    }

    fn submit_heart(&mut self) {
        match heart::to_input(&self.heart_form) {
            Ok((name, input)) => match self.risk_service.assess_heart(&input) {
                Ok(assessment) => {
                    self.dashboard.heart_scans += 1;
                    let inputs = heart::display_inputs(&input);
                    self.results = Some(ResultsState::new(assessment, name, inputs));
                    self.screen = Screen::Results;
                }
                Err(err) => {
                    tracing::error!("Heart scan failed: {err}");
                    self.heart_form.error = Some(format!("Scan failed: {err}"));
                }
            },
            Err(message) => self.heart_form.error = Some(message),
        }
    }

    fn new_scan(&mut self) {
        let Some(results) = &self.results else {
            return;
        };
        match results.assessment.condition {
            Condition::Diabetes => {
                self.diabetes_form = diabetes::diabetes_form();
                self.screen = Screen::DiabetesForm;
            }
            Condition::Heart => {
                self.heart_form = heart::heart_form();
                self.screen = Screen::HeartForm;
            }
        }
    }

    fn save_report(&mut self) {
        let Some(results) = self.results.as_mut() else {
            return;
        };
        let Some(report_service) = &self.report_service else {
            results.report_notice = Some(ReportNotice::Failed(
                "No report renderer configured".to_string(),
            ));
            return;
        };

        let generated = report_service.generate(
            &results.assessment,
            &results.patient_name,
            results.inputs.clone(),
        );

        match generated {
            Ok(bytes) => {
                let file_name =
                    report_file_name(results.assessment.condition, &results.patient_name);
                let path = self.report_dir.join(file_name);
                match std::fs::write(&path, &bytes) {
                    Ok(()) => {
                        tracing::info!(
                            "Report saved: condition={}, {} bytes",
                            results.assessment.condition,
                            bytes.len()
                        );
                        results.report_notice =
                            Some(ReportNotice::Saved(path.display().to_string()));
                    }
                    Err(err) => {
                        tracing::error!("Report write failed: {err}");
                        results.report_notice = Some(ReportNotice::Failed(err.to_string()));
                    }
                }
            }
            Err(err) => {
                tracing::error!("Report render failed: {err}");
                results.report_notice = Some(ReportNotice::Failed(err.to_string()));
            }
        }
    }

    /// Override the report output directory (defaults to
    /// `RISKSCAN_REPORT_DIR`, falling back to the working directory).
    pub fn set_report_dir(&mut self, dir: impl Into<PathBuf>) {
        self.report_dir = dir.into();
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

fn report_dir_from_env() -> PathBuf {
    std::env::var("RISKSCAN_REPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{InferenceError, ReportContent, ReportError};

    struct FakeScaler {
        expected: usize,
    }

    impl Scaler for FakeScaler {
        fn transform(&self, features: &[f64]) -> std::result::Result<Vec<f64>, InferenceError> {
            if features.len() != self.expected {
                return Err(InferenceError::FeatureCount {
                    expected: self.expected,
                    got: features.len(),
                });
            }
            Ok(features.to_vec())
        }
    }

    struct FakeClassifier;

    impl Classifier for FakeClassifier {
        fn predict(&self, _features: &[f64]) -> std::result::Result<u8, InferenceError> {
            Ok(1)
        }

        fn predict_proba(&self, _features: &[f64]) -> std::result::Result<f64, InferenceError> {
            Ok(0.83)
        }
    }

    struct FakeRenderer;

    impl ReportRenderer for FakeRenderer {
        fn render(&self, _content: &ReportContent) -> std::result::Result<Vec<u8>, ReportError> {
            Ok(b"%PDF-fake".to_vec())
        }
    }

    fn make_app() -> App<FakeScaler, FakeClassifier, FakeRenderer> {
        let risk_service = RiskService::new(
            Predictor::new(FakeScaler { expected: 13 }, FakeClassifier),
            Predictor::new(FakeScaler { expected: 15 }, FakeClassifier),
        );
        App::with_services(risk_service, Some(ReportService::new(FakeRenderer)), "models")
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_dashboard_shortcuts() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::Char('d')));
        assert_eq!(app.screen, Screen::DiabetesForm);

        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Dashboard);

        app.handle_key(press(KeyCode::Char('h')));
        assert_eq!(app.screen, Screen::HeartForm);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = make_app();
        app.handle_key(press(KeyCode::Char('d')));
        app.handle_key(ctrl('c'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_sample_then_submit_reaches_results() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::Char('d')));
        app.handle_key(ctrl('s'));
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.screen, Screen::Results);
        assert_eq!(app.dashboard.diabetes_scans, 1);

        let results = app.results.as_ref().expect("results");
        assert_eq!(results.assessment.condition, Condition::Diabetes);
        assert_eq!(results.assessment.prediction.label, 1);
    }

    #[test]
    fn test_invalid_form_stays_with_error() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::Char('h')));
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.screen, Screen::HeartForm);
        assert!(app.heart_form.error.is_some());
        assert_eq!(app.dashboard.heart_scans, 0);
    }

    #[test]
    fn test_heart_scan_carries_bmi_to_results() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::Char('h')));
        app.handle_key(ctrl('s'));
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.screen, Screen::Results);
        let results = app.results.as_ref().expect("results");
        assert!(results.assessment.bmi.is_some());
    }

    #[test]
    fn test_new_scan_resets_the_same_form() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::Char('d')));
        app.handle_key(ctrl('s'));
        app.handle_key(press(KeyCode::Enter));

        app.handle_key(press(KeyCode::Char('n')));
        assert_eq!(app.screen, Screen::DiabetesForm);
        assert!(app.diabetes_form.fields[0].value.is_empty());
    }

    #[test]
    fn test_save_report_writes_pdf_to_report_dir() {
        let dir = tempfile::tempdir().expect("tempdir");

        let mut app = make_app();
        app.set_report_dir(dir.path());
        app.handle_key(press(KeyCode::Char('d')));
        app.handle_key(ctrl('s'));
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Char('r')));

        let results = app.results.as_ref().expect("results");
        assert!(matches!(
            results.report_notice,
            Some(ReportNotice::Saved(_))
        ));

        let path = dir.path().join("Diabetes_Report_Sample_Patient.pdf");
        let bytes = std::fs::read(path).expect("report file");
        assert_eq!(&bytes, b"%PDF-fake");
    }

    #[test]
    fn test_typing_s_in_name_field_does_not_trigger_sample() {
        let mut app = make_app();
        app.handle_key(press(KeyCode::Char('d')));
        app.handle_key(press(KeyCode::Char('s')));
        assert_eq!(app.diabetes_form.fields[0].value, "s");
        assert!(app.diabetes_form.fields[1].value.is_empty());
    }
}
