//! Cardiovascular scan questionnaire.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::domain::{HeartInput, Sex};
use crate::tui::styles::ScanTheme;
use crate::tui::ui::form::{render_form, FormField, FormState, YES_NO};
use crate::tui::ui::render_footer;

// Field indices, in form order.
const NAME: usize = 0;
const AGE: usize = 1;
const GENDER: usize = 2;
const HEIGHT: usize = 3;
const WEIGHT: usize = 4;
const SYSTOLIC: usize = 5;
const DIASTOLIC: usize = 6;
const CHOLESTEROL: usize = 7;
const GLUCOSE: usize = 8;
const SMOKER: usize = 9;
const ALCOHOL: usize = 10;
const ACTIVE: usize = 11;

const SEX_OPTIONS: &[&str] = &["Male", "Female"];

/// A fresh, empty cardiovascular form.
#[must_use]
pub fn heart_form() -> FormState {
    let mut state = FormState::new(vec![
        FormField::text("Patient Name", "Optional, appears on the report"),
        FormField::numeric("Age", "Years, 1-120", 1.0, 120.0, true),
        FormField::choice("Gender", SEX_OPTIONS),
        FormField::numeric("Height", "cm, 120-220", 120.0, 220.0, true),
        FormField::numeric("Weight", "kg, 30-200", 30.0, 200.0, false),
        FormField::numeric("Systolic BP", "mmHg, 80-200", 80.0, 200.0, true),
        FormField::numeric("Diastolic BP", "mmHg, 50-120", 50.0, 120.0, true),
        FormField::numeric("Cholesterol", "mg/dL, 100-400", 100.0, 400.0, true),
        FormField::numeric("Blood Glucose", "mg/dL, 50-300", 50.0, 300.0, true),
        FormField::choice("Smoker", YES_NO),
        FormField::choice("Alcohol Use", YES_NO),
        FormField::choice("Physically Active", YES_NO),
    ]);
    state.fields[ACTIVE].selected = 1; // most respondents answer yes
    state
}

/// Fill the form with a plausible sample case.
pub fn load_sample(state: &mut FormState) {
    state.fields[NAME].value = "Sample Patient".to_string();
    state.fields[AGE].value = "58".to_string();
    state.fields[GENDER].selected = 0; // Male
    state.fields[HEIGHT].value = "172".to_string();
    state.fields[WEIGHT].value = "84".to_string();
    state.fields[SYSTOLIC].value = "142".to_string();
    state.fields[DIASTOLIC].value = "92".to_string();
    state.fields[CHOLESTEROL].value = "246".to_string();
    state.fields[GLUCOSE].value = "118".to_string();
    state.fields[SMOKER].selected = 1;
    state.fields[ALCOHOL].selected = 0;
    state.fields[ACTIVE].selected = 0;
    state.error = None;
}

/// Parse the form into a validated domain input plus the patient name.
///
/// # Errors
/// Returns the first user-facing validation message.
pub fn to_input(state: &FormState) -> Result<(String, HeartInput), String> {
    let input = HeartInput {
        age: state.parse_u32(AGE)?,
        gender: Sex::ALL[state.choice_index(GENDER)],
        height_cm: state.parse_u32(HEIGHT)?,
        weight_kg: state.parse_f64(WEIGHT)?,
        systolic_bp: state.parse_u32(SYSTOLIC)?,
        diastolic_bp: state.parse_u32(DIASTOLIC)?,
        cholesterol: state.parse_u32(CHOLESTEROL)?,
        glucose: state.parse_u32(GLUCOSE)?,
        smoke: state.choice_yes(SMOKER),
        alco: state.choice_yes(ALCOHOL),
        active: state.choice_yes(ACTIVE),
    };

    input.validate().map_err(|errors| errors.join("; "))?;

    Ok((state.fields[NAME].value.clone(), input))
}

/// Ordered display rows for the results screen and the report.
#[must_use]
pub fn display_inputs(input: &HeartInput) -> Vec<(String, String)> {
    vec![
        ("Age".to_string(), input.age.to_string()),
        ("Gender".to_string(), input.gender.label().to_string()),
        ("Height".to_string(), format!("{} cm", input.height_cm)),
        ("Weight".to_string(), format!("{:.1} kg", input.weight_kg)),
        (
            "Blood Pressure".to_string(),
            format!("{}/{} mmHg", input.systolic_bp, input.diastolic_bp),
        ),
        (
            "Cholesterol".to_string(),
            format!("{} mg/dL", input.cholesterol),
        ),
        (
            "Blood Glucose".to_string(),
            format!("{} mg/dL", input.glucose),
        ),
        ("Smoker".to_string(), yes_no(input.smoke).to_string()),
        ("Alcohol Use".to_string(), yes_no(input.alco).to_string()),
        (
            "Physically Active".to_string(),
            yes_no(input.active).to_string(),
        ),
    ]
}

fn yes_no(v: bool) -> &'static str {
    if v {
        "Yes"
    } else {
        "No"
    }
}

/// Render the cardiovascular scan form.
pub fn render_heart_form(f: &mut Frame, area: Rect, state: &FormState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ScanTheme::border())
        .title(Span::styled(
            " Heart Disease Risk Scan ",
            ScanTheme::subtitle(),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let intro = Paragraph::new(Line::from(Span::styled(
        " Answer all questions, then press Enter to run the scan. BMI is derived from height and weight.",
        ScanTheme::text_secondary(),
    )));
    f.render_widget(intro, chunks[0]);

    render_form(f, chunks[1], state);

    render_footer(
        f,
        chunks[2],
        &[
            ("↑↓/Tab", "Move"),
            ("◂▸", "Change"),
            ("Ctrl+S", "Sample"),
            ("Enter", "Run Scan"),
            ("Esc", "Back"),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_reports_missing_fields() {
        let state = heart_form();
        let err = to_input(&state).expect_err("must fail");
        assert!(err.contains("Age"));
    }

    #[test]
    fn test_sample_form_parses() {
        let mut state = heart_form();
        load_sample(&mut state);
        let (name, input) = to_input(&state).expect("parse");
        assert_eq!(name, "Sample Patient");
        assert_eq!(input.age, 58);
        assert_eq!(input.gender, Sex::Male);
        assert_eq!(input.height_cm, 172);
        assert!((input.weight_kg - 84.0).abs() < f64::EPSILON);
        assert!(input.smoke);
        assert!(!input.alco);
        assert!(!input.active);
    }

    #[test]
    fn test_out_of_range_height_is_rejected() {
        let mut state = heart_form();
        load_sample(&mut state);
        state.fields[HEIGHT].value = "119".to_string();
        let err = to_input(&state).expect_err("must fail");
        assert!(err.contains("Height"));
    }

    #[test]
    fn test_sex_options_align_with_domain_order() {
        for (i, sex) in Sex::ALL.iter().enumerate() {
            assert_eq!(SEX_OPTIONS[i], sex.label());
        }
    }

    #[test]
    fn test_fresh_form_defaults_to_active() {
        let state = heart_form();
        assert!(state.choice_yes(ACTIVE));
        assert!(!state.choice_yes(SMOKER));
    }

    #[test]
    fn test_display_inputs_cover_every_answer() {
        let mut state = heart_form();
        load_sample(&mut state);
        let (_, input) = to_input(&state).expect("parse");
        let rows = display_inputs(&input);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[4].1, "142/92 mmHg");
    }
}
