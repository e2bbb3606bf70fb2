//! Diabetes scan questionnaire.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::domain::{DiabetesInput, Gender, SmokingHistory};
use crate::tui::styles::ScanTheme;
use crate::tui::ui::form::{render_form, FormField, FormState, YES_NO};
use crate::tui::ui::render_footer;

// Field indices, in form order.
const NAME: usize = 0;
const AGE: usize = 1;
const GENDER: usize = 2;
const BMI: usize = 3;
const SMOKING: usize = 4;
const HYPERTENSION: usize = 5;
const HEART_DISEASE: usize = 6;
const HBA1C: usize = 7;
const GLUCOSE: usize = 8;

const GENDER_OPTIONS: &[&str] = &["Female", "Male", "Other"];
const SMOKING_OPTIONS: &[&str] = &["never", "former", "ever", "current", "not current"];

/// A fresh, empty diabetes form.
#[must_use]
pub fn diabetes_form() -> FormState {
    FormState::new(vec![
        FormField::text("Patient Name", "Optional, appears on the report"),
        FormField::numeric("Age", "Years, 1-120", 1.0, 120.0, true),
        FormField::choice("Gender", GENDER_OPTIONS),
        FormField::numeric("BMI", "kg/m², 10.0-60.0", 10.0, 60.0, false),
        FormField::choice("Smoking History", SMOKING_OPTIONS),
        FormField::choice("Hypertension", YES_NO),
        FormField::choice("Heart Disease History", YES_NO),
        FormField::numeric("HbA1c Level", "%, 3.0-15.0", 3.0, 15.0, false),
        FormField::numeric("Blood Glucose", "mg/dL, 50-300", 50.0, 300.0, true),
    ])
}

/// Fill the form with a plausible sample case.
pub fn load_sample(state: &mut FormState) {
    state.fields[NAME].value = "Sample Patient".to_string();
    state.fields[AGE].value = "52".to_string();
    state.fields[GENDER].selected = 1; // Male
    state.fields[BMI].value = "28.4".to_string();
    state.fields[SMOKING].selected = 1; // former
    state.fields[HYPERTENSION].selected = 1;
    state.fields[HEART_DISEASE].selected = 0;
    state.fields[HBA1C].value = "6.1".to_string();
    state.fields[GLUCOSE].value = "145".to_string();
    state.error = None;
}

/// Parse the form into a validated domain input plus the patient name.
///
/// # Errors
/// Returns the first user-facing validation message.
pub fn to_input(state: &FormState) -> Result<(String, DiabetesInput), String> {
    let input = DiabetesInput {
        age: state.parse_u32(AGE)?,
        bmi: state.parse_f64(BMI)?,
        hba1c: state.parse_f64(HBA1C)?,
        glucose: state.parse_u32(GLUCOSE)?,
        hypertension: state.choice_yes(HYPERTENSION),
        heart_disease: state.choice_yes(HEART_DISEASE),
        gender: Gender::ALL[state.choice_index(GENDER)],
        smoking: SmokingHistory::ALL[state.choice_index(SMOKING)],
    };

    input.validate().map_err(|errors| errors.join("; "))?;

    Ok((state.fields[NAME].value.clone(), input))
}

/// Ordered display rows for the results screen and the report.
#[must_use]
pub fn display_inputs(input: &DiabetesInput) -> Vec<(String, String)> {
    vec![
        ("Age".to_string(), input.age.to_string()),
        ("Gender".to_string(), input.gender.label().to_string()),
        ("BMI".to_string(), format!("{:.1}", input.bmi)),
        (
            "Smoking History".to_string(),
            input.smoking.label().to_string(),
        ),
        (
            "Hypertension".to_string(),
            yes_no(input.hypertension).to_string(),
        ),
        (
            "Heart Disease History".to_string(),
            yes_no(input.heart_disease).to_string(),
        ),
        ("HbA1c Level".to_string(), format!("{:.1}%", input.hba1c)),
        (
            "Blood Glucose".to_string(),
            format!("{} mg/dL", input.glucose),
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

/// Render the diabetes scan form.
pub fn render_diabetes_form(f: &mut Frame, area: Rect, state: &FormState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ScanTheme::border())
        .title(Span::styled(" Diabetes Risk Scan ", ScanTheme::subtitle()));
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
        " Answer all questions, then press Enter to run the scan.",
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
        let state = diabetes_form();
        let err = to_input(&state).expect_err("must fail");
        assert!(err.contains("Age"));
    }

    #[test]
    fn test_sample_form_parses() {
        let mut state = diabetes_form();
        load_sample(&mut state);
        let (name, input) = to_input(&state).expect("parse");
        assert_eq!(name, "Sample Patient");
        assert_eq!(input.age, 52);
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.smoking, SmokingHistory::Former);
        assert!(input.hypertension);
        assert!(!input.heart_disease);
        assert!((input.hba1c - 6.1).abs() < f64::EPSILON);
        assert_eq!(input.glucose, 145);
    }

    #[test]
    fn test_out_of_range_bmi_is_rejected() {
        let mut state = diabetes_form();
        load_sample(&mut state);
        state.fields[BMI].value = "9.5".to_string();
        let err = to_input(&state).expect_err("must fail");
        assert!(err.contains("BMI"));
    }

    #[test]
    fn test_smoking_options_align_with_domain_order() {
        for (i, smoking) in SmokingHistory::ALL.iter().enumerate() {
            assert_eq!(SMOKING_OPTIONS[i], smoking.label());
        }
        for (i, gender) in Gender::ALL.iter().enumerate() {
            assert_eq!(GENDER_OPTIONS[i], gender.label());
        }
    }

    #[test]
    fn test_display_inputs_cover_every_answer() {
        let mut state = diabetes_form();
        load_sample(&mut state);
        let (_, input) = to_input(&state).expect("parse");
        let rows = display_inputs(&input);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], ("Age".to_string(), "52".to_string()));
        assert_eq!(rows[3].1, "former");
    }
}
