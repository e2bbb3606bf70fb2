//! Shared questionnaire form machinery.
//!
//! Both scan forms are a vertical list of fields driven by the same key
//! handling: arrows/Tab move focus, typing edits the focused field, and
//! Left/Right cycle choice fields. Parsing and range checks happen on
//! submit; the domain input types are only built from values that already
//! passed them.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::styles::ScanTheme;

/// What a field accepts and how it is edited.
pub enum FieldKind {
    /// Free-typed number, range-checked on submit.
    Numeric { min: f64, max: f64, integer: bool },
    /// One of a fixed set of options, cycled with Left/Right.
    Choice { options: &'static [&'static str] },
    /// Free text (patient name). Never range-checked.
    Text,
}

/// A single form field.
pub struct FormField {
    pub label: &'static str,
    pub hint: &'static str,
    pub value: String,
    pub selected: usize,
    pub kind: FieldKind,
}

impl FormField {
    pub fn numeric(
        label: &'static str,
        hint: &'static str,
        min: f64,
        max: f64,
        integer: bool,
    ) -> Self {
        Self {
            label,
            hint,
            value: String::new(),
            selected: 0,
            kind: FieldKind::Numeric { min, max, integer },
        }
    }

    pub fn choice(label: &'static str, options: &'static [&'static str]) -> Self {
        Self {
            label,
            hint: "",
            value: String::new(),
            selected: 0,
            kind: FieldKind::Choice { options },
        }
    }

    pub fn text(label: &'static str, hint: &'static str) -> Self {
        Self {
            label,
            hint,
            value: String::new(),
            selected: 0,
            kind: FieldKind::Text,
        }
    }

    /// The value shown in the field body.
    #[must_use]
    pub fn display_value(&self) -> &str {
        match self.kind {
            FieldKind::Choice { options } => options[self.selected],
            _ => &self.value,
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self.kind {
            FieldKind::Numeric { .. } => c.is_ascii_digit() || c == '.',
            FieldKind::Text => !c.is_control(),
            FieldKind::Choice { .. } => false,
        }
    }

    /// Parse a numeric field, enforcing its range.
    ///
    /// # Errors
    /// Returns a user-facing message on empty, unparsable or out-of-range
    /// input.
    pub fn parse_numeric(&self) -> Result<f64, String> {
        let FieldKind::Numeric { min, max, integer } = self.kind else {
            return Err(format!("{} is not a numeric field", self.label));
        };

        let raw = self.value.trim();
        if raw.is_empty() {
            return Err(format!("{} is required", self.label));
        }

        let parsed: f64 = raw
            .parse()
            .map_err(|_| format!("{}: '{raw}' is not a number", self.label))?;

        if integer && parsed.fract() != 0.0 {
            return Err(format!("{} must be a whole number", self.label));
        }
        if parsed < min || parsed > max {
            return Err(format!(
                "{} must be between {} and {}",
                self.label, min, max
            ));
        }
        Ok(parsed)
    }
}

/// A focused, editable stack of fields plus the last submit error.
pub struct FormState {
    pub fields: Vec<FormField>,
    pub focused: usize,
    pub error: Option<String>,
}

impl FormState {
    #[must_use]
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            focused: 0,
            error: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.focused = if self.focused == 0 {
            self.fields.len() - 1
        } else {
            self.focused - 1
        };
    }

    pub fn input_char(&mut self, c: char) {
        let field = &mut self.fields[self.focused];
        if field.accepts(c) {
            field.value.push(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        self.fields[self.focused].value.pop();
        self.error = None;
    }

    pub fn clear_field(&mut self) {
        self.fields[self.focused].value.clear();
        self.error = None;
    }

    /// Cycle a choice field; no-op on other kinds.
    pub fn cycle(&mut self, forward: bool) {
        let field = &mut self.fields[self.focused];
        if let FieldKind::Choice { options } = field.kind {
            field.selected = if forward {
                (field.selected + 1) % options.len()
            } else if field.selected == 0 {
                options.len() - 1
            } else {
                field.selected - 1
            };
            self.error = None;
        }
    }

    /// Parse `self.fields[index]` as an integer in range.
    ///
    /// # Errors
    /// Propagates the field's range/parse error message.
    pub fn parse_u32(&self, index: usize) -> Result<u32, String> {
        // Ranges fit in u32 for every integer field on both forms.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        self.fields[index].parse_numeric().map(|v| v as u32)
    }

    /// Parse `self.fields[index]` as a float in range.
    ///
    /// # Errors
    /// Propagates the field's range/parse error message.
    pub fn parse_f64(&self, index: usize) -> Result<f64, String> {
        self.fields[index].parse_numeric()
    }

    /// Selected index of a choice field.
    #[must_use]
    pub fn choice_index(&self, index: usize) -> usize {
        self.fields[index].selected
    }

    /// True iff a yes/no choice field is set to "Yes".
    #[must_use]
    pub fn choice_yes(&self, index: usize) -> bool {
        self.fields[index].selected == 1
    }
}

/// Yes/no options, "No" first so fresh forms default to it.
pub const YES_NO: &[&str] = &["No", "Yes"];

/// Render the field stack with focus highlighting and the footer hints.
pub fn render_form(f: &mut Frame, area: Rect, state: &FormState) {
    let mut constraints: Vec<Constraint> =
        state.fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(2)); // error line
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in state.fields.iter().enumerate() {
        render_field(f, rows[i], field, i == state.focused);
    }

    let error_area = rows[state.fields.len()];
    if let Some(error) = &state.error {
        let line = Paragraph::new(Line::from(vec![
            Span::styled("  ✗ ", ScanTheme::danger()),
            Span::styled(error.clone(), ScanTheme::danger()),
        ]));
        f.render_widget(line, error_area);
    }
}

fn render_field(f: &mut Frame, area: Rect, field: &FormField, focused: bool) {
    let border_style = if focused {
        ScanTheme::border_focused()
    } else {
        ScanTheme::border()
    };

    let title_style = if focused {
        ScanTheme::focused()
    } else {
        ScanTheme::text_secondary()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", field.label), title_style));

    let mut spans = Vec::new();
    match field.kind {
        FieldKind::Choice { .. } => {
            if focused {
                spans.push(Span::styled("◂ ", ScanTheme::key_hint()));
            }
            spans.push(Span::styled(
                field.display_value().to_string(),
                ScanTheme::text(),
            ));
            if focused {
                spans.push(Span::styled(" ▸", ScanTheme::key_hint()));
            }
        }
        _ => {
            if field.value.is_empty() {
                spans.push(Span::styled(field.hint, ScanTheme::text_muted()));
            } else {
                spans.push(Span::styled(field.value.clone(), ScanTheme::text()));
            }
            if focused {
                spans.push(Span::styled("▎", ScanTheme::cursor()));
            }
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormState {
        FormState::new(vec![
            FormField::text("Name", "Full name"),
            FormField::numeric("Age", "Years", 1.0, 120.0, true),
            FormField::choice("Smoker", YES_NO),
        ])
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut state = form();
        state.prev_field();
        assert_eq!(state.focused, 2);
        state.next_field();
        assert_eq!(state.focused, 0);
    }

    #[test]
    fn test_numeric_field_rejects_letters() {
        let mut state = form();
        state.next_field();
        state.input_char('4');
        state.input_char('x');
        state.input_char('2');
        assert_eq!(state.fields[1].value, "42");
    }

    #[test]
    fn test_numeric_parse_range() {
        let mut state = form();
        state.fields[1].value = "130".to_string();
        assert!(state.parse_u32(1).is_err());
        state.fields[1].value = "65".to_string();
        assert_eq!(state.parse_u32(1).expect("parse"), 65);
    }

    #[test]
    fn test_integer_field_rejects_fraction() {
        let mut state = form();
        state.fields[1].value = "42.5".to_string();
        assert!(state.parse_u32(1).is_err());
    }

    #[test]
    fn test_empty_numeric_is_an_error() {
        let state = form();
        let err = state.parse_u32(1).expect_err("must fail");
        assert!(err.contains("required"));
    }

    #[test]
    fn test_choice_cycles_and_wraps() {
        let mut state = form();
        state.focused = 2;
        assert!(!state.choice_yes(2));
        state.cycle(true);
        assert!(state.choice_yes(2));
        state.cycle(true);
        assert!(!state.choice_yes(2));
        state.cycle(false);
        assert!(state.choice_yes(2));
    }

    #[test]
    fn test_cycle_ignores_text_fields() {
        let mut state = form();
        state.fields[0].value = "Jane".to_string();
        state.cycle(true);
        assert_eq!(state.fields[0].value, "Jane");
    }

    #[test]
    fn test_typing_clears_stale_error() {
        let mut state = form();
        state.error = Some("Age is required".to_string());
        state.input_char('J');
        assert!(state.error.is_none());
    }
}
