//! Report service: Assembles report content and delegates rendering.

use crate::domain::{Assessment, Condition};
use crate::ports::{ReportContent, ReportError, ReportRenderer};

/// Service producing printable reports for completed assessments.
pub struct ReportService<R>
where
    R: ReportRenderer,
{
    renderer: R,
}

impl<R> ReportService<R>
where
    R: ReportRenderer,
{
    /// Create a new report service.
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Generate a printable report for an assessment.
    ///
    /// `inputs` is the ordered list of raw questionnaire answers, already
    /// formatted for display. An empty or whitespace patient name falls
    /// back to "Unknown" rather than failing.
    ///
    /// # Errors
    /// Returns error if rendering fails.
    pub fn generate(
        &self,
        assessment: &Assessment,
        patient_name: &str,
        inputs: Vec<(String, String)>,
    ) -> Result<Vec<u8>, ReportError> {
        let content = ReportContent {
            condition: assessment.condition.display_name().to_string(),
            patient_name: display_name(patient_name),
            inputs,
            risk_label: assessment.prediction.risk_label().to_string(),
            probability_percent: assessment.prediction.percent(),
            generated_at: assessment.created_at,
        };

        let bytes = self.renderer.render(&content)?;

        tracing::info!(
            "Report rendered: condition={}, {} bytes",
            content.condition,
            bytes.len()
        );

        Ok(bytes)
    }
}

/// Normalize a patient name for display: trim, empty falls back to
/// "Unknown".
#[must_use]
pub fn display_name(patient_name: &str) -> String {
    let trimmed = patient_name.trim();
    if trimmed.is_empty() {
        "Unknown".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Suggested file name for a saved report, e.g.
/// `Heart_Disease_Report_Jane_Doe.pdf`.
#[must_use]
pub fn report_file_name(condition: Condition, patient_name: &str) -> String {
    let condition = condition.display_name().replace(' ', "_");
    let name = display_name(patient_name).replace(' ', "_");
    format!("{condition}_Report_{name}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Prediction;

    struct FakeRenderer;

    impl ReportRenderer for FakeRenderer {
        fn render(&self, content: &ReportContent) -> Result<Vec<u8>, ReportError> {
            Ok(content.patient_name.as_bytes().to_vec())
        }
    }

    fn assessment() -> Assessment {
        Assessment::new(Condition::Diabetes, Prediction::new(1, 0.83), None)
    }

    #[test]
    fn test_empty_patient_name_falls_back_to_unknown() {
        let service = ReportService::new(FakeRenderer);
        let bytes = service
            .generate(&assessment(), "   ", vec![])
            .expect("generate");
        assert_eq!(bytes, b"Unknown");
    }

    #[test]
    fn test_patient_name_is_trimmed() {
        let service = ReportService::new(FakeRenderer);
        let bytes = service
            .generate(&assessment(), "  Jane Doe ", vec![])
            .expect("generate");
        assert_eq!(bytes, b"Jane Doe");
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name(Condition::Heart, "Jane Doe"),
            "Heart_Disease_Report_Jane_Doe.pdf"
        );
        assert_eq!(
            report_file_name(Condition::Diabetes, ""),
            "Diabetes_Report_Unknown.pdf"
        );
    }
}
