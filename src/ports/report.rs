//! Report renderer port.

use serde::{Deserialize, Serialize};

/// Errors produced while rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("rendering failed: {0}")]
    Render(String),
}

/// Everything a renderer needs to lay out one printable report.
///
/// `inputs` is an ordered list of display label/value pairs; it carries the
/// raw questionnaire answers for display only and plays no role in
/// inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportContent {
    /// Condition display name (e.g. "Heart Disease")
    pub condition: String,

    /// Normalized patient display name (never empty)
    pub patient_name: String,

    /// Ordered label -> display value pairs of the raw inputs
    pub inputs: Vec<(String, String)>,

    /// "High Risk" or "Low Risk"
    pub risk_label: String,

    /// Positive-class probability as a percentage (0-100)
    pub probability_percent: f64,

    /// Generation timestamp
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Trait for turning report content into a printable document.
pub trait ReportRenderer: Send + Sync {
    /// Render the report as a byte sequence (e.g. a PDF file).
    ///
    /// # Errors
    /// Returns `ReportError::Render` if layout or serialization fails.
    fn render(&self, content: &ReportContent) -> Result<Vec<u8>, ReportError>;
}
