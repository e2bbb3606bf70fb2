//! Adapters layer: Concrete implementations of ports.
//!
//! These modules contain the actual integration with external formats and
//! libraries:
//! - `artifact`: JSON-exported scaler/classifier artifacts from the
//!   training pipeline
//! - `pdf`: printpdf report renderer
//! - `sanitize`: PII filtering for logs

pub mod artifact;
pub mod pdf;
pub mod sanitize;

pub use artifact::{ArtifactLoadError, LinearClassifier, ModelArtifacts, StandardScaler};
pub use pdf::PdfReportRenderer;
