//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and external systems (the trained model backend
//! and the report renderer).

mod model;
mod report;

pub use model::{Classifier, InferenceError, Scaler};
pub use report::{ReportContent, ReportError, ReportRenderer};
