//! # Riskscan
//!
//! Terminal dashboard for diabetes and cardiovascular risk screening.
//!
//! This crate provides:
//! - Deterministic feature-vector assembly matching the trained model schemas
//! - Inference against pre-fit scaler + classifier artifacts loaded from disk
//! - Printable PDF reports for completed assessments
//! - Terminal UI for local-only use
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (inputs, feature vectors, assessments)
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (JSON artifacts, printpdf, log sanitizer)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{Assessment, Condition, Prediction};

/// Result type for Riskscan operations
pub type Result<T> = std::result::Result<T, RiskscanError>;

/// Main error type for Riskscan
#[derive(Debug, thiserror::Error)]
pub enum RiskscanError {
    #[error("Artifact loading failed: {0}")]
    Artifact(#[from] adapters::ArtifactLoadError),

    #[error("Inference failed: {0}")]
    Inference(#[from] ports::InferenceError),

    #[error("Invalid patient data: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("Report generation failed: {0}")]
    Report(#[from] ports::ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
