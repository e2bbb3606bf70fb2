//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external dependencies.
//! Feature builders map validated raw inputs to the exact column layout
//! each trained model was fit on.

mod assessment;
mod diabetes;
mod heart;

pub use assessment::{Assessment, Condition, Prediction};
pub use diabetes::{
    DiabetesFeatures, DiabetesInput, Gender, SmokingHistory, DIABETES_FEATURE_NAMES,
};
pub use heart::{
    cholesterol_category, glucose_category, HeartFeatures, HeartInput, Sex, HEART_FEATURE_NAMES,
};

/// Errors produced by domain-level computations.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Height must be strictly positive before the BMI division.
    #[error("height must be positive to derive BMI, got {height_cm} cm")]
    NonPositiveHeight { height_cm: u32 },
}
