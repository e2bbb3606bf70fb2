//! Assessment result types.
//!
//! Represents the normalized output of a single risk scan.

use serde::{Deserialize, Serialize};

/// Screened condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Diabetes,
    Heart,
}

impl Condition {
    /// Human-readable condition name, also used in report headers.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes",
            Self::Heart => "Heart Disease",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Normalized model output: a plain binary label and a positive-class
/// probability.
///
/// This is the stable contract the presentation layer and the report
/// renderer depend on, regardless of what scalar types the model backend
/// produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Prediction {
    /// Binary label (0 = low risk, 1 = high risk)
    pub label: u8,

    /// Positive-class probability in [0, 1]
    pub probability: f64,
}

impl Prediction {
    /// Normalize raw backend outputs into the contract: label coerced to
    /// 0/1, probability clamped to [0, 1].
    #[must_use]
    pub fn new(label: u8, probability: f64) -> Self {
        Self {
            label: u8::from(label >= 1),
            probability: probability.clamp(0.0, 1.0),
        }
    }

    /// Whether the positive class was predicted.
    #[must_use]
    pub fn is_high_risk(&self) -> bool {
        self.label == 1
    }

    /// Display label used on the results screen and in reports.
    #[must_use]
    pub fn risk_label(&self) -> &'static str {
        if self.is_high_risk() {
            "High Risk"
        } else {
            "Low Risk"
        }
    }

    /// Probability as a percentage (0-100).
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.probability * 100.0
    }
}

/// Complete result of one risk scan.
///
/// Constructed fresh per scan; never cached or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub condition: Condition,

    pub prediction: Prediction,

    /// Derived BMI, present for the heart domain only.
    pub bmi: Option<f64>,

    /// Timestamp of the scan
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Assessment {
    /// Create a new assessment.
    #[must_use]
    pub fn new(condition: Condition, prediction: Prediction, bmi: Option<f64>) -> Self {
        Self {
            condition,
            prediction,
            bmi,
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_coercion() {
        assert_eq!(Prediction::new(0, 0.2).label, 0);
        assert_eq!(Prediction::new(1, 0.8).label, 1);
        // Backends that report the class as a count-like scalar still
        // collapse to the binary contract.
        assert_eq!(Prediction::new(3, 0.8).label, 1);
    }

    #[test]
    fn test_probability_clamped() {
        assert_eq!(Prediction::new(1, 1.2).probability, 1.0);
        assert_eq!(Prediction::new(0, -0.1).probability, 0.0);
    }

    #[test]
    fn test_risk_label() {
        assert_eq!(Prediction::new(1, 0.9).risk_label(), "High Risk");
        assert_eq!(Prediction::new(0, 0.1).risk_label(), "Low Risk");
    }

    #[test]
    fn test_assessment_carries_bmi_for_heart() {
        let assessment = Assessment::new(Condition::Heart, Prediction::new(0, 0.1), Some(24.2));
        assert_eq!(assessment.condition.display_name(), "Heart Disease");
        assert!(assessment.bmi.is_some());
    }
}
