//! Diabetes risk inputs and feature-vector assembly.
//!
//! The feature layout reproduces the training-time schema of the diabetes
//! model exactly: 13 columns, fixed order, gender dummy-encoded with
//! "Female" as the dropped reference and smoking history one-hot encoded
//! exhaustively (all five categories present, exactly one set).

use serde::{Deserialize, Serialize};

/// Gender options for the diabetes questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Gender {
    /// Display label matching the questionnaire.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Other => "Other",
        }
    }

    /// All selectable options, in questionnaire order.
    pub const ALL: [Gender; 3] = [Gender::Female, Gender::Male, Gender::Other];
}

/// Smoking history categories from the training dataset.
///
/// The dataset distinguishes "ever" (smoked at some point, status unknown)
/// from "not current" (smoked, verified stopped); both must round-trip
/// through their own indicator column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingHistory {
    Never,
    Former,
    Ever,
    Current,
    NotCurrent,
}

impl SmokingHistory {
    /// Display label matching the dataset category names.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Former => "former",
            Self::Ever => "ever",
            Self::Current => "current",
            Self::NotCurrent => "not current",
        }
    }

    /// All selectable options, in questionnaire order.
    pub const ALL: [SmokingHistory; 5] = [
        SmokingHistory::Never,
        SmokingHistory::Former,
        SmokingHistory::Ever,
        SmokingHistory::Current,
        SmokingHistory::NotCurrent,
    ];
}

/// Raw diabetes questionnaire input.
///
/// Ranges are enforced by [`validate`](Self::validate), which the entry form
/// calls before building features. The feature builder itself performs no
/// bounds checking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiabetesInput {
    /// Age in years (1-120)
    pub age: u32,

    /// Body mass index in kg/m^2 (10.0-60.0)
    pub bmi: f64,

    /// Hemoglobin A1c percentage (3.0-15.0)
    pub hba1c: f64,

    /// Fasting blood glucose in mg/dL (50-300)
    pub glucose: u32,

    /// Diagnosed hypertension
    pub hypertension: bool,

    /// History of heart disease
    pub heart_disease: bool,

    pub gender: Gender,

    pub smoking: SmokingHistory,
}

impl DiabetesInput {
    /// Validate that all fields are within the questionnaire ranges.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(1..=120).contains(&self.age) {
            errors.push(format!("Age {} out of range [1, 120]", self.age));
        }
        if !(10.0..=60.0).contains(&self.bmi) {
            errors.push(format!("BMI {} out of range [10.0, 60.0]", self.bmi));
        }
        if !(3.0..=15.0).contains(&self.hba1c) {
            errors.push(format!("HbA1c {} out of range [3.0, 15.0]", self.hba1c));
        }
        if !(50..=300).contains(&self.glucose) {
            errors.push(format!(
                "Blood glucose {} out of range [50, 300]",
                self.glucose
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Feature vector for the diabetes model, in training schema order.
///
/// Column order and names must match the fitted scaler exactly: the scaler
/// transform is positional and performs no name or shape validation of its
/// own, so a reordered vector produces silently wrong results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiabetesFeatures {
    pub age: f64,
    pub hypertension: f64,
    pub heart_disease: f64,
    pub bmi: f64,
    pub hba1c_level: f64,
    pub blood_glucose_level: f64,
    pub gender_male: f64,
    pub gender_other: f64,
    pub smoking_current: f64,
    pub smoking_ever: f64,
    pub smoking_former: f64,
    pub smoking_never: f64,
    pub smoking_not_current: f64,
}

/// Column names from the diabetes training schema, in order.
///
/// The final name really does contain a space; it is how the upstream
/// dummy-encoding labelled the "not current" category at fit time.
pub const DIABETES_FEATURE_NAMES: [&str; 13] = [
    "age",
    "hypertension",
    "heart_disease",
    "bmi",
    "HbA1c_level",
    "blood_glucose_level",
    "gender_Male",
    "gender_Other",
    "smoking_history_current",
    "smoking_history_ever",
    "smoking_history_former",
    "smoking_history_never",
    "smoking_history_not current",
];

impl DiabetesFeatures {
    /// Build the feature vector from raw input.
    ///
    /// Pure and infallible: encoding is a static mapping from the typed
    /// input to fixed positions. Gender drops the "Female" reference
    /// (implied when both dummies are 0); smoking keeps all five columns
    /// because the model was fit with every category present.
    #[must_use]
    pub fn from_input(input: &DiabetesInput) -> Self {
        Self {
            age: f64::from(input.age),
            hypertension: if input.hypertension { 1.0 } else { 0.0 },
            heart_disease: if input.heart_disease { 1.0 } else { 0.0 },
            bmi: input.bmi,
            hba1c_level: input.hba1c,
            blood_glucose_level: f64::from(input.glucose),
            gender_male: if input.gender == Gender::Male { 1.0 } else { 0.0 },
            gender_other: if input.gender == Gender::Other { 1.0 } else { 0.0 },
            smoking_current: if input.smoking == SmokingHistory::Current { 1.0 } else { 0.0 },
            smoking_ever: if input.smoking == SmokingHistory::Ever { 1.0 } else { 0.0 },
            smoking_former: if input.smoking == SmokingHistory::Former { 1.0 } else { 0.0 },
            smoking_never: if input.smoking == SmokingHistory::Never { 1.0 } else { 0.0 },
            smoking_not_current: if input.smoking == SmokingHistory::NotCurrent {
                1.0
            } else {
                0.0
            },
        }
    }

    /// Convert to a vector in schema order for the scaler/model.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.age,
            self.hypertension,
            self.heart_disease,
            self.bmi,
            self.hba1c_level,
            self.blood_glucose_level,
            self.gender_male,
            self.gender_other,
            self.smoking_current,
            self.smoking_ever,
            self.smoking_former,
            self.smoking_never,
            self.smoking_not_current,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> DiabetesInput {
        DiabetesInput {
            age: 30,
            bmi: 25.0,
            hba1c: 5.5,
            glucose: 100,
            hypertension: false,
            heart_disease: false,
            gender: Gender::Female,
            smoking: SmokingHistory::Never,
        }
    }

    #[test]
    fn test_thirteen_fields_in_schema_order() {
        let features = DiabetesFeatures::from_input(&sample_input());
        let vec = features.to_vec();
        assert_eq!(vec.len(), DIABETES_FEATURE_NAMES.len());

        assert!((vec[0] - 30.0).abs() < f64::EPSILON); // age
        assert!((vec[3] - 25.0).abs() < f64::EPSILON); // bmi
        assert!((vec[4] - 5.5).abs() < f64::EPSILON); // HbA1c_level
        assert!((vec[5] - 100.0).abs() < f64::EPSILON); // blood_glucose_level
    }

    #[test]
    fn test_exactly_one_smoking_flag_set() {
        for smoking in SmokingHistory::ALL {
            let input = DiabetesInput {
                smoking,
                ..sample_input()
            };
            let vec = DiabetesFeatures::from_input(&input).to_vec();
            let flags = &vec[8..13];
            let ones = flags.iter().filter(|&&v| v == 1.0).count();
            let zeros = flags.iter().filter(|&&v| v == 0.0).count();
            assert_eq!(ones, 1, "{smoking:?} must set exactly one flag");
            assert_eq!(zeros, 4);
        }
    }

    #[test]
    fn test_gender_drops_female_reference() {
        let female = DiabetesFeatures::from_input(&sample_input());
        assert_eq!(female.gender_male, 0.0);
        assert_eq!(female.gender_other, 0.0);

        let male = DiabetesFeatures::from_input(&DiabetesInput {
            gender: Gender::Male,
            ..sample_input()
        });
        assert_eq!(male.gender_male, 1.0);
        assert_eq!(male.gender_other, 0.0);

        let other = DiabetesFeatures::from_input(&DiabetesInput {
            gender: Gender::Other,
            ..sample_input()
        });
        assert_eq!(other.gender_male, 0.0);
        assert_eq!(other.gender_other, 1.0);
    }

    #[test]
    fn test_yes_no_encoding() {
        let features = DiabetesFeatures::from_input(&DiabetesInput {
            hypertension: true,
            heart_disease: false,
            ..sample_input()
        });
        assert_eq!(features.hypertension, 1.0);
        assert_eq!(features.heart_disease, 0.0);
    }

    #[test]
    fn test_validation_ranges() {
        assert!(sample_input().validate().is_ok());

        let invalid = DiabetesInput {
            age: 0,
            bmi: 9.9,
            ..sample_input()
        };
        let errors = invalid.validate().expect_err("must fail");
        assert_eq!(errors.len(), 2);
    }
}
