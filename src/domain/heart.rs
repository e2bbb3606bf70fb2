//! Cardiovascular risk inputs and feature-vector assembly.
//!
//! The heart model was trained on a 15-column frame: raw vitals, a derived
//! BMI, and dummy-encoded ordinals for gender, cholesterol bucket and
//! glucose bucket, each dropping its lowest category. The builder maps
//! statically to that layout; there is no dynamic encoding step to fill or
//! reorder afterwards.

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Gender options for the cardiovascular questionnaire.
///
/// The training data encodes 1 = Male, 2 = Female, so the dummy column
/// `gender_2` is set for Female. This is the opposite reference convention
/// from the diabetes schema and is intentional: both were fixed at training
/// time and cannot be unified without refitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Display label matching the questionnaire.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// All selectable options, in questionnaire order.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];
}

/// Raw cardiovascular questionnaire input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartInput {
    /// Age in years (1-120)
    pub age: u32,

    pub gender: Sex,

    /// Height in centimeters (120-220)
    pub height_cm: u32,

    /// Weight in kilograms (30-200)
    pub weight_kg: f64,

    /// Systolic blood pressure in mmHg (80-200)
    pub systolic_bp: u32,

    /// Diastolic blood pressure in mmHg (50-120)
    pub diastolic_bp: u32,

    /// Total cholesterol in mg/dL (100-400)
    pub cholesterol: u32,

    /// Blood glucose in mg/dL (50-300)
    pub glucose: u32,

    /// Smoker
    pub smoke: bool,

    /// Alcohol use
    pub alco: bool,

    /// Physically active
    pub active: bool,
}

impl HeartInput {
    /// Validate that all fields are within the questionnaire ranges.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(1..=120).contains(&self.age) {
            errors.push(format!("Age {} out of range [1, 120]", self.age));
        }
        if !(120..=220).contains(&self.height_cm) {
            errors.push(format!(
                "Height {} out of range [120, 220]",
                self.height_cm
            ));
        }
        if !(30.0..=200.0).contains(&self.weight_kg) {
            errors.push(format!(
                "Weight {} out of range [30, 200]",
                self.weight_kg
            ));
        }
        if !(80..=200).contains(&self.systolic_bp) {
            errors.push(format!(
                "Systolic BP {} out of range [80, 200]",
                self.systolic_bp
            ));
        }
        if !(50..=120).contains(&self.diastolic_bp) {
            errors.push(format!(
                "Diastolic BP {} out of range [50, 120]",
                self.diastolic_bp
            ));
        }
        if !(100..=400).contains(&self.cholesterol) {
            errors.push(format!(
                "Cholesterol {} out of range [100, 400]",
                self.cholesterol
            ));
        }
        if !(50..=300).contains(&self.glucose) {
            errors.push(format!("Glucose {} out of range [50, 300]", self.glucose));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Clinical cholesterol bucket: <200 -> 1, [200, 240) -> 2, >=240 -> 3.
///
/// These thresholds are baked into the feature contract; changing them
/// changes the model's effective semantics and must be versioned together
/// with the trained artifact.
#[must_use]
pub fn cholesterol_category(cholesterol_mgdl: u32) -> u8 {
    if cholesterol_mgdl < 200 {
        1
    } else if cholesterol_mgdl < 240 {
        2
    } else {
        3
    }
}

/// Clinical glucose bucket: <100 -> 1, [100, 126) -> 2, >=126 -> 3.
#[must_use]
pub fn glucose_category(glucose_mgdl: u32) -> u8 {
    if glucose_mgdl < 100 {
        1
    } else if glucose_mgdl < 126 {
        2
    } else {
        3
    }
}

/// Feature vector for the heart model, in training schema order.
///
/// `id` is a training-schema artifact with no semantic meaning; it is
/// always 0 at inference time but must occupy its column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartFeatures {
    pub id: f64,
    pub age: f64,
    pub height: f64,
    pub weight: f64,
    pub systolic_bp: f64,
    pub diastolic_bp: f64,
    pub smoke: f64,
    pub alco: f64,
    pub active: f64,
    pub bmi: f64,
    pub gender_2: f64,
    pub cholesterol_2: f64,
    pub cholesterol_3: f64,
    pub gluc_2: f64,
    pub gluc_3: f64,
}

/// Column names from the heart training schema, in order.
pub const HEART_FEATURE_NAMES: [&str; 15] = [
    "id",
    "age",
    "height",
    "weight",
    "systolic_bp",
    "diastolic_bp",
    "smoke",
    "alco",
    "active",
    "bmi",
    "gender_2",
    "cholesterol_2",
    "cholesterol_3",
    "gluc_2",
    "gluc_3",
];

impl HeartFeatures {
    /// Build the feature vector and the derived BMI from raw input.
    ///
    /// Returns the BMI alongside the vector so display and report code can
    /// reuse it without re-deriving.
    ///
    /// # Errors
    /// Returns `DomainError::NonPositiveHeight` when `height_cm` is 0. The
    /// entry form validates height to >= 120 so this cannot happen in
    /// normal use, but the guard keeps infinity out of the vector if the
    /// builder is reused outside the validated range.
    pub fn from_input(input: &HeartInput) -> Result<(Self, f64), DomainError> {
        if input.height_cm == 0 {
            return Err(DomainError::NonPositiveHeight {
                height_cm: input.height_cm,
            });
        }

        let height_m = f64::from(input.height_cm) / 100.0;
        let bmi = input.weight_kg / (height_m * height_m);

        let chol_cat = cholesterol_category(input.cholesterol);
        let gluc_cat = glucose_category(input.glucose);

        let features = Self {
            id: 0.0,
            age: f64::from(input.age),
            height: f64::from(input.height_cm),
            weight: input.weight_kg,
            systolic_bp: f64::from(input.systolic_bp),
            diastolic_bp: f64::from(input.diastolic_bp),
            smoke: if input.smoke { 1.0 } else { 0.0 },
            alco: if input.alco { 1.0 } else { 0.0 },
            active: if input.active { 1.0 } else { 0.0 },
            bmi,
            gender_2: if input.gender == Sex::Female { 1.0 } else { 0.0 },
            cholesterol_2: if chol_cat == 2 { 1.0 } else { 0.0 },
            cholesterol_3: if chol_cat == 3 { 1.0 } else { 0.0 },
            gluc_2: if gluc_cat == 2 { 1.0 } else { 0.0 },
            gluc_3: if gluc_cat == 3 { 1.0 } else { 0.0 },
        };

        Ok((features, bmi))
    }

    /// Convert to a vector in schema order for the scaler/model.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.id,
            self.age,
            self.height,
            self.weight,
            self.systolic_bp,
            self.diastolic_bp,
            self.smoke,
            self.alco,
            self.active,
            self.bmi,
            self.gender_2,
            self.cholesterol_2,
            self.cholesterol_3,
            self.gluc_2,
            self.gluc_3,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> HeartInput {
        HeartInput {
            age: 45,
            gender: Sex::Male,
            height_cm: 170,
            weight_kg: 70.0,
            systolic_bp: 120,
            diastolic_bp: 80,
            cholesterol: 200,
            glucose: 100,
            smoke: false,
            alco: false,
            active: true,
        }
    }

    #[test]
    fn test_fifteen_fields_in_schema_order() {
        let (features, _) = HeartFeatures::from_input(&sample_input()).expect("build");
        let vec = features.to_vec();
        assert_eq!(vec.len(), HEART_FEATURE_NAMES.len());

        assert_eq!(vec[0], 0.0); // id, schema artifact
        assert!((vec[1] - 45.0).abs() < f64::EPSILON); // age
        assert!((vec[2] - 170.0).abs() < f64::EPSILON); // height
        assert!((vec[8] - 1.0).abs() < f64::EPSILON); // active
    }

    #[test]
    fn test_bmi_derivation() {
        let (features, bmi) = HeartFeatures::from_input(&sample_input()).expect("build");
        let expected = 70.0 / (1.7 * 1.7);
        assert!((bmi - expected).abs() < 1e-9);
        assert!((features.bmi - expected).abs() < 1e-9);
    }

    #[test]
    fn test_reference_round_trip() {
        // 45yo male, 170cm/70kg, chol 200, gluc 100 baseline.
        let (features, bmi) = HeartFeatures::from_input(&sample_input()).expect("build");
        assert!((bmi - 24.22).abs() < 0.01);
        assert_eq!(features.gender_2, 0.0);
        assert_eq!(features.cholesterol_2, 1.0);
        assert_eq!(features.cholesterol_3, 0.0);
        assert_eq!(features.gluc_2, 1.0);
        assert_eq!(features.gluc_3, 0.0);
    }

    #[test]
    fn test_cholesterol_bucket_boundaries() {
        assert_eq!(cholesterol_category(199), 1);
        assert_eq!(cholesterol_category(200), 2);
        assert_eq!(cholesterol_category(239), 2);
        assert_eq!(cholesterol_category(240), 3);
    }

    #[test]
    fn test_glucose_bucket_boundaries() {
        assert_eq!(glucose_category(99), 1);
        assert_eq!(glucose_category(100), 2);
        assert_eq!(glucose_category(125), 2);
        assert_eq!(glucose_category(126), 3);
    }

    #[test]
    fn test_female_sets_gender_dummy() {
        let (features, _) = HeartFeatures::from_input(&HeartInput {
            gender: Sex::Female,
            ..sample_input()
        })
        .expect("build");
        assert_eq!(features.gender_2, 1.0);
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let err = HeartFeatures::from_input(&HeartInput {
            height_cm: 0,
            ..sample_input()
        })
        .expect_err("must fail");
        assert!(matches!(err, DomainError::NonPositiveHeight { height_cm: 0 }));
    }

    #[test]
    fn test_validation_ranges() {
        assert!(sample_input().validate().is_ok());

        let invalid = HeartInput {
            height_cm: 119,
            systolic_bp: 201,
            ..sample_input()
        };
        let errors = invalid.validate().expect_err("must fail");
        assert_eq!(errors.len(), 2);
    }
}
