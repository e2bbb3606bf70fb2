//! Risk assessment service: Orchestrates feature assembly and inference.
//!
//! The pipeline per scan is: build features, scale, predict, normalize the
//! output contract. A failure at any step is fatal for that scan; there is
//! no retry, no fallback model and no partial result.

use crate::domain::{
    Assessment, Condition, DiabetesFeatures, DiabetesInput, HeartFeatures, HeartInput, Prediction,
};
use crate::ports::{Classifier, InferenceError, Scaler};
use crate::RiskscanError;

/// One pre-fit scaler/classifier pair.
///
/// Both halves were fit on the same column layout; the caller supplies the
/// feature vector in exactly that order (see the domain builders).
pub struct Predictor<S, C>
where
    S: Scaler,
    C: Classifier,
{
    scaler: S,
    model: C,
}

impl<S, C> Predictor<S, C>
where
    S: Scaler,
    C: Classifier,
{
    /// Create a new predictor from a fitted pair.
    pub fn new(scaler: S, model: C) -> Self {
        Self { scaler, model }
    }

    /// Scale the feature vector and run inference.
    ///
    /// The output contract is normalized here: label coerced to 0/1 and
    /// probability clamped to [0, 1], so downstream display and report code
    /// never special-cases backend scalar types.
    ///
    /// # Errors
    /// Propagates any transform/shape error from the backend unchanged.
    pub fn predict(&self, features: &[f64]) -> Result<Prediction, InferenceError> {
        let scaled = self.scaler.transform(features)?;
        let label = self.model.predict(&scaled)?;
        let probability = self.model.predict_proba(&scaled)?;
        Ok(Prediction::new(label, probability))
    }
}

/// Service holding the two condition predictors.
///
/// Dependencies are injected at construction (no global artifact state),
/// so tests can substitute fakes behind the `Scaler`/`Classifier` ports.
pub struct RiskService<S, C>
where
    S: Scaler,
    C: Classifier,
{
    diabetes: Predictor<S, C>,
    heart: Predictor<S, C>,
}

impl<S, C> RiskService<S, C>
where
    S: Scaler,
    C: Classifier,
{
    /// Create a new risk service from the two fitted pairs.
    pub fn new(diabetes: Predictor<S, C>, heart: Predictor<S, C>) -> Self {
        Self { diabetes, heart }
    }

    /// Run a diabetes risk scan.
    ///
    /// # Errors
    /// Returns error if the scaler or model rejects the vector.
    pub fn assess_diabetes(&self, input: &DiabetesInput) -> Result<Assessment, RiskscanError> {
        let features = DiabetesFeatures::from_input(input);
        let prediction = self.diabetes.predict(&features.to_vec())?;

        tracing::info!(
            "Diabetes scan complete: label={}, probability={:.4}",
            prediction.label,
            prediction.probability
        );

        Ok(Assessment::new(Condition::Diabetes, prediction, None))
    }

    /// Run a cardiovascular risk scan.
    ///
    /// The derived BMI is carried on the assessment for display and report
    /// use; it is never re-derived downstream.
    ///
    /// # Errors
    /// Returns error on a non-positive height or if the scaler or model
    /// rejects the vector.
    pub fn assess_heart(&self, input: &HeartInput) -> Result<Assessment, RiskscanError> {
        let (features, bmi) = HeartFeatures::from_input(input)?;
        let prediction = self.heart.predict(&features.to_vec())?;

        tracing::info!(
            "Heart scan complete: label={}, probability={:.4}, bmi={:.1}",
            prediction.label,
            prediction.probability,
            bmi
        );

        Ok(Assessment::new(Condition::Heart, prediction, Some(bmi)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, Sex, SmokingHistory};

    /// Pass-through scaler that records the expected width.
    struct FakeScaler {
        expected: usize,
    }

    impl Scaler for FakeScaler {
        fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
            if features.len() != self.expected {
                return Err(InferenceError::FeatureCount {
                    expected: self.expected,
                    got: features.len(),
                });
            }
            Ok(features.to_vec())
        }
    }

    /// Classifier returning canned outputs, including out-of-contract ones.
    struct FakeClassifier {
        label: u8,
        probability: f64,
    }

    impl Classifier for FakeClassifier {
        fn predict(&self, _features: &[f64]) -> Result<u8, InferenceError> {
            Ok(self.label)
        }

        fn predict_proba(&self, _features: &[f64]) -> Result<f64, InferenceError> {
            Ok(self.probability)
        }
    }

    fn service(label: u8, probability: f64) -> RiskService<FakeScaler, FakeClassifier> {
        RiskService::new(
            Predictor::new(
                FakeScaler { expected: 13 },
                FakeClassifier { label, probability },
            ),
            Predictor::new(
                FakeScaler { expected: 15 },
                FakeClassifier { label, probability },
            ),
        )
    }

    fn diabetes_input() -> DiabetesInput {
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

    fn heart_input() -> HeartInput {
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
    fn test_diabetes_assessment_contract() {
        let assessment = service(1, 0.8)
            .assess_diabetes(&diabetes_input())
            .expect("assess");

        assert_eq!(assessment.condition, Condition::Diabetes);
        assert_eq!(assessment.prediction.label, 1);
        assert!((assessment.prediction.probability - 0.8).abs() < f64::EPSILON);
        assert!(assessment.bmi.is_none());
    }

    #[test]
    fn test_heart_assessment_carries_bmi() {
        let assessment = service(0, 0.2).assess_heart(&heart_input()).expect("assess");

        assert_eq!(assessment.condition, Condition::Heart);
        let bmi = assessment.bmi.expect("bmi");
        assert!((bmi - 70.0 / (1.7 * 1.7)).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_contract_backend_outputs_are_normalized() {
        let assessment = service(2, 1.5)
            .assess_diabetes(&diabetes_input())
            .expect("assess");

        assert_eq!(assessment.prediction.label, 1);
        assert!((assessment.prediction.probability - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shape_mismatch_is_fatal() {
        // Heart predictor wired to the diabetes width: every scan fails.
        let service = RiskService::new(
            Predictor::new(
                FakeScaler { expected: 13 },
                FakeClassifier {
                    label: 0,
                    probability: 0.1,
                },
            ),
            Predictor::new(
                FakeScaler { expected: 13 },
                FakeClassifier {
                    label: 0,
                    probability: 0.1,
                },
            ),
        );

        let err = service.assess_heart(&heart_input()).expect_err("must fail");
        assert!(matches!(err, RiskscanError::Inference(_)));
    }
}
