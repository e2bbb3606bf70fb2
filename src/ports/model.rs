//! Model ports: Traits for the pre-fit scaler and classifier.
//!
//! These traits abstract the trained ML backend from the application logic.
//! The core never depends on a specific model implementation; any backend
//! that can transform a feature vector and produce a label plus a
//! positive-class probability fits behind them.

/// Errors produced by the scaler or classifier.
///
/// All of these are fatal for the request that triggered them: there is no
/// retry, no fallback model and no default prediction.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// The supplied vector does not match the fitted schema width.
    #[error("feature count mismatch: expected {expected}, got {got}")]
    FeatureCount { expected: usize, got: usize },

    /// The backend produced NaN or infinity.
    #[error("model produced a non-finite output")]
    NonFiniteOutput,
}

/// A fitted feature transform applied before inference.
///
/// Parameters were fixed at training time; the transform is positional, so
/// the caller must supply values in the exact fit-time column order.
pub trait Scaler: Send + Sync {
    /// Transform a raw feature vector into model space.
    ///
    /// # Errors
    /// Returns `InferenceError::FeatureCount` on a width mismatch.
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError>;
}

/// A trained binary classifier.
pub trait Classifier: Send + Sync {
    /// Predict the class label for a single scaled feature vector.
    ///
    /// # Errors
    /// Returns an error on shape mismatch or non-finite output.
    fn predict(&self, features: &[f64]) -> Result<u8, InferenceError>;

    /// Predict the positive-class probability for a single scaled feature
    /// vector.
    ///
    /// # Errors
    /// Returns an error on shape mismatch or non-finite output.
    fn predict_proba(&self, features: &[f64]) -> Result<f64, InferenceError>;
}
