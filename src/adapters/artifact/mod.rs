//! Artifact adapter: Pre-fit scaler and classifier pairs loaded from disk.
//!
//! The training pipeline exports each fitted estimator as a JSON file
//! carrying its feature names and parameters. Four artifacts make up a
//! deployment: a scaler and a logistic classifier per condition. They are
//! loaded once at startup and treated as read-only for the life of the
//! process; there is no hot reload, no versioning and no checksum.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::ports::{Classifier, InferenceError, Scaler};

/// Artifact file names within the models directory.
pub const DIABETES_MODEL_FILE: &str = "diabetes_model.json";
pub const DIABETES_SCALER_FILE: &str = "diabetes_scaler.json";
pub const HEART_MODEL_FILE: &str = "heart_model.json";
pub const HEART_SCALER_FILE: &str = "heart_scaler.json";

/// Errors while loading a persisted artifact.
///
/// This is the only place deliberate error-kind discrimination occurs:
/// a missing file and an unreadable/corrupt file surface differently so the
/// operator knows whether to install artifacts or replace them.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactLoadError {
    #[error("Missing artifact: {path}")]
    Missing { path: PathBuf },

    #[error("Corrupted artifact {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

/// Standardization parameters fitted at training time.
///
/// Transform is positional: value `i` is centered with `mean[i]` and
/// divided by `scale[i]`. `feature_names` documents the fit-time column
/// order the caller must reproduce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Shape sanity checks applied at load time.
    fn validate(&self) -> Result<(), String> {
        let n = self.feature_names.len();
        if n == 0 {
            return Err("scaler has no features".into());
        }
        if self.mean.len() != n || self.scale.len() != n {
            return Err(format!(
                "scaler parameter lengths do not match feature_names length {n}"
            ));
        }
        if self.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
            return Err("scaler contains zero or non-finite scale entries".into());
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err("scaler contains non-finite mean entries".into());
        }
        Ok(())
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if features.len() != self.mean.len() {
            return Err(InferenceError::FeatureCount {
                expected: self.mean.len(),
                got: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}

/// Logistic regression parameters fitted at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearClassifier {
    /// Shape sanity checks applied at load time.
    fn validate(&self) -> Result<(), String> {
        let n = self.feature_names.len();
        if n == 0 {
            return Err("classifier has no features".into());
        }
        if self.coefficients.len() != n {
            return Err(format!(
                "coefficient length {} does not match feature_names length {n}",
                self.coefficients.len()
            ));
        }
        if self.coefficients.iter().any(|c| !c.is_finite()) || !self.intercept.is_finite() {
            return Err("classifier contains non-finite parameters".into());
        }
        Ok(())
    }

    /// Linear decision function over a scaled feature vector.
    fn decision(&self, features: &[f64]) -> Result<f64, InferenceError> {
        if features.len() != self.coefficients.len() {
            return Err(InferenceError::FeatureCount {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }

        let dot: f64 = features
            .iter()
            .zip(self.coefficients.iter())
            .map(|(x, c)| x * c)
            .sum();
        let value = dot + self.intercept;

        if !value.is_finite() {
            return Err(InferenceError::NonFiniteOutput);
        }
        Ok(value)
    }
}

/// Logistic sigmoid: 1 / (1 + exp(-x)).
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl Classifier for LinearClassifier {
    fn predict(&self, features: &[f64]) -> Result<u8, InferenceError> {
        let probability = self.predict_proba(features)?;
        Ok(u8::from(probability >= 0.5))
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64, InferenceError> {
        let probability = sigmoid(self.decision(features)?);
        if !probability.is_finite() {
            return Err(InferenceError::NonFiniteOutput);
        }
        Ok(probability)
    }
}

/// The four pre-fit artifacts a deployment needs.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub diabetes_model: LinearClassifier,
    pub diabetes_scaler: StandardScaler,
    pub heart_model: LinearClassifier,
    pub heart_scaler: StandardScaler,
}

impl ModelArtifacts {
    /// Load all four artifacts from a models directory.
    ///
    /// # Errors
    /// Returns `ArtifactLoadError::Missing` for an absent file and
    /// `ArtifactLoadError::Corrupt` for anything unreadable, unparsable or
    /// shape-inconsistent.
    pub fn load(models_dir: &Path) -> Result<Self, ArtifactLoadError> {
        let diabetes_model: LinearClassifier =
            load_artifact(&models_dir.join(DIABETES_MODEL_FILE))?;
        let diabetes_scaler: StandardScaler =
            load_artifact(&models_dir.join(DIABETES_SCALER_FILE))?;
        let heart_model: LinearClassifier = load_artifact(&models_dir.join(HEART_MODEL_FILE))?;
        let heart_scaler: StandardScaler = load_artifact(&models_dir.join(HEART_SCALER_FILE))?;

        check_shape(
            diabetes_model.validate(),
            models_dir.join(DIABETES_MODEL_FILE),
        )?;
        check_shape(
            diabetes_scaler.validate(),
            models_dir.join(DIABETES_SCALER_FILE),
        )?;
        check_shape(heart_model.validate(), models_dir.join(HEART_MODEL_FILE))?;
        check_shape(heart_scaler.validate(), models_dir.join(HEART_SCALER_FILE))?;

        // A scaler/classifier pair must agree on width or every request
        // would fail; catch the misdeployment at startup.
        if diabetes_model.coefficients.len() != diabetes_scaler.mean.len() {
            return Err(ArtifactLoadError::Corrupt {
                path: models_dir.join(DIABETES_MODEL_FILE),
                reason: format!(
                    "classifier width {} does not match scaler width {}",
                    diabetes_model.coefficients.len(),
                    diabetes_scaler.mean.len()
                ),
            });
        }
        if heart_model.coefficients.len() != heart_scaler.mean.len() {
            return Err(ArtifactLoadError::Corrupt {
                path: models_dir.join(HEART_MODEL_FILE),
                reason: format!(
                    "classifier width {} does not match scaler width {}",
                    heart_model.coefficients.len(),
                    heart_scaler.mean.len()
                ),
            });
        }

        tracing::info!(
            "Loaded artifacts from {:?} (diabetes: {} features, heart: {} features)",
            models_dir,
            diabetes_model.coefficients.len(),
            heart_model.coefficients.len()
        );

        Ok(Self {
            diabetes_model,
            diabetes_scaler,
            heart_model,
            heart_scaler,
        })
    }
}

fn check_shape(result: Result<(), String>, path: PathBuf) -> Result<(), ArtifactLoadError> {
    result.map_err(|reason| ArtifactLoadError::Corrupt { path, reason })
}

/// Load a single JSON artifact with error-kind discrimination.
fn load_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactLoadError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ArtifactLoadError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            ArtifactLoadError::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|e| ArtifactLoadError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
