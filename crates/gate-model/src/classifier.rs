//! The trained classifier artifact.

use serde::{Deserialize, Serialize};

use crate::error::{GateError, Result};

/// A serialized logistic regression classifier produced by the training
/// job. The gate never predicts locally: the artifact is uploaded to the
/// validation service, which drives the probability predictions itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    /// Feature names in training order.
    pub feature_names: Vec<String>,
    /// Class labels in the order probabilities are emitted.
    pub class_labels: Vec<String>,
    /// Coefficient matrix, one row per decision boundary.
    pub coefficients: Vec<Vec<f64>>,
    /// Intercept per decision boundary.
    pub intercepts: Vec<f64>,
}

impl ClassifierArtifact {
    /// Class labels as owned strings, in probability order.
    #[must_use]
    pub fn class_labels(&self) -> &[String] {
        &self.class_labels
    }

    /// Check that the artifact's shapes agree.
    ///
    /// A binary model carries a single coefficient row for its two labels;
    /// a multiclass model carries one row per label. Every row must have
    /// one coefficient per feature and one intercept.
    pub fn validate(&self) -> Result<()> {
        if self.class_labels.len() < 2 {
            return Err(GateError::InvalidArtifact(format!(
                "expected at least 2 class labels, found {}",
                self.class_labels.len()
            )));
        }
        if self.coefficients.len() != self.intercepts.len() {
            return Err(GateError::InvalidArtifact(format!(
                "{} coefficient rows but {} intercepts",
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }
        let expected_rows = if self.class_labels.len() == 2 {
            1
        } else {
            self.class_labels.len()
        };
        if self.coefficients.len() != expected_rows {
            return Err(GateError::InvalidArtifact(format!(
                "expected {} coefficient rows for {} labels, found {}",
                expected_rows,
                self.class_labels.len(),
                self.coefficients.len()
            )));
        }
        for (index, row) in self.coefficients.iter().enumerate() {
            if row.len() != self.feature_names.len() {
                return Err(GateError::InvalidArtifact(format!(
                    "coefficient row {index} has {} entries for {} features",
                    row.len(),
                    self.feature_names.len()
                )));
            }
        }
        Ok(())
    }
}
