//! Classifier artifact loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use gate_model::ClassifierArtifact;

use crate::error::{ArtifactError, Result};

/// Load and consistency-check a serialized classifier.
pub fn load_classifier(path: &Path) -> Result<ClassifierArtifact> {
    let file = File::open(path).map_err(|e| ArtifactError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let artifact: ClassifierArtifact = bincode::deserialize_from(BufReader::new(file))
        .map_err(|e| ArtifactError::ClassifierDecode {
            path: path.to_path_buf(),
            source: e,
        })?;
    artifact.validate()?;
    debug!(
        features = artifact.feature_names.len(),
        labels = artifact.class_labels.len(),
        "loaded classifier"
    );
    Ok(artifact)
}
