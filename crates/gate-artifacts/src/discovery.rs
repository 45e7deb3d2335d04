//! Model version discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ArtifactError, Result};

/// File name of the serialized classifier inside a version directory.
pub const CLASSIFIER_FILE: &str = "logistic_regression.model";

/// File name of the zip-compressed CSV test dataset.
pub const DATASET_FILE: &str = "test_data.zip";

/// File name of the persisted test results, written on the verified path.
pub const RESULTS_FILE: &str = "Giskard_tests.json";

/// A resolved trained-model version directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelVersion {
    /// Version name, the directory name set by the training job (a date
    /// string in practice).
    pub name: String,
    /// Absolute or caller-relative path of the version directory.
    pub dir: PathBuf,
}

impl ModelVersion {
    /// Path of the serialized classifier.
    #[must_use]
    pub fn classifier_path(&self) -> PathBuf {
        self.dir.join(CLASSIFIER_FILE)
    }

    /// Path of the test dataset archive.
    #[must_use]
    pub fn dataset_path(&self) -> PathBuf {
        self.dir.join(DATASET_FILE)
    }

    /// Path the test results are persisted to when the model is verified.
    #[must_use]
    pub fn results_path(&self) -> PathBuf {
        self.dir.join(RESULTS_FILE)
    }
}

/// Resolve the newest model version under the model root.
///
/// Version directories are named by date, so the lexicographically greatest
/// name is the newest. Sorting makes the selection deterministic regardless
/// of directory listing order; non-directories are ignored.
pub fn latest_version(model_root: &Path) -> Result<ModelVersion> {
    if !model_root.is_dir() {
        return Err(ArtifactError::RootNotFound {
            path: model_root.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(model_root).map_err(|e| ArtifactError::RootRead {
        path: model_root.to_path_buf(),
        source: e,
    })?;

    let mut versions = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| ArtifactError::RootRead {
            path: model_root.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            versions.push((name.to_string(), path));
        }
    }

    versions.sort_by(|a, b| a.0.cmp(&b.0));

    let (name, dir) = versions.pop().ok_or_else(|| ArtifactError::NoVersions {
        path: model_root.to_path_buf(),
    })?;

    debug!(version = %name, candidates = versions.len() + 1, "resolved model version");

    Ok(ModelVersion { name, dir })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_latest_version_picks_greatest_name() {
        let root = TempDir::new().unwrap();
        for name in ["2024-01-10", "2024-03-02", "2024-02-28"] {
            std::fs::create_dir(root.path().join(name)).unwrap();
        }
        // Stray files are ignored
        std::fs::write(root.path().join("notes.txt"), "x").unwrap();

        let version = latest_version(root.path()).unwrap();
        assert_eq!(version.name, "2024-03-02");
        assert_eq!(version.dir, root.path().join("2024-03-02"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("nope");
        let error = latest_version(&missing).unwrap_err();
        assert!(matches!(error, ArtifactError::RootNotFound { .. }));
    }

    #[test]
    fn test_empty_root_is_an_error() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("only_a_file"), "x").unwrap();
        let error = latest_version(root.path()).unwrap_err();
        assert!(matches!(error, ArtifactError::NoVersions { .. }));
    }

    #[test]
    fn test_version_paths() {
        let version = ModelVersion {
            name: "2024-03-02".to_string(),
            dir: PathBuf::from("trained_model/2024-03-02"),
        };
        assert!(version.classifier_path().ends_with(CLASSIFIER_FILE));
        assert!(version.dataset_path().ends_with(DATASET_FILE));
        assert!(version.results_path().ends_with(RESULTS_FILE));
    }
}
