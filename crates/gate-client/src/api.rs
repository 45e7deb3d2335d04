//! Validation service API surface.

use serde::{Deserialize, Serialize};
use tracing::info;

use gate_model::TestRecord;

use crate::error::{ClientError, Result};

/// A remote project handle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project key used in API paths.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Optional description shown in the service UI.
    #[serde(default)]
    pub description: Option<String>,
}

/// A server-resident test suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSuite {
    /// Suite identifier.
    pub id: u64,
    /// Optional suite name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Everything the service needs to register a model with its test dataset.
#[derive(Debug, Clone)]
pub struct ModelUpload {
    /// Serialized classifier bytes, sent hex-encoded.
    pub model_bytes: Vec<u8>,
    /// Model type, `"classification"` here.
    pub model_type: String,
    /// The test dataset as CSV text.
    pub dataset_csv: String,
    /// Column name to semantic kind, in declared order.
    pub column_types: Vec<(String, String)>,
    /// Ground-truth column name.
    pub target: String,
    /// Feature names in training order.
    pub feature_names: Vec<String>,
    /// Classification labels in probability order.
    pub classification_labels: Vec<String>,
    /// Model display name (the version string).
    pub model_name: String,
    /// Dataset display name.
    pub dataset_name: String,
}

/// Identifiers returned by a successful upload, used as handles for the
/// suite execution and not retained beyond the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub model_id: String,
    pub dataset_id: String,
}

/// Operations the gate performs against the validation service.
///
/// The HTTP client implements this; end-to-end tests drive the pipeline
/// through a stub instead.
pub trait ValidationApi {
    /// Create a project. Fails with [`ClientError::ProjectExists`] when the
    /// key is already taken.
    fn create_project(&self, key: &str, name: &str, description: &str) -> Result<Project>;

    /// Fetch an existing project by key.
    fn get_project(&self, key: &str) -> Result<Project>;

    /// Upload the model and its test dataset with schema metadata.
    fn upload_model_and_dataset(
        &self,
        project: &Project,
        upload: &ModelUpload,
    ) -> Result<UploadResponse>;

    /// List the project's test suites in server order.
    fn list_test_suites(&self, project: &Project) -> Result<Vec<TestSuite>>;

    /// Execute a test suite against an uploaded model. Blocks until the
    /// server has run every test.
    fn execute_test_suite(
        &self,
        project: &Project,
        suite_id: u64,
        model_id: &str,
    ) -> Result<Vec<TestRecord>>;

    /// Create the project, falling back to a fetch only when the service
    /// reports the key already exists. Any other creation failure
    /// propagates.
    fn ensure_project(&self, key: &str, name: &str, description: &str) -> Result<Project> {
        match self.create_project(key, name, description) {
            Ok(project) => {
                info!(project_key = key, "project created");
                Ok(project)
            }
            Err(ClientError::ProjectExists { .. }) => {
                info!(project_key = key, "project already exists, fetching");
                self.get_project(key)
            }
            Err(error) => Err(error),
        }
    }
}
