//! HTTP implementation of the validation service API.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Serialize;
use tracing::debug;

use gate_model::TestRecord;

use crate::api::{ModelUpload, Project, TestSuite, UploadResponse, ValidationApi};
use crate::config::GateConfig;
use crate::error::{ClientError, Result};

/// Timeout for control-plane calls (project and suite management).
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for a suite execution. The server runs every test before it
/// answers, so this is deliberately generous.
const EXECUTION_TIMEOUT: Duration = Duration::from_secs(600);

/// Blocking client for the Giskard validation service.
pub struct GiskardClient {
    client: Client,
    base_url: String,
    token: String,
}

/// Wire shape of the combined model + dataset upload.
#[derive(Serialize)]
struct UploadRequest<'a> {
    /// Hex-encoded serialized classifier.
    model: String,
    model_type: &'a str,
    dataframe: &'a str,
    column_types: serde_json::Map<String, serde_json::Value>,
    target: &'a str,
    feature_names: &'a [String],
    classification_labels: &'a [String],
    model_name: &'a str,
    dataset_name: &'a str,
}

#[derive(Serialize)]
struct CreateProjectRequest<'a> {
    key: &'a str,
    name: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct ExecuteSuiteRequest<'a> {
    model_id: &'a str,
}

impl GiskardClient {
    /// Build a client from the validated gate configuration.
    pub fn new(config: &GateConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::Network)?;
        Ok(Self {
            client,
            base_url: config.url.clone(),
            token: config.token.clone(),
        })
    }

    fn projects_url(&self) -> String {
        format!("{}/api/v2/projects", self.base_url)
    }

    fn project_url(&self, key: &str) -> String {
        format!("{}/api/v2/projects/{key}", self.base_url)
    }

    fn models_url(&self, key: &str) -> String {
        format!("{}/api/v2/projects/{key}/models", self.base_url)
    }

    fn suites_url(&self, key: &str) -> String {
        format!("{}/api/v2/projects/{key}/test-suites", self.base_url)
    }

    fn execute_url(&self, key: &str, suite_id: u64) -> String {
        format!(
            "{}/api/v2/projects/{key}/test-suites/{suite_id}/run",
            self.base_url
        )
    }

    fn request(&self, builder: reqwest::blocking::RequestBuilder) -> Result<Response> {
        let response = builder
            .bearer_auth(&self.token)
            .header(
                USER_AGENT,
                format!("model-gate/{}", env!("CARGO_PKG_VERSION")),
            )
            .header(ACCEPT, "application/json")
            .send()
            .map_err(ClientError::Network)?;
        Ok(response)
    }

    fn check_status(response: Response) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(ClientError::Api { status, message })
    }
}

impl ValidationApi for GiskardClient {
    fn create_project(&self, key: &str, name: &str, description: &str) -> Result<Project> {
        debug!(project_key = key, "creating project");
        let response = self.request(self.client.post(self.projects_url()).json(
            &CreateProjectRequest {
                key,
                name,
                description,
            },
        ))?;

        // 409 is the documented "key already taken" answer; everything else
        // non-success is a real failure.
        if response.status().as_u16() == 409 {
            return Err(ClientError::ProjectExists {
                key: key.to_string(),
            });
        }
        let response = Self::check_status(response)?;
        response.json().map_err(ClientError::Network)
    }

    fn get_project(&self, key: &str) -> Result<Project> {
        debug!(project_key = key, "fetching project");
        let response = self.request(self.client.get(self.project_url(key)))?;
        let response = Self::check_status(response)?;
        response.json().map_err(ClientError::Network)
    }

    fn upload_model_and_dataset(
        &self,
        project: &Project,
        upload: &ModelUpload,
    ) -> Result<UploadResponse> {
        debug!(
            project_key = %project.key,
            model_name = %upload.model_name,
            model_bytes = upload.model_bytes.len(),
            "uploading model and dataset"
        );
        let mut column_types = serde_json::Map::new();
        for (column, kind) in &upload.column_types {
            column_types.insert(column.clone(), serde_json::Value::String(kind.clone()));
        }
        let request = UploadRequest {
            model: hex::encode(&upload.model_bytes),
            model_type: &upload.model_type,
            dataframe: &upload.dataset_csv,
            column_types,
            target: &upload.target,
            feature_names: &upload.feature_names,
            classification_labels: &upload.classification_labels,
            model_name: &upload.model_name,
            dataset_name: &upload.dataset_name,
        };
        let response = self.request(
            self.client
                .post(self.models_url(&project.key))
                .json(&request),
        )?;
        let response = Self::check_status(response)?;
        response.json().map_err(ClientError::Network)
    }

    fn list_test_suites(&self, project: &Project) -> Result<Vec<TestSuite>> {
        debug!(project_key = %project.key, "listing test suites");
        let response = self.request(self.client.get(self.suites_url(&project.key)))?;
        let response = Self::check_status(response)?;
        response.json().map_err(ClientError::Network)
    }

    fn execute_test_suite(
        &self,
        project: &Project,
        suite_id: u64,
        model_id: &str,
    ) -> Result<Vec<TestRecord>> {
        debug!(project_key = %project.key, suite_id, model_id, "executing test suite");
        let response = self.request(
            self.client
                .post(self.execute_url(&project.key, suite_id))
                .timeout(EXECUTION_TIMEOUT)
                .json(&ExecuteSuiteRequest { model_id }),
        )?;
        let response = Self::check_status(response)?;
        response.json().map_err(ClientError::Network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GiskardClient {
        let config = GateConfig {
            url: "https://giskard.example.com".to_string(),
            token: "secret".to_string(),
            project_key: "credit_scoring".to_string(),
            project_name: "Credit Scoring".to_string(),
            project_description: "German credit default model".to_string(),
        };
        GiskardClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_urls() {
        let client = test_client();
        assert_eq!(
            client.projects_url(),
            "https://giskard.example.com/api/v2/projects"
        );
        assert_eq!(
            client.project_url("credit_scoring"),
            "https://giskard.example.com/api/v2/projects/credit_scoring"
        );
        assert_eq!(
            client.execute_url("credit_scoring", 3),
            "https://giskard.example.com/api/v2/projects/credit_scoring/test-suites/3/run"
        );
    }

    #[test]
    fn test_upload_request_wire_shape() {
        let request = UploadRequest {
            model: hex::encode([0xde, 0xad]),
            model_type: "classification",
            dataframe: "default,age\n0,35\n",
            column_types: serde_json::Map::new(),
            target: "default",
            feature_names: &["age".to_string()],
            classification_labels: &["0".to_string(), "1".to_string()],
            model_name: "2024-03-02",
            dataset_name: "test_data",
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "dead");
        assert_eq!(value["model_type"], "classification");
        assert_eq!(value["target"], "default");
        assert_eq!(value["classification_labels"][1], "1");
    }
}
