//! End-to-end tests for the verification pipeline with a stubbed service.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use gate_cli::pipeline::run_verify;
use gate_client::{
    ClientError, GateConfig, ModelUpload, Project, TestSuite, UploadResponse, ValidationApi,
};
use gate_model::{ClassifierArtifact, TestRecord, TestStatus, credit_schema};

/// Stub service answering every call in memory and recording the upload.
struct StubService {
    suites: Vec<TestSuite>,
    records: Vec<TestRecord>,
    uploads: Mutex<Vec<ModelUpload>>,
}

impl StubService {
    fn with_results(passed: usize, failed: usize) -> Self {
        let mut records = Vec::new();
        for _ in 0..passed {
            records.push(TestRecord::with_status(TestStatus::Passed));
        }
        for _ in 0..failed {
            records.push(TestRecord::with_status(TestStatus::Failed));
        }
        Self {
            suites: vec![TestSuite {
                id: 1,
                name: Some("credit suite".to_string()),
            }],
            records,
            uploads: Mutex::new(Vec::new()),
        }
    }
}

impl ValidationApi for StubService {
    fn create_project(
        &self,
        key: &str,
        name: &str,
        description: &str,
    ) -> Result<Project, ClientError> {
        Ok(Project {
            key: key.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
        })
    }

    fn get_project(&self, key: &str) -> Result<Project, ClientError> {
        Ok(Project {
            key: key.to_string(),
            name: String::new(),
            description: None,
        })
    }

    fn upload_model_and_dataset(
        &self,
        _project: &Project,
        upload: &ModelUpload,
    ) -> Result<UploadResponse, ClientError> {
        self.uploads.lock().unwrap().push(upload.clone());
        Ok(UploadResponse {
            model_id: "model-1".to_string(),
            dataset_id: "dataset-1".to_string(),
        })
    }

    fn list_test_suites(&self, _project: &Project) -> Result<Vec<TestSuite>, ClientError> {
        Ok(self.suites.clone())
    }

    fn execute_test_suite(
        &self,
        _project: &Project,
        _suite_id: u64,
        _model_id: &str,
    ) -> Result<Vec<TestRecord>, ClientError> {
        Ok(self.records.clone())
    }
}

fn config() -> GateConfig {
    GateConfig {
        url: "https://giskard.example.com".to_string(),
        token: "secret".to_string(),
        project_key: "credit_scoring".to_string(),
        project_name: "Credit Scoring".to_string(),
        project_description: "German credit default model".to_string(),
    }
}

fn write_version(model_root: &Path, name: &str) -> PathBuf {
    let dir = model_root.join(name);
    std::fs::create_dir_all(&dir).unwrap();

    let schema = credit_schema();
    let artifact = ClassifierArtifact {
        feature_names: schema
            .feature_columns()
            .iter()
            .map(|n| (*n).to_string())
            .collect(),
        class_labels: vec!["0".to_string(), "1".to_string()],
        coefficients: vec![vec![0.1; schema.feature_columns().len()]],
        intercepts: vec![-0.3],
    };
    let bytes = bincode::serialize(&artifact).unwrap();
    std::fs::write(dir.join("logistic_regression.model"), bytes).unwrap();

    // One CSV row with a plausible value per declared column
    let headers = schema.column_names().join(",");
    let row: Vec<&str> = schema
        .columns()
        .map(|(name, _)| match name {
            "default" => "0",
            "age" => "35",
            "credit_amount" => "2500",
            "duration_in_month" => "24",
            _ => "a",
        })
        .collect();
    let csv = format!("{headers}\n{}\n", row.join(","));

    let file = File::create(dir.join("test_data.zip")).unwrap();
    let mut writer = ZipWriter::new(file);
    writer
        .start_file("test_data.csv", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(csv.as_bytes()).unwrap();
    writer.finish().unwrap();

    dir
}

#[test]
fn test_eight_of_ten_passes_the_gate_and_writes_results() {
    let root = TempDir::new().unwrap();
    let model_root = root.path().join("trained_model");
    let version_dir = write_version(&model_root, "2024-03-02");

    let service = StubService::with_results(8, 2);
    let report = run_verify(&service, &config(), &model_root).unwrap();

    assert!(report.verdict.verified);
    assert_eq!(report.version, "2024-03-02");
    assert!((report.verdict.pass_percent() - 80.0).abs() < f64::EPSILON);

    let results = version_dir.join("Giskard_tests.json");
    assert_eq!(report.results_path.as_deref(), Some(results.as_path()));
    let payload: Vec<TestRecord> =
        serde_json::from_str(&std::fs::read_to_string(&results).unwrap()).unwrap();
    assert_eq!(payload.len(), 10);
}

#[test]
fn test_three_of_ten_fails_the_gate_without_writing() {
    let root = TempDir::new().unwrap();
    let model_root = root.path().join("trained_model");
    let version_dir = write_version(&model_root, "2024-03-02");

    let service = StubService::with_results(3, 7);
    let report = run_verify(&service, &config(), &model_root).unwrap();

    assert!(!report.verdict.verified);
    assert!((report.verdict.pass_percent() - 30.0).abs() < f64::EPSILON);
    assert!(report.results_path.is_none());
    assert!(!version_dir.join("Giskard_tests.json").exists());
}

#[test]
fn test_exactly_half_fails_the_gate() {
    let root = TempDir::new().unwrap();
    let model_root = root.path().join("trained_model");
    write_version(&model_root, "2024-03-02");

    let service = StubService::with_results(5, 5);
    let report = run_verify(&service, &config(), &model_root).unwrap();

    assert!(!report.verdict.verified);
}

#[test]
fn test_empty_result_sequence_is_an_explicit_error() {
    let root = TempDir::new().unwrap();
    let model_root = root.path().join("trained_model");
    write_version(&model_root, "2024-03-02");

    let service = StubService::with_results(0, 0);
    let error = run_verify(&service, &config(), &model_root).unwrap_err();
    assert!(error.to_string().contains("no tests"));
}

#[test]
fn test_missing_test_suite_is_an_explicit_error() {
    let root = TempDir::new().unwrap();
    let model_root = root.path().join("trained_model");
    write_version(&model_root, "2024-03-02");

    let mut service = StubService::with_results(8, 2);
    service.suites.clear();
    let error = run_verify(&service, &config(), &model_root).unwrap_err();
    assert!(error.to_string().contains("no test suites"));
}

#[test]
fn test_newest_version_is_selected_and_uploaded() {
    let root = TempDir::new().unwrap();
    let model_root = root.path().join("trained_model");
    write_version(&model_root, "2024-01-15");
    write_version(&model_root, "2024-03-02");

    let service = StubService::with_results(8, 2);
    let report = run_verify(&service, &config(), &model_root).unwrap();
    assert_eq!(report.version, "2024-03-02");

    let uploads = service.uploads.lock().unwrap();
    assert_eq!(uploads.len(), 1);
    let upload = &uploads[0];
    assert_eq!(upload.model_name, "2024-03-02");
    assert_eq!(upload.dataset_name, "test_data");
    assert_eq!(upload.model_type, "classification");
    assert_eq!(upload.target, "default");
    assert_eq!(upload.feature_names.len(), 21);
    assert_eq!(upload.column_types.len(), 22);
    assert!(upload.dataset_csv.starts_with("default,"));
    assert!(!upload.model_bytes.is_empty());
}

#[test]
fn test_missing_model_root_is_an_error() {
    let root = TempDir::new().unwrap();
    let service = StubService::with_results(8, 2);
    let error = run_verify(&service, &config(), &root.path().join("absent")).unwrap_err();
    assert!(error.to_string().contains("model root not found"));
}
