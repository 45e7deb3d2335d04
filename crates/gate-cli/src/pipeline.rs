//! The verification pipeline with explicit stages.
//!
//! 1. **Resolve**: pick the newest trained-model version directory
//! 2. **Load**: deserialize the classifier and the test dataset
//! 3. **Provision**: ensure the remote project, upload model + dataset
//! 4. **Execute**: run the first server-side test suite
//! 5. **Judge**: compute the verdict, persist results when verified
//!
//! The pipeline is generic over [`ValidationApi`] so the end-to-end tests
//! drive it through a stub service.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use gate_artifacts::{latest_version, load_classifier, load_test_data, write_results};
use gate_client::{ClientError, GateConfig, ModelUpload, ValidationApi};
use gate_model::{TestRecord, Verdict, credit_schema};

/// Dataset display name used at registration.
const DATASET_NAME: &str = "test_data";

/// Everything the summary needs after a run, verified or not.
#[derive(Debug)]
pub struct VerifyReport {
    /// Resolved model version name.
    pub version: String,
    /// Remote project key.
    pub project_key: String,
    /// Executed suite identifier.
    pub suite_id: u64,
    /// Raw test records from the suite execution.
    pub records: Vec<TestRecord>,
    /// The gate decision.
    pub verdict: Verdict,
    /// Where the results were persisted; `None` on the unverified path.
    pub results_path: Option<PathBuf>,
}

/// Run the full verification pipeline against a validation service.
///
/// Returns `Ok` for both gate outcomes; `VerifyReport::verdict` carries the
/// decision. Errors are reserved for failures of the run itself (missing
/// artifacts, network errors, empty suite list, zero tests executed).
pub fn run_verify<S: ValidationApi>(
    service: &S,
    config: &GateConfig,
    model_root: &Path,
) -> Result<VerifyReport> {
    // Stage 1: Resolve
    let resolve_span = info_span!("resolve", model_root = %model_root.display());
    let version = resolve_span.in_scope(|| latest_version(model_root))?;
    info!(version = %version.name, "resolved model version");

    // Stage 2: Load
    let load_span = info_span!("load", version = %version.name);
    let load_start = Instant::now();
    let _load_guard = load_span.enter();

    let schema = credit_schema();
    let classifier_path = version.classifier_path();
    let classifier = load_classifier(&classifier_path)?;
    let table = load_test_data(&version.dataset_path(), &schema)?;
    let model_bytes = std::fs::read(&classifier_path)
        .with_context(|| format!("read classifier bytes from {}", classifier_path.display()))?;

    let feature_names: Vec<String> = schema
        .feature_columns()
        .iter()
        .map(|name| (*name).to_string())
        .collect();
    if classifier.feature_names != feature_names {
        warn!(
            version = %version.name,
            "classifier feature names differ from the declared schema; the schema order is sent"
        );
    }
    info!(
        version = %version.name,
        rows = table.row_count(),
        features = feature_names.len(),
        duration_ms = load_start.elapsed().as_millis(),
        "artifacts loaded"
    );
    drop(_load_guard);

    // Stage 3: Provision
    let provision_span = info_span!("provision", project_key = %config.project_key);
    let provision_start = Instant::now();
    let _provision_guard = provision_span.enter();

    let project = service.ensure_project(
        &config.project_key,
        &config.project_name,
        &config.project_description,
    )?;

    let upload = ModelUpload {
        model_bytes,
        model_type: "classification".to_string(),
        dataset_csv: table.to_csv()?,
        column_types: schema
            .columns()
            .map(|(name, kind)| (name.to_string(), kind.as_str().to_string()))
            .collect(),
        target: schema.target().to_string(),
        feature_names,
        classification_labels: classifier.class_labels().to_vec(),
        model_name: version.name.clone(),
        dataset_name: DATASET_NAME.to_string(),
    };
    let handles = service.upload_model_and_dataset(&project, &upload)?;
    info!(
        project_key = %project.key,
        model_id = %handles.model_id,
        dataset_id = %handles.dataset_id,
        duration_ms = provision_start.elapsed().as_millis(),
        "model and dataset registered"
    );
    drop(_provision_guard);

    // Stage 4: Execute
    let execute_span = info_span!("execute", project_key = %project.key);
    let execute_start = Instant::now();
    let _execute_guard = execute_span.enter();

    let suites = service.list_test_suites(&project)?;
    let suite = suites.first().ok_or_else(|| ClientError::NoTestSuites {
        key: project.key.clone(),
    })?;
    let records = service.execute_test_suite(&project, suite.id, &handles.model_id)?;
    info!(
        suite_id = suite.id,
        tests = records.len(),
        duration_ms = execute_start.elapsed().as_millis(),
        "test suite executed"
    );
    let suite_id = suite.id;
    drop(_execute_guard);

    // Stage 5: Judge
    let judge_span = info_span!("judge", version = %version.name);
    let _judge_guard = judge_span.enter();

    let verdict = Verdict::evaluate(&records)?;
    let results_path = if verdict.verified {
        let path = version.results_path();
        write_results(&path, &records)?;
        Some(path)
    } else {
        None
    };
    info!(
        passed = verdict.passed,
        total = verdict.total,
        pass_percent = verdict.pass_percent(),
        verified = verdict.verified,
        "verdict computed"
    );
    drop(_judge_guard);

    Ok(VerifyReport {
        version: version.name,
        project_key: project.key,
        suite_id,
        records,
        verdict,
        results_path,
    })
}
