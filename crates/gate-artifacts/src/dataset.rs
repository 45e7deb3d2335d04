//! Test dataset loading.
//!
//! The training job ships the held-out test dataset as a single CSV inside
//! a zip archive. The table is kept as raw strings: the validation service
//! does its own typing from the declared column kinds.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use gate_model::{DatasetSchema, GateError};

use crate::error::{ArtifactError, Result};

/// A loaded test dataset.
#[derive(Debug, Clone)]
pub struct TestTable {
    /// Column headers as they appear in the CSV.
    pub headers: Vec<String>,
    /// Data rows, one cell per header.
    pub rows: Vec<Vec<String>>,
}

impl TestTable {
    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Serialize the table back to CSV text for the upload payload.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(&self.headers)
            .map_err(csv_encode_error)?;
        for row in &self.rows {
            writer.write_record(row).map_err(csv_encode_error)?;
        }
        let bytes = writer.into_inner().map_err(|e| {
            ArtifactError::DatasetArchive {
                path: Path::new("<memory>").to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        String::from_utf8(bytes).map_err(|e| ArtifactError::DatasetArchive {
            path: Path::new("<memory>").to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Check that every schema column is present in the table.
    ///
    /// Missing columns are reported together rather than one at a time.
    pub fn validate_schema(&self, schema: &DatasetSchema) -> Result<()> {
        let mut missing = Vec::new();
        for name in schema.column_names() {
            if !self.headers.iter().any(|h| h.as_str() == name) {
                missing.push(name.to_string());
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(GateError::MissingColumns(missing).into())
        }
    }
}

fn csv_encode_error(source: csv::Error) -> ArtifactError {
    ArtifactError::DatasetParse {
        path: Path::new("<memory>").to_path_buf(),
        source,
    }
}

/// Load the test dataset from its zip archive and check it against the
/// declared schema.
pub fn load_test_data(path: &Path, schema: &DatasetSchema) -> Result<TestTable> {
    let file = File::open(path).map_err(|e| ArtifactError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut archive = ZipArchive::new(file).map_err(|e| ArtifactError::DatasetArchive {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let csv_name = archive
        .file_names()
        .find(|name| name.to_ascii_lowercase().ends_with(".csv"))
        .map(str::to_string)
        .ok_or_else(|| ArtifactError::DatasetArchive {
            path: path.to_path_buf(),
            reason: "no CSV entry in archive".to_string(),
        })?;

    let mut entry = archive
        .by_name(&csv_name)
        .map_err(|e| ArtifactError::DatasetArchive {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let mut contents = String::new();
    entry
        .read_to_string(&mut contents)
        .map_err(|e| ArtifactError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let table = parse_csv(&contents, path)?;
    table.validate_schema(schema)?;
    debug!(
        rows = table.row_count(),
        columns = table.headers.len(),
        "loaded test dataset"
    );
    Ok(table)
}

fn parse_csv(contents: &str, path: &Path) -> Result<TestTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(contents.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ArtifactError::DatasetParse {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ArtifactError::DatasetParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(TestTable { headers, rows })
}
