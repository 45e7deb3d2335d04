//! Test result persistence.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::info;

use gate_model::TestRecord;

use crate::error::{ArtifactError, Result};

/// Write the raw test-result payload as pretty JSON.
///
/// Called only on the verified path; an unverified run leaves no file
/// behind.
pub fn write_results(path: &Path, records: &[TestRecord]) -> Result<()> {
    let file = File::create(path).map_err(|e| ArtifactError::ResultsWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), records)?;
    info!(path = %path.display(), tests = records.len(), "wrote test results");
    Ok(())
}
