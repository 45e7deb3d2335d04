use thiserror::Error;

/// Errors shared by the gate's core types.
#[derive(Debug, Error)]
pub enum GateError {
    /// The remote suite returned an empty result sequence.
    #[error("no tests were executed by the remote suite")]
    NoTestsExecuted,

    /// A classifier artifact is internally inconsistent.
    #[error("invalid classifier artifact: {0}")]
    InvalidArtifact(String),

    /// A dataset does not match the declared schema.
    #[error("dataset does not match schema: missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

pub type Result<T> = std::result::Result<T, GateError>;
