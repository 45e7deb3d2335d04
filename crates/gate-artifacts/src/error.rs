use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating or loading trained-model artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The model root directory does not exist.
    #[error("model root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// The model root could not be listed.
    #[error("failed to read model root {path}: {source}")]
    RootRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The model root contains no version directories.
    #[error("no model versions found under {path}")]
    NoVersions { path: PathBuf },

    /// An artifact file is missing or unreadable.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The classifier file could not be decoded.
    #[error("failed to decode classifier {path}: {source}")]
    ClassifierDecode {
        path: PathBuf,
        source: bincode::Error,
    },

    /// The dataset archive could not be opened or holds no CSV entry.
    #[error("invalid dataset archive {path}: {reason}")]
    DatasetArchive { path: PathBuf, reason: String },

    /// The dataset CSV could not be parsed.
    #[error("failed to parse dataset CSV in {path}: {source}")]
    DatasetParse { path: PathBuf, source: csv::Error },

    /// A loaded artifact failed a consistency check.
    #[error(transparent)]
    Model(#[from] gate_model::GateError),

    /// The results file could not be written.
    #[error("failed to write results to {path}: {source}")]
    ResultsWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The results payload could not be serialized.
    #[error("failed to serialize results: {0}")]
    ResultsEncode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArtifactError>;
