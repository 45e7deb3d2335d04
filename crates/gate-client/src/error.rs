//! Error types for the validation service client.

use thiserror::Error;

/// Errors from talking to the validation service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Network request failed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service returned a non-success status.
    #[error("service error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// A project with this key already exists on the server.
    ///
    /// Distinct from [`ClientError::Api`] so callers can fall back to a
    /// fetch without swallowing unrelated failures.
    #[error("project \"{key}\" already exists")]
    ProjectExists { key: String },

    /// The project has no test suites to execute.
    #[error("no test suites found in project \"{key}\"")]
    NoTestSuites { key: String },

    /// The service response could not be interpreted.
    #[error("invalid response from service: {0}")]
    InvalidResponse(String),
}

/// Errors building the gate configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required environment variables are unset or empty.
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
