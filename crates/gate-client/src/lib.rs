//! Client for the remote model-validation service.
//!
//! The service hosts the actual statistical test suites; this crate only
//! registers the model and dataset, triggers a suite run, and hands the
//! results back. The [`ValidationApi`] trait is the seam the CLI drives,
//! with [`GiskardClient`] as the HTTP implementation and stubs standing in
//! for it under test.

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::{ModelUpload, Project, TestSuite, UploadResponse, ValidationApi};
pub use client::GiskardClient;
pub use config::{GateConfig, REQUIRED_VARS};
pub use error::{ClientError, ConfigError, Result};
