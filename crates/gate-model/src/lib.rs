//! Core types for the model verification gate.
//!
//! The gate loads a trained classifier and its held-out test dataset,
//! registers both with a remote validation service, runs the server-side
//! test suite, and decides "verified" from the pass rate. This crate holds
//! the types shared by the artifact loaders, the service client, and the
//! CLI: the dataset schema, the classifier artifact, test records, and the
//! verdict arithmetic.

pub mod classifier;
pub mod error;
pub mod record;
pub mod schema;
pub mod verdict;

pub use classifier::ClassifierArtifact;
pub use error::{GateError, Result};
pub use record::{TestRecord, TestStatus};
pub use schema::{ColumnKind, DatasetSchema, credit_schema};
pub use verdict::{PASS_THRESHOLD, Verdict};
