//! Trained-model artifact handling.
//!
//! A training job leaves one directory per model version under a model
//! root, each holding the serialized classifier and the zip-compressed CSV
//! test dataset. This crate resolves the newest version deterministically,
//! loads both artifacts, and persists the remote test results next to them.

pub mod classifier;
pub mod dataset;
pub mod discovery;
pub mod error;
pub mod results;

pub use classifier::load_classifier;
pub use dataset::{TestTable, load_test_data};
pub use discovery::{ModelVersion, latest_version};
pub use error::{ArtifactError, Result};
pub use results::write_results;
