//! Verdict arithmetic for the deployment gate.

use crate::error::{GateError, Result};
use crate::record::TestRecord;

/// Fraction of tests that must pass, exclusive. A run with exactly half the
/// tests passing is not verified.
pub const PASS_THRESHOLD: f64 = 0.5;

/// Outcome of judging a suite execution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    /// Tests with status `PASSED`.
    pub passed: usize,
    /// Total tests executed.
    pub total: usize,
    /// `passed / total`.
    pub pass_ratio: f64,
    /// True iff the ratio is strictly above [`PASS_THRESHOLD`].
    pub verified: bool,
}

impl Verdict {
    /// Judge a suite execution.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::NoTestsExecuted`] for an empty record sequence
    /// rather than dividing by zero.
    pub fn evaluate(records: &[TestRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(GateError::NoTestsExecuted);
        }
        let passed = records
            .iter()
            .filter(|record| record.status.is_passed())
            .count();
        let total = records.len();
        let pass_ratio = passed as f64 / total as f64;
        Ok(Self {
            passed,
            total,
            pass_ratio,
            verified: pass_ratio > PASS_THRESHOLD,
        })
    }

    /// Pass rate as a percentage, the number surfaced in messages and the
    /// failure payload.
    #[must_use]
    pub fn pass_percent(&self) -> f64 {
        self.pass_ratio * 100.0
    }
}
