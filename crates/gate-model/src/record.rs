//! Test result records returned by the remote suite execution.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Status of a single remote test. Only `PASSED` counts toward the pass
/// ratio; every other status is a non-pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
    Errored,
    /// Any status string the service may add later.
    Other(String),
}

impl TestStatus {
    /// Parse the wire status string.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "PASSED" => Self::Passed,
            "FAILED" => Self::Failed,
            "ERRORED" => Self::Errored,
            other => Self::Other(other.to_string()),
        }
    }

    /// Wire representation, preserved verbatim for unknown statuses.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::Errored => "ERRORED",
            Self::Other(other) => other,
        }
    }

    /// True only for `PASSED`.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl Serialize for TestStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

/// One test record from a suite execution.
///
/// Only the status is interpreted; every other field the service returns is
/// kept as-is so the persisted JSON payload matches what the server sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRecord {
    pub status: TestStatus,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TestRecord {
    /// Build a record with just a status. Extra fields stay empty.
    #[must_use]
    pub fn with_status(status: TestStatus) -> Self {
        Self {
            status,
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for raw in ["PASSED", "FAILED", "ERRORED", "SKIPPED"] {
            let status = TestStatus::from_wire(raw);
            assert_eq!(status.as_str(), raw);
        }
        assert!(TestStatus::from_wire("PASSED").is_passed());
        assert!(!TestStatus::from_wire("FAILED").is_passed());
    }

    #[test]
    fn test_record_preserves_extra_fields() {
        let json = r#"{"id": 7, "name": "AUC drift", "status": "PASSED", "metric": 0.93}"#;
        let record: TestRecord = serde_json::from_str(json).unwrap();
        assert!(record.status.is_passed());
        assert_eq!(record.extra["name"], "AUC drift");

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["status"], "PASSED");
        assert_eq!(back["metric"], 0.93);
        assert_eq!(back["id"], 7);
    }
}
