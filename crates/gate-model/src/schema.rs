//! Dataset schema declaration.
//!
//! The remote validation service interprets every column as one of three
//! semantic kinds. The schema is declared by hand for the dataset the model
//! was trained on and stays fixed for the lifetime of a run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic kind of a dataset column, as understood by the validation
/// service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Category,
    Numeric,
    Text,
}

impl ColumnKind {
    /// Wire name used in upload payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Numeric => "numeric",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered column-to-kind map plus the target column.
///
/// Column order matters: feature names are sent to the service in the
/// declared order, which must match the order the classifier was trained
/// with.
#[derive(Debug, Clone)]
pub struct DatasetSchema {
    columns: Vec<(String, ColumnKind)>,
    target: String,
}

impl DatasetSchema {
    /// Build a schema from an ordered column list and a target column name.
    ///
    /// The target must be one of the declared columns.
    #[must_use]
    pub fn new(columns: Vec<(String, ColumnKind)>, target: &str) -> Self {
        debug_assert!(
            columns.iter().any(|(name, _)| name.as_str() == target),
            "target column must be declared"
        );
        Self {
            columns,
            target: target.to_string(),
        }
    }

    /// Name of the ground-truth column.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// All declared columns in order, target included.
    pub fn columns(&self) -> impl Iterator<Item = (&str, ColumnKind)> {
        self.columns.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Declared column names in order, target included.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Feature columns in order: every declared column except the target.
    #[must_use]
    pub fn feature_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(name, _)| *name != self.target)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Kind of a declared column, if present.
    #[must_use]
    pub fn kind_of(&self, column: &str) -> Option<ColumnKind> {
        self.columns
            .iter()
            .find(|(name, _)| name.as_str() == column)
            .map(|(_, kind)| *kind)
    }

    /// Number of declared columns, target included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when no columns are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// The hand-authored schema for the German credit scoring dataset the
/// classifier was trained on. The `default` column is the ground truth.
#[must_use]
pub fn credit_schema() -> DatasetSchema {
    use ColumnKind::{Category, Numeric};
    let columns = vec![
        ("default", Category),
        ("account_check_status", Category),
        ("duration_in_month", Numeric),
        ("credit_history", Category),
        ("purpose", Category),
        ("credit_amount", Numeric),
        ("savings", Category),
        ("present_employment_since", Category),
        ("installment_as_income_perc", Numeric),
        ("sex", Category),
        ("personal_status", Category),
        ("other_debtors", Category),
        ("present_residence_since", Numeric),
        ("property", Category),
        ("age", Numeric),
        ("other_installment_plans", Category),
        ("housing", Category),
        ("credits_this_bank", Numeric),
        ("job", Category),
        ("people_under_maintenance", Numeric),
        ("telephone", Category),
        ("foreign_worker", Category),
    ]
    .into_iter()
    .map(|(name, kind)| (name.to_string(), kind))
    .collect();
    DatasetSchema::new(columns, "default")
}
