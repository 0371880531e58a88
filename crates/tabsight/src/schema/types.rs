//! Core type definitions for column classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type assigned to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Numbers, or text that parses to numbers.
    Numeric,
    /// Calendar dates or timestamps.
    Date,
    /// Low-cardinality labels.
    Categorical,
    /// Unique integer or hex/UUID-like keys.
    Id,
    /// Nothing above applies, or the column is entirely null.
    #[default]
    Unknown,
}

impl ColumnType {
    /// All types, in classification priority order.
    pub const ALL: [ColumnType; 5] = [
        ColumnType::Id,
        ColumnType::Numeric,
        ColumnType::Date,
        ColumnType::Categorical,
        ColumnType::Unknown,
    ];

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "Numeric",
            ColumnType::Date => "Date",
            ColumnType::Categorical => "Category",
            ColumnType::Id => "ID",
            ColumnType::Unknown => "Unknown",
        }
    }

    /// Wire name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Date => "date",
            ColumnType::Categorical => "categorical",
            ColumnType::Id => "id",
            ColumnType::Unknown => "unknown",
        }
    }

    /// Whether columns of this type carry `min`/`max`.
    pub fn carries_range(&self) -> bool {
        matches!(
            self,
            ColumnType::Numeric | ColumnType::Date | ColumnType::Categorical
        )
    }

    /// Whether columns of this type carry `mean`.
    pub fn carries_mean(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
