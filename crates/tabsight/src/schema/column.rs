//! Column metadata produced by classification.

use serde::{Deserialize, Serialize};

use super::types::ColumnType;
use crate::input::CellValue;

/// Classification and summary statistics for one column.
///
/// `min`/`max` depend on the type: numeric bounds for numeric columns,
/// lexicographic bounds of the original strings for date columns, and
/// for categorical columns the least (`min`) and most (`max`) frequent
/// label. `mean` is only set for numeric columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMeta {
    /// Column name.
    pub name: String,
    /// Assigned type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Cells that are null or the empty string.
    pub null_count: usize,
    /// Distinct non-null values, compared by string form.
    pub unique_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<CellValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<CellValue>,
    /// Arithmetic mean rounded to 4 decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    /// First non-null values in encounter order.
    #[serde(default)]
    pub sample_values: Vec<CellValue>,
}

impl ColumnMeta {
    /// Create an unclassified column with no statistics.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Number of non-null cells, given the table's row count.
    pub fn non_null_count(&self, row_count: usize) -> usize {
        row_count.saturating_sub(self.null_count)
    }

    /// Fraction of null cells, given the table's row count.
    pub fn null_ratio(&self, row_count: usize) -> f64 {
        if row_count == 0 {
            0.0
        } else {
            self.null_count as f64 / row_count as f64
        }
    }

    /// Whether the statistics present are allowed for the column's type.
    pub fn stats_match_type(&self) -> bool {
        let range_ok = self.column_type.carries_range()
            || (self.min.is_none() && self.max.is_none());
        let mean_ok = self.column_type.carries_mean() || self.mean.is_none();
        range_ok && mean_ok
    }
}
