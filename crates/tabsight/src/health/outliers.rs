//! IQR outlier detection across numeric columns.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::{CellValue, DataTable};

/// Outlier detection settings.
#[derive(Debug, Clone)]
pub struct OutlierConfig {
    /// Fence multiplier applied to the interquartile range.
    pub iqr_multiplier: f64,
    /// Columns with fewer numeric values are skipped.
    pub min_samples: usize,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: 1.5,
            min_samples: 4,
        }
    }
}

/// Nearest-rank quartiles and the fences derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrBounds {
    /// First quartile (value at index `floor(n / 4)` of the sorted values).
    pub q1: f64,
    /// Third quartile (value at index `floor(3n / 4)`).
    pub q3: f64,
    /// Lower fence.
    pub lower: f64,
    /// Upper fence.
    pub upper: f64,
}

impl IqrBounds {
    /// The interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Whether a value lies strictly outside the fences.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Rows flagged as outliers in at least one numeric column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutlierSummary {
    /// Union of outlier row indices, ascending.
    pub rows: BTreeSet<usize>,
    /// Numeric columns that contributed at least one outlier, in input order.
    pub columns: Vec<String>,
}

impl OutlierSummary {
    /// Number of distinct outlier rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether no outliers were found.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Flags values outside `[q1 - k*iqr, q3 + k*iqr]`.
#[derive(Debug, Clone, Default)]
pub struct OutlierDetector {
    config: OutlierConfig,
}

impl OutlierDetector {
    /// Create a detector with the default 1.5x fences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom settings.
    pub fn with_config(config: OutlierConfig) -> Self {
        Self { config }
    }

    /// Compute fences for a set of values, or `None` below the sample minimum.
    pub fn column_bounds(&self, values: &[f64]) -> Option<IqrBounds> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        self.bounds_sorted(&sorted)
    }

    fn bounds_sorted(&self, sorted: &[f64]) -> Option<IqrBounds> {
        let n = sorted.len();
        if n == 0 || n < self.config.min_samples {
            return None;
        }

        let q1 = sorted[n / 4];
        let q3 = sorted[(3 * n) / 4];
        let iqr = q3 - q1;

        Some(IqrBounds {
            q1,
            q3,
            lower: q1 - self.config.iqr_multiplier * iqr,
            upper: q3 + self.config.iqr_multiplier * iqr,
        })
    }

    /// Row indices whose value in this column is an outlier.
    ///
    /// Cells without a numeric reading (including nulls) are ignored. They
    /// are dropped before the quartiles are taken rather than read as zero.
    pub fn column_outliers<'a, I>(&self, values: I) -> Vec<usize>
    where
        I: IntoIterator<Item = &'a CellValue>,
    {
        let mut indexed: Vec<(usize, f64)> = values
            .into_iter()
            .enumerate()
            .filter_map(|(row, value)| value.as_number().map(|n| (row, n)))
            .collect();
        indexed.sort_by(|a, b| a.1.total_cmp(&b.1));

        let sorted: Vec<f64> = indexed.iter().map(|(_, n)| *n).collect();
        let Some(bounds) = self.bounds_sorted(&sorted) else {
            return Vec::new();
        };

        let mut rows: Vec<usize> = indexed
            .into_iter()
            .filter(|(_, n)| bounds.is_outlier(*n))
            .map(|(row, _)| row)
            .collect();
        rows.sort_unstable();
        rows
    }

    /// Detect outlier rows across the named columns of a table.
    ///
    /// Names that are not table headers contribute nothing.
    pub fn detect(&self, table: &DataTable, columns: &[&str]) -> OutlierSummary {
        let mut summary = OutlierSummary::default();

        for &name in columns {
            let Some(index) = table.column_index(name) else {
                continue;
            };

            let rows = self.column_outliers(table.column_values(index));
            debug!(column = name, outliers = rows.len(), "iqr pass");

            if !rows.is_empty() {
                summary.columns.push(name.to_string());
                summary.rows.extend(rows);
            }
        }

        summary
    }
}
