//! Compact statistical summary handed to downstream insight generation.
//!
//! The payload carries column metadata, the health report and a handful
//! of representative rows, never the full dataset.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::health::HealthReport;
use crate::input::{DataTable, RowRecord};
use crate::schema::ColumnMeta;
use crate::tabsight::{AnalysisResult, TableAnalysis};

/// Pick up to `count` rows spread evenly through the table.
///
/// Small tables are returned whole. Larger ones are sampled at a fixed
/// stride of `row_count / count` starting from the first row.
pub fn representative_rows(table: &DataTable, count: usize) -> Vec<RowRecord> {
    let row_count = table.row_count();
    if count == 0 || row_count == 0 {
        return Vec::new();
    }

    if row_count <= count {
        return (0..row_count).filter_map(|i| table.record(i)).collect();
    }

    let stride = row_count / count;
    (0..count)
        .map(|i| i * stride)
        .filter_map(|i| table.record(i))
        .collect()
}

/// Summary of one analyzed table for the insight collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsPayload {
    pub filename: String,
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<ColumnMeta>,
    pub health: HealthReport,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outlier_columns: Vec<String>,
    pub sample_rows: Vec<RowRecord>,
    /// Columns the user asked to focus on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_columns: Vec<String>,
}

impl InsightsPayload {
    /// Build a payload from an in-memory table and its analysis.
    pub fn from_analysis(
        filename: impl Into<String>,
        table: &DataTable,
        analysis: &TableAnalysis,
    ) -> Self {
        Self::build(
            filename.into(),
            table.row_count(),
            table.column_count(),
            analysis,
        )
    }

    /// Build a payload from a file analysis.
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self::build(
            result.source.file.clone(),
            result.source.row_count,
            result.source.column_count,
            &result.analysis,
        )
    }

    fn build(
        filename: String,
        row_count: usize,
        column_count: usize,
        analysis: &TableAnalysis,
    ) -> Self {
        Self {
            filename,
            row_count,
            column_count,
            columns: analysis.columns.clone(),
            health: analysis.health,
            outlier_columns: analysis.outlier_columns.clone(),
            sample_rows: analysis.sample_rows.clone(),
            selected_columns: Vec::new(),
        }
    }

    /// Set the focus columns, keeping only names present in the table.
    pub fn with_selected_columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            let known = self.columns.iter().any(|c| c.name == name);
            if known && !selected.iter().any(|s| s == name) {
                selected.push(name.to_string());
            }
        }
        self.selected_columns = selected;
        self
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Metadata for the selected columns, or all columns when none are selected.
    pub fn focus_columns(&self) -> Vec<&ColumnMeta> {
        if self.selected_columns.is_empty() {
            return self.columns.iter().collect();
        }
        self.columns
            .iter()
            .filter(|c| self.selected_columns.contains(&c.name))
            .collect()
    }
}
