//! Weighted health score over a classified table.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::outliers::{OutlierConfig, OutlierDetector, OutlierSummary};
use crate::input::DataTable;
use crate::schema::{ColumnMeta, ColumnType};

/// Weights combining the three sub-metrics into the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthWeights {
    pub completeness: f64,
    pub consistency: f64,
    pub diversity: f64,
}

impl Default for HealthWeights {
    fn default() -> Self {
        Self {
            completeness: 0.45,
            consistency: 0.35,
            diversity: 0.20,
        }
    }
}

/// Configuration for health scoring.
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    pub weights: HealthWeights,
    /// Consistency reported when no column is numeric.
    pub default_consistency: u8,
    pub outliers: OutlierConfig,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: HealthWeights::default(),
            default_consistency: 85,
            outliers: OutlierConfig::default(),
        }
    }
}

/// Overall score and sub-metrics, each an integer in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub score: u8,
    pub completeness: u8,
    pub consistency: u8,
    pub diversity: u8,
}

impl HealthReport {
    /// Report for a table with no rows or no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Coarse grade of the overall score.
    pub fn grade(&self) -> HealthGrade {
        HealthGrade::from_score(self.score)
    }
}

/// Display band for a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthGrade {
    Good,
    Fair,
    Poor,
}

impl HealthGrade {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => HealthGrade::Good,
            50..=79 => HealthGrade::Fair,
            _ => HealthGrade::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthGrade::Good => "good",
            HealthGrade::Fair => "fair",
            HealthGrade::Poor => "poor",
        }
    }
}

/// Health report together with the outliers behind its consistency metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub report: HealthReport,
    pub outliers: OutlierSummary,
}

/// Scores completeness, consistency and diversity of a table.
#[derive(Debug, Clone, Default)]
pub struct HealthScorer {
    config: ScorerConfig,
    detector: OutlierDetector,
}

impl HealthScorer {
    /// Create a scorer with the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom configuration.
    pub fn with_config(config: ScorerConfig) -> Self {
        let detector = OutlierDetector::with_config(config.outliers.clone());
        Self { config, detector }
    }

    /// Score a table against its column metadata.
    pub fn score(&self, table: &DataTable, columns: &[ColumnMeta]) -> HealthReport {
        self.assess(table, columns).report
    }

    /// Score a table and keep the outlier rows found along the way.
    ///
    /// `columns` is expected to come from classifying `table`; numeric
    /// columns are looked up in the table by name.
    pub fn assess(&self, table: &DataTable, columns: &[ColumnMeta]) -> HealthAssessment {
        let row_count = table.row_count();
        if row_count == 0 || columns.is_empty() {
            return HealthAssessment::default();
        }

        let total_cells = (row_count * columns.len()) as f64;
        let null_cells: usize = columns.iter().map(|c| c.null_count).sum();
        let completeness = percent(1.0 - null_cells as f64 / total_cells);

        let numeric: Vec<&str> = columns
            .iter()
            .filter(|c| c.column_type == ColumnType::Numeric)
            .map(|c| c.name.as_str())
            .collect();

        let (consistency, outliers) = if numeric.is_empty() {
            (
                self.config.default_consistency.min(100),
                OutlierSummary::default(),
            )
        } else {
            let outliers = self.detector.detect(table, &numeric);
            let clean = 1.0 - outliers.row_count() as f64 / row_count as f64;
            (percent(clean), outliers)
        };

        let uniqueness: f64 = columns
            .iter()
            .map(|c| (c.unique_count as f64 / row_count as f64).min(1.0))
            .sum();
        let diversity = percent(uniqueness / columns.len() as f64);

        let weights = &self.config.weights;
        let weighted = f64::from(completeness) * weights.completeness
            + f64::from(consistency) * weights.consistency
            + f64::from(diversity) * weights.diversity;
        let score = weighted.round().clamp(0.0, 100.0) as u8;

        debug!(
            score,
            completeness,
            consistency,
            diversity,
            outlier_rows = outliers.row_count(),
            "health scored"
        );

        HealthAssessment {
            report: HealthReport {
                score,
                completeness,
                consistency,
                diversity,
            },
            outliers,
        }
    }
}

fn percent(ratio: f64) -> u8 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
