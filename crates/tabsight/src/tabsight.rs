//! Main Tabsight struct and public API.

use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::health::{HealthReport, HealthScorer, ScorerConfig};
use crate::inference::{ClassifierConfig, ColumnClassifier};
use crate::input::{DataTable, Parser, ParserConfig, RowRecord, SourceMetadata};
use crate::schema::ColumnMeta;
use crate::summary::representative_rows;

/// Configuration for Tabsight analysis.
#[derive(Debug, Clone)]
pub struct TabsightConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Classification thresholds.
    pub classifier: ClassifierConfig,
    /// Health scoring weights and outlier settings.
    pub scorer: ScorerConfig,
    /// Representative rows kept in each analysis.
    pub sample_rows: usize,
    /// Classify columns on the rayon thread pool.
    pub parallel: bool,
}

impl Default for TabsightConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            classifier: ClassifierConfig::default(),
            scorer: ScorerConfig::default(),
            sample_rows: 10,
            parallel: false,
        }
    }
}

/// Classification and health of one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableAnalysis {
    /// One entry per header, in header order.
    pub columns: Vec<ColumnMeta>,
    pub health: HealthReport,
    /// Numeric columns with at least one IQR outlier.
    pub outlier_columns: Vec<String>,
    pub sample_rows: Vec<RowRecord>,
}

/// Result of analyzing a data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    #[serde(flatten)]
    pub analysis: TableAnalysis,
}

impl AnalysisResult {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The main Tabsight analysis engine.
#[derive(Debug, Clone)]
pub struct Tabsight {
    config: TabsightConfig,
    parser: Parser,
    classifier: ColumnClassifier,
    scorer: HealthScorer,
}

impl Tabsight {
    /// Create a new Tabsight instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(TabsightConfig::default())
    }

    /// Create a Tabsight instance with custom configuration.
    pub fn with_config(config: TabsightConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let classifier = ColumnClassifier::with_config(config.classifier.clone());
        let scorer = HealthScorer::with_config(config.scorer.clone());

        Self {
            config,
            parser,
            classifier,
            scorer,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &TabsightConfig {
        &self.config
    }

    /// Load a delimited file and analyze it.
    pub fn analyze(&self, path: impl AsRef<Path>) -> Result<AnalysisResult> {
        let path = path.as_ref();
        let (table, source) = self.parser.parse_file(path)?;
        let analysis = self.analyze_table(&table);

        info!(
            file = %source.file,
            rows = source.row_count,
            columns = source.column_count,
            score = analysis.health.score,
            "analyzed file"
        );

        Ok(AnalysisResult { source, analysis })
    }

    /// Analyze normalized row records. Missing keys are read as null.
    pub fn analyze_records(&self, headers: Vec<String>, records: &[RowRecord]) -> TableAnalysis {
        self.analyze_table(&DataTable::from_records(headers, records))
    }

    /// Classify every column, then score the table.
    pub fn analyze_table(&self, table: &DataTable) -> TableAnalysis {
        let columns = self.classify_columns(table);
        let assessment = self.scorer.assess(table, &columns);

        TableAnalysis {
            columns,
            health: assessment.report,
            outlier_columns: assessment.outliers.columns,
            sample_rows: representative_rows(table, self.config.sample_rows),
        }
    }

    /// Classify each column of a table, preserving header order.
    pub fn classify_columns(&self, table: &DataTable) -> Vec<ColumnMeta> {
        let classify = |index: usize| {
            self.classifier
                .classify_column(&table.headers[index], table.column_values(index))
        };

        if self.config.parallel {
            (0..table.column_count()).into_par_iter().map(classify).collect()
        } else {
            (0..table.column_count()).map(classify).collect()
        }
    }
}

impl Default for Tabsight {
    fn default() -> Self {
        Self::new()
    }
}
