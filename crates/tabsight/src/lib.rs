//! Tabsight: column type inference and data health scoring for tabular data.
//!
//! Each column of a table is classified as numeric, date, categorical,
//! identifier or unknown, with summary statistics for its type. The table
//! as a whole gets a 0-100 health score built from completeness,
//! outlier-based consistency and diversity.
//!
//! # Example
//!
//! ```no_run
//! use tabsight::Tabsight;
//!
//! let tabsight = Tabsight::new();
//! let result = tabsight.analyze("orders.csv").unwrap();
//!
//! for column in &result.analysis.columns {
//!     println!("{}: {}", column.name, column.column_type.label());
//! }
//! println!("Health: {}", result.analysis.health.score);
//! ```

pub mod error;
pub mod health;
pub mod inference;
pub mod input;
pub mod schema;
pub mod summary;

mod tabsight;

pub use crate::tabsight::{AnalysisResult, TableAnalysis, Tabsight, TabsightConfig};
pub use error::{Result, TabsightError};
pub use health::{HealthGrade, HealthReport, HealthScorer};
pub use inference::ColumnClassifier;
pub use input::{CellValue, DataTable, RowRecord, SourceMetadata};
pub use schema::{ColumnMeta, ColumnType};
pub use summary::InsightsPayload;
