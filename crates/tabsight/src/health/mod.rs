//! Data health scoring: completeness, consistency, and diversity.

mod outliers;
mod scorer;

pub use outliers::{IqrBounds, OutlierConfig, OutlierDetector, OutlierSummary};
pub use scorer::{
    HealthAssessment, HealthGrade, HealthReport, HealthScorer, HealthWeights, ScorerConfig,
};
