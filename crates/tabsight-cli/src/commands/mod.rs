//! CLI command implementations.

pub mod analyze;
pub mod health;
pub mod payload;

use colored::{ColoredString, Colorize};
use tabsight::{HealthGrade, HealthReport};

/// Score colored by its grade.
pub(crate) fn colored_score(report: &HealthReport) -> ColoredString {
    let text = format!("{}/100 ({})", report.score, report.grade().label());
    match report.grade() {
        HealthGrade::Good => text.green().bold(),
        HealthGrade::Fair => text.yellow().bold(),
        HealthGrade::Poor => text.red().bold(),
    }
}

/// Print the health block shared by `analyze` and `health`.
pub(crate) fn print_health(report: &HealthReport, outlier_columns: &[String]) {
    println!("{}", "Health:".yellow().bold());
    println!("  Score:        {}", colored_score(report));
    println!("  Completeness: {}", report.completeness);
    println!("  Consistency:  {}", report.consistency);
    println!("  Diversity:    {}", report.diversity);
    if !outlier_columns.is_empty() {
        println!(
            "  Outliers in:  {}",
            outlier_columns.join(", ").magenta()
        );
    }
}
