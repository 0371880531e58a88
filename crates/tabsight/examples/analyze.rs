//! Example: Analyze a tabular data file with Tabsight.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>

use std::env;
use std::path::Path;

use tabsight::{InsightsPayload, Tabsight};

fn main() -> tabsight::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(72);
    println!("{}", separator);
    println!("Tabsight Analysis: {}", file_path);
    println!("{}", separator);
    println!();

    let result = Tabsight::new().analyze(path)?;

    println!("## Source");
    println!("  File: {}", result.source.file);
    println!("  Format: {}", result.source.format);
    println!("  Rows: {}", result.source.row_count);
    println!("  Columns: {}", result.source.column_count);
    println!();

    println!("## Columns");
    for col in &result.analysis.columns {
        println!(
            "  {:24} {:10} nulls={:<6} unique={:<6}",
            col.name,
            col.column_type.label(),
            col.null_count,
            col.unique_count
        );
    }
    println!();

    let health = &result.analysis.health;
    println!("## Health");
    println!("  Score: {} ({})", health.score, health.grade().label());
    println!("  Completeness: {}", health.completeness);
    println!("  Consistency: {}", health.consistency);
    println!("  Diversity: {}", health.diversity);
    println!();

    println!("## Insights payload");
    println!("{}", InsightsPayload::from_result(&result).to_json()?);

    Ok(())
}
