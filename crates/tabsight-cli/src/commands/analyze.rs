//! Analyze command - classify columns and score data health.

use std::path::PathBuf;

use colored::Colorize;
use tabsight::{CellValue, ColumnMeta, Tabsight, TabsightConfig};

use super::print_health;

pub fn run(
    file: PathBuf,
    json: bool,
    output: Option<PathBuf>,
    config: TabsightConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let result = Tabsight::with_config(config).analyze(&file)?;

    if let Some(ref path) = output {
        std::fs::write(path, result.to_json()?)?;
    }

    if json {
        println!("{}", result.to_json()?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {} columns, {})",
        "Analyzed".cyan().bold(),
        result.source.file.white(),
        result.source.row_count,
        result.source.column_count,
        result.source.format
    );
    println!();

    println!("{}", "Columns:".yellow().bold());
    println!(
        "  {:24} {:10} {:>7} {:>7}  {}",
        "name".dimmed(),
        "type".dimmed(),
        "nulls".dimmed(),
        "unique".dimmed(),
        "stats".dimmed()
    );
    for column in &result.analysis.columns {
        println!(
            "  {:24} {:10} {:>7} {:>7}  {}",
            column.name,
            column.column_type.label().cyan(),
            column.null_count,
            column.unique_count,
            describe_stats(column)
        );
    }
    println!();

    print_health(&result.analysis.health, &result.analysis.outlier_columns);

    if let Some(path) = output {
        println!();
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}

fn describe_stats(column: &ColumnMeta) -> String {
    let mut parts = Vec::new();
    if let (Some(min), Some(max)) = (&column.min, &column.max) {
        parts.push(format!("min={} max={}", truncate(min), truncate(max)));
    }
    if let Some(mean) = column.mean {
        parts.push(format!("mean={}", mean));
    }
    parts.join(" ")
}

fn truncate(value: &CellValue) -> String {
    let text = value.as_text();
    if text.chars().count() > 20 {
        format!("{}...", text.chars().take(17).collect::<String>())
    } else {
        text.into_owned()
    }
}
