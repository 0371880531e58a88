//! Health command - show the data health score only.

use std::path::PathBuf;

use colored::Colorize;
use tabsight::{Tabsight, TabsightConfig};

use super::print_health;

pub fn run(
    file: PathBuf,
    json: bool,
    config: TabsightConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let result = Tabsight::with_config(config).analyze(&file)?;
    let analysis = &result.analysis;

    if json {
        let status = serde_json::json!({
            "file": result.source.file,
            "health": analysis.health,
            "grade": analysis.health.grade(),
            "outlierColumns": analysis.outlier_columns,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Data health for".cyan().bold(),
        result.source.file.white()
    );
    println!();
    print_health(&analysis.health, &analysis.outlier_columns);

    Ok(())
}
