//! Payload command - build the compact summary for insight generation.

use std::path::PathBuf;

use colored::Colorize;
use tabsight::{InsightsPayload, Tabsight, TabsightConfig};
use tracing::warn;

pub fn run(
    file: PathBuf,
    select: Vec<String>,
    output: Option<PathBuf>,
    config: TabsightConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let result = Tabsight::with_config(config).analyze(&file)?;
    let payload = InsightsPayload::from_result(&result).with_selected_columns(&select);

    for name in unknown_selections(&payload, &select) {
        warn!(column = name, "unknown column ignored");
    }

    let json = payload.to_json()?;
    match output {
        Some(path) => {
            std::fs::write(&path, json)?;
            eprintln!(
                "{} {}",
                "Saved to".green().bold(),
                path.display().to_string().white()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Requested names that did not survive selection.
fn unknown_selections<'a>(payload: &InsightsPayload, select: &'a [String]) -> Vec<&'a str> {
    select
        .iter()
        .map(|name| name.trim())
        .filter(|name| !payload.selected_columns.iter().any(|s| s == name))
        .collect()
}
