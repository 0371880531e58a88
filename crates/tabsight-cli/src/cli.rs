//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use tabsight::TabsightConfig;

/// Tabsight: column type inference and data health scoring
#[derive(Parser)]
#[command(name = "tabsight")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

/// Options mapped onto the analysis configuration.
#[derive(Args, Debug, Clone)]
pub struct AnalysisArgs {
    /// Field delimiter (auto-detected when omitted; use "tab" for TSV)
    #[arg(short, long, global = true, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,

    /// Maximum number of data rows to read
    #[arg(long, global = true)]
    pub max_rows: Option<usize>,

    /// Distinct values a column must exceed to be treated as an identifier
    #[arg(long, global = true, default_value = "10")]
    pub id_threshold: usize,

    /// Representative rows kept in the analysis
    #[arg(long, global = true, default_value = "10")]
    pub sample_rows: usize,

    /// Classify columns in parallel
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Keep every cell as text instead of detecting numbers
    #[arg(long, global = true)]
    pub no_typing: bool,
}

impl AnalysisArgs {
    /// Build the library configuration from the flags.
    pub fn to_config(&self) -> TabsightConfig {
        let mut config = TabsightConfig {
            sample_rows: self.sample_rows,
            parallel: self.parallel,
            ..TabsightConfig::default()
        };
        config.parser.delimiter = self.delimiter;
        config.parser.max_rows = self.max_rows;
        config.parser.dynamic_typing = !self.no_typing;
        config.classifier.id_min_samples = self.id_threshold;
        config
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify every column and score the data health
    Analyze {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,

        /// Write the JSON analysis to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the compact summary payload used for insight generation
    Payload {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Comma-separated columns to focus on
        #[arg(short, long, value_delimiter = ',')]
        select: Vec<String>,

        /// Write the payload to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show only the health score and outlier columns
    Health {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        "comma" => Ok(b','),
        "semicolon" => Ok(b';'),
        "pipe" => Ok(b'|'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!(
            "Invalid delimiter: {}. Use a single character or tab, comma, semicolon, pipe.",
            s
        )),
    }
}
