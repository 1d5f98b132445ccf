//! Export command
//!
//! Export a post dataset to JSON, HTML, or CSV.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use pe_core::config::Config;
use pe_core::export::ExportManager;
use pe_core::Record;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON array
    Json,
    /// Static HTML document with a table
    Html,
    /// Spreadsheet-compatible CSV (saved with a UTF-8 BOM)
    Csv,
}

impl ExportFormat {
    fn name(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Dataset file (JSON array of records)
    pub input: PathBuf,

    /// Export format (defaults to the configured format)
    #[arg(long, short, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the export command
pub fn execute(args: ExportArgs, config: &Config) -> Result<()> {
    let records = load_dataset(&args.input)?;

    let format_name = match args.format {
        Some(format) => format.name().to_string(),
        None => config.export.default_format.clone(),
    };

    eprintln!(
        "Exporting {} records from {}...",
        records.len().to_string().yellow(),
        args.input.display().to_string().cyan()
    );

    // ExportManager::new() already registers the default exporters
    let manager = ExportManager::new();

    if let Some(output) = args.output {
        let output = resolve_output(output, config);
        manager
            .export_to_file(&records, &format_name, &output)
            .context(format!("Failed to export to {}", output.display()))?;
        eprintln!("{} Exported to {}", "✓".green(), output.display());
    } else {
        let content = manager.export(&records, &format_name)?;
        std::io::stdout()
            .write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Resolve a relative output path under the configured output directory
fn resolve_output(path: PathBuf, config: &Config) -> PathBuf {
    match &config.export.output_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    }
}

/// Load a dataset file as a list of records
pub(crate) fn load_dataset(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read dataset {}", path.display()))?;
    let records: Vec<Record> = serde_json::from_str(&content).context(format!(
        "Dataset {} is not a JSON array of records",
        path.display()
    ))?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_values() {
        // Test that all enum values can be parsed
        assert!(ExportFormat::from_str("json", true).is_ok());
        assert!(ExportFormat::from_str("html", true).is_ok());
        assert!(ExportFormat::from_str("csv", true).is_ok());
        assert!(ExportFormat::from_str("yaml", true).is_err());
    }

    #[test]
    fn test_format_names() {
        assert_eq!(ExportFormat::Json.name(), "json");
        assert_eq!(ExportFormat::Html.name(), "html");
        assert_eq!(ExportFormat::Csv.name(), "csv");
    }

    #[test]
    fn test_load_dataset() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("posts.json");
        fs::write(&path, r#"[{"id": "1"}, {"id": "2"}]"#).unwrap();

        let records = load_dataset(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("id"), Some(&serde_json::json!("1")));
    }

    #[test]
    fn test_load_dataset_rejects_non_array() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("posts.json");
        fs::write(&path, r#"{"id": "1"}"#).unwrap();

        assert!(load_dataset(&path).is_err());
    }

    #[test]
    fn test_resolve_output_uses_configured_dir() {
        let mut config = Config::default();
        config.export.output_dir = Some(PathBuf::from("/exports"));

        assert_eq!(
            resolve_output(PathBuf::from("posts.csv"), &config),
            PathBuf::from("/exports/posts.csv")
        );
        assert_eq!(
            resolve_output(PathBuf::from("/tmp/posts.csv"), &config),
            PathBuf::from("/tmp/posts.csv")
        );
    }

    #[test]
    fn test_resolve_output_without_configured_dir() {
        let config = Config::default();
        assert_eq!(
            resolve_output(PathBuf::from("posts.csv"), &config),
            PathBuf::from("posts.csv")
        );
    }
}
