//! Info command
//!
//! Inspect a dataset file without exporting it.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use pe_core::column_set;

use super::export::load_dataset;

/// Arguments for the info command
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Dataset file (JSON array of records)
    pub input: PathBuf,
}

/// Execute the info command
pub fn execute(args: InfoArgs) -> Result<()> {
    let records = load_dataset(&args.input)?;
    let columns = column_set(&records);

    println!("{} {}", "Records:".bold(), records.len());
    println!("{} {}", "Columns:".bold(), columns.len());
    for column in &columns {
        println!("  {}", column);
    }

    Ok(())
}
