//! post-exporter - Post dataset export CLI
//!
//! Converts datasets of social-media post records to JSON, HTML, or
//! CSV documents.
//!
//! ## Quick Start
//!
//! ```bash
//! # Inspect a dataset
//! post-exporter info posts.json
//!
//! # Export to spreadsheet-compatible CSV
//! post-exporter export posts.json --format csv --output posts.csv
//!
//! # Print the HTML rendition to stdout
//! post-exporter export posts.json --format html
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
