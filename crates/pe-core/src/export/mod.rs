//! Export functionality for post datasets
//!
//! This module converts a list of records into one of three textual
//! documents and saves the result to disk.
//!
//! # Overview
//!
//! Export functionality supports:
//! - JSON format (pretty-printed dataset, verbatim)
//! - HTML format (static document with per-field cell rendering)
//! - CSV format (spreadsheet-compatible, BOM-prefixed on save)
//!
//! # Example
//!
//! ```ignore
//! use pe_core::export::ExportManager;
//!
//! let manager = ExportManager::new();
//! let csv = manager.export(&records, "csv")?;
//! manager.export_data(&records, "csv", Path::new("posts.csv"));
//! ```

mod csv;
mod escape;
mod exporter;
mod html;
mod json;
mod render;
mod save;

pub use csv::CsvExporter;
pub use escape::{csv_escape, html_escape};
pub use exporter::{ExportManager, Exporter};
pub use html::HtmlExporter;
pub use json::JsonExporter;
pub use render::CellStrategy;
pub use save::{save_file, UTF8_BOM};
