//! Exporter trait and manager

use std::collections::HashMap;
use std::path::Path;

use tracing::{error, info};

use super::save::save_file;
use crate::error::{ExportError, Result};
use crate::record::Record;

/// Trait for dataset exporters
pub trait Exporter: Send + Sync {
    /// Export records to a complete textual document
    fn export(&self, records: &[Record]) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;

    /// Whether saved files get a UTF-8 BOM prefix
    fn prepend_bom(&self) -> bool {
        false
    }
}

/// Manager for handling multiple export formats
pub struct ExportManager {
    exporters: HashMap<String, Box<dyn Exporter>>,
}

impl ExportManager {
    /// Create a new export manager with default exporters
    pub fn new() -> Self {
        let mut manager = Self {
            exporters: HashMap::new(),
        };

        // Register default exporters
        manager.register(Box::new(super::json::JsonExporter::new()));
        manager.register(Box::new(super::html::HtmlExporter::new()));
        manager.register(Box::new(super::csv::CsvExporter::new()));

        manager
    }

    /// Register a new exporter
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        self.exporters
            .insert(exporter.format_name().to_string(), exporter);
    }

    /// Export records to the specified format
    pub fn export(&self, records: &[Record], format: &str) -> Result<String> {
        self.exporter(format)?.export(records)
    }

    /// Export records and write the document to a file
    ///
    /// Appends the exporter's extension when the path has none, and
    /// saves with the exporter's BOM flag.
    pub fn export_to_file(&self, records: &[Record], format: &str, path: &Path) -> Result<()> {
        let exporter = self.exporter(format)?;
        let content = exporter.export(records)?;

        let final_path = if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(exporter.file_extension())
        };

        save_file(&final_path, &content, exporter.prepend_bom())
    }

    /// Export records and save under `path`, reporting failure instead
    /// of propagating it
    ///
    /// Boundary for one-shot, fire-and-forget exports: any failure
    /// during export or save is logged once and swallowed, so a failed
    /// export never disturbs the calling flow. Either a complete file
    /// is written or nothing is.
    pub fn export_data(&self, records: &[Record], format: &str, path: &Path) {
        info!("Exporting to {} file: {}", format, path.display());

        if let Err(err) = self.export_to_file(records, format, path) {
            error!("Failed to export file: {err}");
        }
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.exporters.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.exporters.contains_key(format)
    }

    /// Get an exporter by format name
    pub fn get(&self, format: &str) -> Option<&dyn Exporter> {
        self.exporters.get(format).map(|e| e.as_ref())
    }

    fn exporter(&self, format: &str) -> Result<&dyn Exporter> {
        self.get(format)
            .ok_or_else(|| ExportError::UnknownFormat(format.to_string()))
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}
