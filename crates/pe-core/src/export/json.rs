//! JSON exporter

use super::exporter::Exporter;
use crate::error::Result;
use crate::record::Record;

/// JSON exporter
///
/// Serializes the full record sequence verbatim, pretty-printed with
/// a 2-space indent. No field filtering, no column derivation.
pub struct JsonExporter;

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JsonExporter {
    fn export(&self, records: &[Record]) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }

    fn format_name(&self) -> &str {
        "json"
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
