//! CSV exporter

use serde_json::Value;

use super::escape::csv_escape;
use super::exporter::Exporter;
use crate::error::Result;
use crate::record::{column_set, Record};

/// CSV exporter
///
/// The header line is the column set joined by `,`, unescaped. Row
/// fields are encoded by value type: strings are quoted through
/// [`csv_escape`], objects and arrays are serialized to compact JSON
/// first and then quoted, and numbers, booleans, and nulls stay bare
/// (those tokens can never contain a delimiter). A string that merely
/// looks numeric is still quoted. Saved files get a UTF-8 BOM prefix
/// so spreadsheet applications detect the encoding.
pub struct CsvExporter;

impl CsvExporter {
    /// Create a new CSV exporter
    pub fn new() -> Self {
        Self
    }

    /// Encode one field value; absent keys become empty fields
    fn encode_field(value: Option<&Value>) -> Result<String> {
        Ok(match value {
            Some(Value::String(s)) => csv_escape(s),
            Some(v @ (Value::Object(_) | Value::Array(_))) => {
                csv_escape(&serde_json::to_string(v)?)
            }
            Some(v) => v.to_string(),
            None => String::new(),
        })
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for CsvExporter {
    fn export(&self, records: &[Record]) -> Result<String> {
        let columns = column_set(records);
        let mut content = columns.join(",");
        content.push('\n');

        for record in records {
            let mut fields = Vec::with_capacity(columns.len());
            for column in &columns {
                fields.push(Self::encode_field(record.get(column))?);
            }
            content.push_str(&fields.join(","));
            content.push('\n');
        }

        Ok(content)
    }

    fn format_name(&self) -> &str {
        "csv"
    }

    fn file_extension(&self) -> &str {
        "csv"
    }

    fn prepend_bom(&self) -> bool {
        true
    }
}
