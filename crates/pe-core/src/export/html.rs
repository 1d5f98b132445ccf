//! HTML exporter

use chrono::{SecondsFormat, Utc};

use super::escape::html_escape;
use super::exporter::Exporter;
use super::render::CellStrategy;
use crate::error::Result;
use crate::record::{column_set, Record};

/// Stylesheet the exported document links to by default
const DEFAULT_STYLESHEET_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";

/// HTML exporter
///
/// Produces one static document containing a table: a header row from
/// the column set and one body row per record, with cell content
/// decided per field by [`CellStrategy`]. Row and column order follow
/// the input; sorting is the caller's concern.
pub struct HtmlExporter {
    /// External stylesheet reference for the document head
    stylesheet_url: String,
}

impl HtmlExporter {
    /// Create a new HTML exporter with default settings
    pub fn new() -> Self {
        Self {
            stylesheet_url: DEFAULT_STYLESHEET_URL.to_string(),
        }
    }

    /// Set the external stylesheet reference
    pub fn with_stylesheet(mut self, url: impl Into<String>) -> Self {
        self.stylesheet_url = url.into();
        self
    }

    /// Render the header row from the column set
    fn render_header(&self, columns: &[String]) -> String {
        let mut row = String::from("<tr>");
        for column in columns {
            row.push_str("<th>");
            row.push_str(&html_escape(column));
            row.push_str("</th>");
        }
        row.push_str("</tr>");
        row
    }

    /// Render one body row, one cell per column
    fn render_row(&self, record: &Record, columns: &[String]) -> Result<String> {
        let mut row = String::from("<tr>");
        for column in columns {
            let cell = CellStrategy::for_field(column).render(record.get(column))?;
            row.push_str("<td>");
            row.push_str(&cell);
            row.push_str("</td>");
        }
        row.push_str("</tr>");
        Ok(row)
    }

    /// Render the table element
    fn render_table(&self, records: &[Record]) -> Result<String> {
        let columns = column_set(records);

        let mut table = String::from(r#"<table class="table table-striped"><thead>"#);
        table.push_str(&self.render_header(&columns));
        table.push_str("</thead><tbody>");
        for record in records {
            table.push_str(&self.render_row(record, &columns)?);
        }
        table.push_str("</tbody></table>");
        Ok(table)
    }
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for HtmlExporter {
    fn export(&self, records: &[Record]) -> Result<String> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let table = self.render_table(records)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Exported Data {timestamp}</title>
    <link rel="stylesheet" href="{stylesheet}">
  </head>
  <body>
    {table}
  </body>
</html>
"#,
            timestamp = timestamp,
            stylesheet = html_escape(&self.stylesheet_url),
            table = table,
        ))
    }

    fn format_name(&self) -> &str {
        "html"
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        match value {
            serde_json::Value::Object(map) => Record(map),
            _ => panic!("test records must be JSON objects"),
        }
    }

    #[test]
    fn test_html_exporter_metadata() {
        let exporter = HtmlExporter::new();
        assert_eq!(exporter.format_name(), "html");
        assert_eq!(exporter.file_extension(), "html");
        assert!(!exporter.prepend_bom());
    }

    #[test]
    fn test_document_shell() {
        let exporter = HtmlExporter::new();
        let html = exporter.export(&[]).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="utf-8">"#));
        assert!(html.contains("<title>Exported Data "));
        assert!(html.contains(DEFAULT_STYLESHEET_URL));
    }

    #[test]
    fn test_export_empty_dataset() {
        let exporter = HtmlExporter::new();
        let html = exporter.export(&[]).unwrap();

        // Empty header row, no body rows.
        assert!(html.contains("<thead><tr></tr></thead>"));
        assert!(html.contains("<tbody></tbody>"));
    }

    #[test]
    fn test_header_row_from_first_record() {
        let exporter = HtmlExporter::new();
        let records = vec![record(json!({"id": "1", "full_text": "a", "url": "u"}))];

        let html = exporter.export(&records).unwrap();
        assert!(html.contains("<th>id</th><th>full_text</th><th>url</th>"));
    }

    #[test]
    fn test_every_row_has_one_cell_per_column() {
        let exporter = HtmlExporter::new();
        let records = vec![
            record(json!({"id": "1", "screen_name": "alice"})),
            record(json!({"id": "2"})),
            record(json!({"screen_name": "carol", "extra": true})),
        ];

        let html = exporter.export(&records).unwrap();
        assert_eq!(html.matches("<th>").count(), 2);
        assert_eq!(html.matches("<td>").count(), 6);
        // Keys outside the column set are not rendered.
        assert!(!html.contains("extra"));
    }

    #[test]
    fn test_media_column_renders_one_linked_thumbnail() {
        let exporter = HtmlExporter::new();
        let records = vec![record(json!({
            "media": [{"thumbnail": "t.jpg", "original": "o.jpg"}],
        }))];

        let html = exporter.export(&records).unwrap();
        assert_eq!(html.matches(r#"href="o.jpg""#).count(), 1);
        assert_eq!(html.matches(r#"src="t.jpg""#).count(), 1);
    }

    #[test]
    fn test_custom_stylesheet() {
        let exporter = HtmlExporter::new().with_stylesheet("style.css");
        let html = exporter.export(&[]).unwrap();

        assert!(html.contains(r#"<link rel="stylesheet" href="style.css">"#));
        assert!(!html.contains(DEFAULT_STYLESHEET_URL));
    }

    #[test]
    fn test_table_is_striped() {
        let exporter = HtmlExporter::new();
        let html = exporter.export(&[]).unwrap();
        assert!(html.contains(r#"<table class="table table-striped">"#));
    }
}
