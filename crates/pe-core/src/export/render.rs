//! Per-field cell rendering for the HTML exporter

use serde_json::Value;

use super::escape::html_escape;
use crate::error::Result;

/// Rendering strategy for one HTML table cell
///
/// The field-name-to-strategy mapping is fixed and selected once per
/// cell via [`CellStrategy::for_field`]; nothing about it is
/// configurable at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStrategy {
    /// 50-wide image whose source is the field value
    Image,
    /// One linked thumbnail per media item
    LinkedGallery,
    /// Pre-trusted markup in a wrapping, width-capped paragraph
    PreformattedText,
    /// Closed-by-default disclosure revealing pretty-printed JSON
    CollapsibleJson,
    /// Hyperlink whose visible text is the URL itself
    Link,
    /// Plain text for strings, compact JSON for everything else
    Default,
}

impl CellStrategy {
    /// Select the strategy for a field name
    pub fn for_field(field: &str) -> Self {
        match field {
            "profile_image_url" | "profile_banner_url" => Self::Image,
            "media" => Self::LinkedGallery,
            "full_text" | "description" => Self::PreformattedText,
            "metadata" => Self::CollapsibleJson,
            "url" => Self::Link,
            _ => Self::Default,
        }
    }

    /// Render the inner HTML for one cell
    ///
    /// `None` means the record lacks the column's key. Missing or
    /// malformed sub-fields (e.g. a media item without a `thumbnail`)
    /// degrade to broken references or empty renderings, never errors.
    pub fn render(&self, value: Option<&Value>) -> Result<String> {
        match self {
            Self::Image => Ok(format!(
                r#"<img src="{}" width="50">"#,
                html_escape(&value_text(value))
            )),
            Self::LinkedGallery => render_gallery(value),
            Self::PreformattedText => {
                // Content is pre-trusted markup, inserted as-is.
                Ok(format!(
                    r#"<p style="white-space: pre-wrap; max-width: 640px">{}</p>"#,
                    value_text(value)
                ))
            }
            Self::CollapsibleJson => {
                let json = serde_json::to_string_pretty(value.unwrap_or(&Value::Null))?;
                Ok(format!(
                    "<details><summary>Expand</summary><pre>{}</pre></details>",
                    html_escape(&json)
                ))
            }
            Self::Link => {
                let url = html_escape(&value_text(value));
                Ok(format!(r#"<a href="{url}" target="_blank">{url}</a>"#))
            }
            Self::Default => match value {
                Some(Value::String(s)) => Ok(html_escape(s)),
                Some(v) => Ok(html_escape(&serde_json::to_string(v)?)),
                None => Ok(String::new()),
            },
        }
    }
}

/// Text form of a cell value: strings verbatim, anything else as
/// compact JSON, absent values as empty
fn value_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Render one linked thumbnail per media item
///
/// Empty or non-array values render nothing. Sub-fields are used
/// as-is: an item without `thumbnail` or `original` yields a broken
/// reference, not an error.
fn render_gallery(value: Option<&Value>) -> Result<String> {
    let Some(Value::Array(items)) = value else {
        return Ok(String::new());
    };

    let mut out = String::new();
    for item in items {
        let thumbnail = item.get("thumbnail").and_then(Value::as_str).unwrap_or_default();
        let original = item.get("original").and_then(Value::as_str).unwrap_or_default();
        out.push_str(&format!(
            r#"<a href="{}" target="_blank" style="margin-right: 0.5em"><img src="{}" width="50"></a>"#,
            html_escape(original),
            html_escape(thumbnail)
        ));
    }
    Ok(out)
}
