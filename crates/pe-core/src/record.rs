//! Post record model
//!
//! A record is an open field-name-to-value mapping with no enforced
//! schema. Values are arbitrary JSON: primitives, nested objects
//! (e.g. metadata), or arrays of sub-objects (e.g. media items with
//! `thumbnail`/`original` URLs). Field sets may differ per record,
//! though in practice all records in a dataset share the keys of the
//! first one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One exportable post record
///
/// Key order is insertion order; tabular exports derive their column
/// layout from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value by name
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Set a field value, preserving first-insertion order
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.0.insert(field.into(), value);
    }

    /// Iterate over field names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record(map)
    }
}

/// Derive the ordered column set for tabular exports
///
/// The column set is the key list of the first record, in insertion
/// order. An empty dataset yields an empty column set.
pub fn column_set(records: &[Record]) -> Vec<String> {
    records
        .first()
        .map(|record| record.keys().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => Record(map),
            _ => panic!("test records must be JSON objects"),
        }
    }

    #[test]
    fn test_record_field_access() {
        let mut record = Record::new();
        assert!(record.is_empty());

        record.insert("id", json!("1700"));
        record.insert("favorite_count", json!(42));

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("id"), Some(&json!("1700")));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_record_transparent_serialization() {
        let record = record(json!({"id": "1", "full_text": "hello"}));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":"1","full_text":"hello"}"#);

        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_column_set_empty_dataset() {
        assert!(column_set(&[]).is_empty());
    }

    #[test]
    fn test_column_set_follows_first_record_order() {
        let records = vec![
            record(json!({"id": "1", "full_text": "a", "url": "u"})),
            record(json!({"url": "v", "extra": true})),
        ];

        assert_eq!(column_set(&records), vec!["id", "full_text", "url"]);
    }

    #[test]
    fn test_column_set_ignores_later_keys() {
        let records = vec![
            record(json!({"id": "1"})),
            record(json!({"id": "2", "media": []})),
        ];

        assert_eq!(column_set(&records), vec!["id"]);
    }
}
