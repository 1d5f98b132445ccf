//! Error types for post-exporter

use thiserror::Error;

/// Main error type for post-exporter
#[derive(Debug, Error)]
pub enum ExportError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Unknown export format
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    /// Invalid dataset contents
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ExportError>,
    },
}

impl ExportError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ExportError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for post-exporter
pub type Result<T> = std::result::Result<T, ExportError>;
