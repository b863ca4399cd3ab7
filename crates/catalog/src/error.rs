//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or validating a university catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog JSON could not be decoded
    ///
    /// serde_json reports the line and column, which we keep for context
    #[error("Parse error at line {line}, column {column}: {reason}")]
    ParseError {
        line: usize,
        column: usize,
        reason: String,
    },

    /// Two records share the same id
    #[error("Duplicate university id: {id}")]
    DuplicateId { id: String },

    /// A record field had an invalid value
    #[error("Invalid value for {field} on {id}: {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::ParseError {
            line: err.line(),
            column: err.column(),
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
