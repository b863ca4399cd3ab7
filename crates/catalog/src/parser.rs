//! Parser for catalog JSON files.
//!
//! A catalog file is a JSON array of university records:
//!
//! ```json
//! [
//!   { "id": "oxford", "name": "University of Oxford", "country": "United Kingdom", ... },
//!   { "id": "mit", "name": "Massachusetts Institute of Technology", ... }
//! ]
//! ```
//!
//! Parsing only decodes; integrity checks live in `Catalog::validate`.

use crate::error::{CatalogError, Result};
use crate::types::University;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Decode a JSON array of universities, keeping file order
pub fn parse_universities(json: &str) -> Result<Vec<University>> {
    let universities: Vec<University> = serde_json::from_str(json)?;
    Ok(universities)
}

/// Read and decode a catalog file
pub fn parse_file(path: &Path) -> Result<Vec<University>> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(err),
    })?;
    parse_universities(&content)
}
