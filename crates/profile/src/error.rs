//! Error types for building and reading student profiles.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    /// A field the profile form requires was left empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// `key=value` update named a field that does not exist
    #[error("Unknown profile field: {0}")]
    UnknownField(String),

    /// A value could not be parsed for the named field
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The profile JSON could not be decoded
    #[error("Invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
