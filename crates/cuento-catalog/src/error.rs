//! Catalog errors

use crate::kind::FieldKind;

/// Errors raised while assembling or loading a catalog set
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog has no values
    #[error("catalog '{field}' is empty")]
    Empty {
        /// Offending field
        field: FieldKind,
    },

    /// Catalog lists the same value twice
    #[error("catalog '{field}' lists '{value}' more than once")]
    DuplicateValue {
        /// Offending field
        field: FieldKind,
        /// Repeated value
        value: String,
    },

    /// Catalog contains an empty or whitespace-only value
    #[error("catalog '{field}' contains a blank value")]
    BlankValue {
        /// Offending field
        field: FieldKind,
    },

    /// Unrecognised context mode name
    #[error("unknown context mode: {0}")]
    UnknownContextMode(String),

    /// Unrecognised page mode name
    #[error("unknown page mode: {0}")]
    UnknownPageMode(String),

    /// JSON input could not be parsed
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// YAML input could not be parsed
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}
