//! Error types for dictionary ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a Triple-S dictionary.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to open or read the dictionary file.
    #[error("failed to read dictionary {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML or does not bind to the
    /// Triple-S structure.
    #[error("malformed Triple-S document: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// A variable is missing a required element or attribute.
    #[error("variable {variable}: missing {element}")]
    MissingElement { variable: String, element: String },

    /// A position or code attribute did not parse as an integer.
    #[error("invalid {attribute} value '{value}'")]
    InvalidNumber { attribute: String, value: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
