//! Triple-S dictionary ingestion.
//!
//! Decodes a Triple-S XML survey metadata document into the
//! [`sss_model::Dictionary`] consumed by the syntax generator. Structural
//! binding follows the document shape `sss > survey > record > variable`;
//! malformed XML, missing required elements and non-integer positions are
//! reported as [`IngestError`]s and abort the run.

pub mod error;
pub mod reader;

pub use error::{IngestError, Result};
pub use reader::{load_dictionary, parse_dictionary};
