//! Error types for conversion operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting a layout.
///
/// A source root that maps to no target element is not an error, see
/// [`crate::export::ExportOutcome::NoOutput`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Destination exists and overwriting was not requested
    #[error(
        "Output file '{}' already exists, pass --overwrite or delete the file",
        .0.display()
    )]
    PreconditionFailed(PathBuf),

    /// Source document is missing
    #[error("No file exists at input '{}'", .0.display())]
    InputNotFound(PathBuf),

    /// Source could not be parsed into a tree
    #[error("Parse error: {0}")]
    MalformedInput(String),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error while writing the target document
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<roxmltree::Error> for ConvertError {
    fn from(err: roxmltree::Error) -> Self {
        ConvertError::MalformedInput(format!("XML parsing error: {err}"))
    }
}
