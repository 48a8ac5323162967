//! Error types for deck construction and serialization.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or serializing a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create or write the output file.
    #[error("Failed to write file: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP container error (for PPTX output).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML generation error (for PPTX output).
    #[error("XML error: {0}")]
    XmlError(String),

    /// An alpha channel was applied to a shape without a solid fill.
    #[error("Cannot apply alpha, shape has no solid fill: {0}")]
    MissingSolidFill(String),
}

impl From<std::fmt::Error> for Error {
    fn from(e: std::fmt::Error) -> Self {
        Error::XmlError(e.to_string())
    }
}
