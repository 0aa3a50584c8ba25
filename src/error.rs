//! Error types for pecas.

use std::io;
use thiserror::Error;

/// Result type alias for pecas operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while segmenting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// The PDF structure is corrupted or malformed.
    #[error("Corrupted PDF structure: {0}")]
    Corrupted(String),

    /// The document outline is missing or cannot be read.
    ///
    /// Not fatal: callers fall back to scanning page content.
    #[error("Document structure unavailable: {0}")]
    StructureUnavailable(String),

    /// Page index is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// A taxonomy header pattern failed to compile.
    #[error("Invalid header pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A taxonomy definition is inconsistent.
    #[error("Invalid taxonomy: {0}")]
    InvalidTaxonomy(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether this error only signals missing structure.
    pub fn is_structure_unavailable(&self) -> bool {
        matches!(self, Error::StructureUnavailable(_))
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
