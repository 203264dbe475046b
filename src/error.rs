//! Error types for the pdfpluck library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfpluck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during image extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the document or writing an image.
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

    /// Error resolving an image XObject.
    #[error("Image extraction error: {0}")]
    ImageExtract(String),

    /// Error writing an extracted image to disk.
    #[error("Image write error for {filename}: {reason}")]
    ImageWrite { filename: String, reason: String },
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
