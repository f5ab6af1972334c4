//! Error types for the WebP converter.
//!
//! Per-file failures (`Decode`, `Encode`, `IO`, `Format`) are caught by the
//! batch processor and logged. Run-level failures (`RootNotFound`, `Walk`)
//! propagate to the caller and end the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the converter.
#[derive(Error, Debug)]
pub enum ConverterError {
    /// The source file could not be opened as an image
    #[error("Decode error: {0}")]
    Decode(String),

    /// WebP encoding failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// Extension outside the conversion allow-list
    #[error("Format error: {0}")]
    Format(String),

    /// Conversion aborted inside the codec
    #[error("Processing error: {0}")]
    Processing(String),

    /// Directory traversal failed
    #[error("Walk error: {0}")]
    Walk(String),

    /// Root directory is missing or not a directory
    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
}

/// Convenience result type for converter operations.
pub type ConverterResult<T> = Result<T, ConverterError>;

impl ConverterError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    pub fn walk<T: Into<String>>(msg: T) -> Self {
        Self::Walk(msg.into())
    }

    /// Whether the error ends the whole run rather than a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Walk(_) | Self::RootNotFound(_))
    }
}

impl From<io::Error> for ConverterError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

impl From<walkdir::Error> for ConverterError {
    fn from(err: walkdir::Error) -> Self {
        match err.path() {
            Some(path) => Self::Walk(format!("{}: {}", path.display(), err)),
            None => Self::Walk(err.to_string()),
        }
    }
}
