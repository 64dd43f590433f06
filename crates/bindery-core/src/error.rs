//! Error types for bindery-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Bindery operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Bindery crates
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An article file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A metadata field the formatter cannot do without was absent.
    #[error("missing required metadata field '{field}' in {}", path.display())]
    MissingMetadata {
        /// Name of the missing field.
        field: String,
        /// Path of the article lacking the field.
        path: PathBuf,
    },

    /// Structured data could not be parsed into the requested shape.
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Build an [`Error::Io`] carrying the offending path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Build an [`Error::MissingMetadata`] for a field formatting requires.
    pub fn missing_metadata(field: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Error::MissingMetadata {
            field: field.into(),
            path: path.into(),
        }
    }

    /// Build an [`Error::Parse`] from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}
