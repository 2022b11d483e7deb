//! Error types for dish conversion and collection writes.

use std::fmt::Display;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// A collection file could not be written in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to write '{path}': {message}")]
pub struct WriteError {
    /// Path that was being written.
    pub path: Utf8PathBuf,
    /// Description of the I/O failure.
    pub message: String,
}

impl WriteError {
    pub(crate) fn new(path: &Utf8Path, err: &impl Display) -> Self {
        Self {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Errors raised while turning tabular dish rows into JSON records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The source file could not be read.
    #[error("failed to read source file at '{path}': {message}")]
    ReadError {
        /// Path to the source file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The source contained no header row.
    #[error("source has no header row")]
    MissingHeader,

    /// The header row lacks a column every dish needs.
    #[error("source header is missing the '{column}' column")]
    MissingColumn {
        /// Name of the absent column.
        column: &'static str,
    },

    /// The converted records could not be encoded as JSON.
    #[error("failed to encode dishes as JSON: {message}")]
    EncodeError {
        /// Encoder error message.
        message: String,
    },

    /// The output collection could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_formats_path_and_message() {
        let err = WriteError {
            path: Utf8PathBuf::from("data/dishes.json"),
            message: "permission denied".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write 'data/dishes.json': permission denied"
        );
    }

    #[test]
    fn missing_column_names_the_column() {
        let err = ConversionError::MissingColumn {
            column: "ingredients",
        };
        assert_eq!(
            err.to_string(),
            "source header is missing the 'ingredients' column"
        );
    }

    #[test]
    fn write_failures_are_transparent() {
        let err = ConversionError::from(WriteError {
            path: Utf8PathBuf::from("out.json"),
            message: "disk full".to_owned(),
        });
        assert_eq!(err.to_string(), "failed to write 'out.json': disk full");
    }
}
