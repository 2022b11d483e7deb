//! Error types for the dish conversion CLI.

use thiserror::Error;

use crate::error::ConversionError;

/// Errors surfaced while parsing arguments or running a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A required flag was not supplied.
    #[error("missing required flag: {flag}")]
    MissingFlag {
        /// Flag that must be present.
        flag: &'static str,
    },
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// The conversion itself failed.
    #[error("conversion failed: {source}")]
    Conversion {
        /// Underlying conversion error.
        #[from]
        #[source]
        source: ConversionError,
    },
}
