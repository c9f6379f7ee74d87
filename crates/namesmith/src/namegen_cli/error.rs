//! Error types for the name generator CLI.

use thiserror::Error;

use crate::error::{GenerationError, StyleError};

/// Errors surfaced by CLI parsing and execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
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
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// More than one of `--pattern`, `--merge` and `--meaning` was given.
    #[error("--pattern, --merge and --meaning cannot be combined")]
    ConflictingModes,
    /// The style catalogue could not be loaded.
    #[error("style error: {source}")]
    Style {
        /// Underlying style error.
        #[from]
        #[source]
        source: StyleError,
    },
    /// Name generation failed.
    #[error("generation error: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },
}
