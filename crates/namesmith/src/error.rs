//! Error types for the namesmith crate.
//!
//! This module defines semantic error enums for style definitions and name
//! generation, following the project's error handling conventions with
//! `thiserror`. Running out of generation attempts is deliberately absent:
//! that path ends in a fallback name rather than an error.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when defining, loading or validating a style.
///
/// These errors cover catalogue file I/O, JSON parsing, schema validation
/// and the structural checks applied to every [`crate::PhoneticStyle`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The catalogue file could not be read.
    #[error("failed to read style catalogue at '{path}': {message}")]
    IoError {
        /// Path to the catalogue file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The catalogue JSON is malformed or missing required fields.
    #[error("invalid style catalogue JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The catalogue version is not supported.
    #[error("unsupported catalogue version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the catalogue.
        actual: u32,
    },

    /// The catalogue contains no style definitions.
    #[error("style catalogue contains no styles")]
    EmptyCatalogue,

    /// Two catalogue entries share a name.
    #[error("style '{name}' is defined more than once")]
    DuplicateStyle {
        /// The repeated style name.
        name: String,
    },

    /// A style has no templates to draw from.
    #[error("style '{style}' has no patterns")]
    NoPatterns {
        /// Name of the offending style.
        style: String,
    },

    /// The consonant or vowel set of a style is empty.
    #[error("style '{style}' has an empty {set} set")]
    EmptyCharacterSet {
        /// Name of the offending style.
        style: String,
        /// Which set is empty (`consonant` or `vowel`).
        set: &'static str,
    },

    /// A symbol key is not exactly one character.
    #[error("style '{style}' declares symbol '{symbol}', which is not a single character")]
    InvalidSymbol {
        /// Name of the offending style.
        style: String,
        /// The rejected symbol key.
        symbol: String,
    },

    /// A symbol class has nothing to draw from.
    #[error("style '{style}' declares an empty class for symbol '{symbol}'")]
    EmptySymbolClass {
        /// Name of the offending style.
        style: String,
        /// The symbol whose class is empty.
        symbol: char,
    },

    /// A substitution or mutation has an empty trigger.
    #[error("style '{style}' declares a rewrite with an empty trigger")]
    EmptyTrigger {
        /// Name of the offending style.
        style: String,
    },

    /// A mutation has no alternatives to choose from.
    #[error("style '{style}' declares mutation '{trigger}' without alternatives")]
    NoAlternatives {
        /// Name of the offending style.
        style: String,
        /// The mutation trigger.
        trigger: String,
    },

    /// A forbidden pattern is structurally unusable.
    #[error("style '{style}' declares an invalid forbidden pattern: {message}")]
    InvalidForbiddenPattern {
        /// Name of the offending style.
        style: String,
        /// Why the pattern was rejected.
        message: String,
    },
}

/// Errors that can occur while generating a name.
///
/// Exhausting the attempt budget is not an error; these variants cover
/// rejected request parameters and faults in the constraint repair loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The requested maximum length is below the minimum.
    #[error("invalid length bounds: max {max} is below min {min}")]
    InvalidLengthBounds {
        /// Requested minimum length.
        min: usize,
        /// Requested maximum length.
        max: usize,
    },

    /// A repair left a forbidden match in place.
    #[error("repair for rule '{rule}' made no progress on '{candidate}'")]
    RepairStalled {
        /// Description of the forbidden pattern.
        rule: String,
        /// The candidate the repair could not change.
        candidate: String,
    },

    /// The repair loop for a rule ran past its iteration cap.
    #[error("repair for rule '{rule}' exceeded {limit} iterations")]
    RepairLimitExceeded {
        /// Description of the forbidden pattern.
        rule: String,
        /// Number of repairs allowed.
        limit: usize,
    },
}
