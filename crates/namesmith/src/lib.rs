//! Seeded, pattern-driven synthesis of pronounceable names.
//!
//! Names are built from templates such as `CVCVn`, where `C` and `V` draw
//! from a style's consonant and vowel sets and other symbols either map to
//! a style-specific class or are copied literally. Each candidate then
//! passes through rewrites, forbidden-pattern repair and length
//! normalisation before it is checked against a per-style uniqueness cache.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Three built-in styles (`Fantasy`, `SciFi`, `Human`) plus styles defined
//!   in code or loaded from a JSON catalogue
//! - Reproducible output for a fixed seed
//! - Per-style uniqueness with a bounded retry budget and fallback names
//! - Custom template expansion, two-name hybrids and meaning-biased names
//!
//! # Example
//!
//! ```
//! use namesmith::{GenerationOptions, NameGenerator, SCI_FI};
//!
//! let mut generator = NameGenerator::new();
//! let options = GenerationOptions::default().with_length_bounds(5, 8).with_seed(42);
//!
//! let names = generator
//!     .generate_multiple(3, SCI_FI, &options)
//!     .expect("generation succeeds");
//!
//! assert_eq!(names.len(), 3);
//! assert_eq!(generator.generated_names(SCI_FI).len(), 3);
//! ```

mod builtin;
mod cache;
mod catalogue;
mod constraint;
mod error;
mod expander;
mod generator;
mod hybrid;
mod length;
mod meaning;
pub mod namegen_cli;
mod phonetics;
mod postprocess;
mod random;
mod registry;
mod shared;
mod style;

pub use builtin::{DEFAULT_STYLE, FANTASY, HUMAN, SCI_FI};
pub use cache::NameCache;
pub use catalogue::StyleCatalogue;
pub use constraint::repair_candidate;
pub use error::{GenerationError, StyleError};
pub use expander::{CONSONANT_SYMBOL, VOWEL_SYMBOL, expand_template, generate_from_custom_pattern};
pub use generator::{
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, FALLBACK_PREFIX, GeneratedName, GenerationOptions,
    MAX_ATTEMPTS, NameGenerator,
};
pub use hybrid::merge_names;
pub use length::{normalize_length, pad_candidate, truncate_candidate};
pub use meaning::significant_letters;
pub use phonetics::is_vowel;
pub use postprocess::{MUTATION_CHANCE, apply_rewrites};
pub use random::RandomSource;
pub use registry::StyleRegistry;
pub use shared::SharedNameGenerator;
pub use style::{
    CharClass, ForbiddenPattern, Mutation, PhoneticStyle, PhoneticStyleBuilder, Substitution,
    SymbolClass,
};
