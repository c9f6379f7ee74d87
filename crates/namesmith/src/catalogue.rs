//! Style catalogue types and JSON parsing.
//!
//! A catalogue is a versioned JSON document listing style definitions.
//! Each entry is validated through [`crate::PhoneticStyleBuilder`], so a
//! loaded catalogue only ever holds usable styles.

use std::collections::{BTreeMap, HashSet};

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Deserialize;

use crate::error::StyleError;
use crate::style::{CharClass, ForbiddenPattern, PhoneticStyle, SymbolClass};

/// Current supported catalogue version.
const SUPPORTED_VERSION: u32 = 1;

/// A validated set of style definitions loaded from JSON.
///
/// # Example
///
/// ```
/// use namesmith::StyleCatalogue;
///
/// let json = r#"{
///     "version": 1,
///     "styles": [{
///         "name": "Dwarvish",
///         "patterns": ["CVrCVn", "ThVC"],
///         "consonants": "bdgkmnrt",
///         "vowels": "aiou",
///         "symbols": {"T": {"literal": "Th"}},
///         "substitutions": [{"from": "kk", "to": "k"}]
///     }]
/// }"#;
///
/// let catalogue = StyleCatalogue::from_json(json).expect("valid catalogue");
/// assert_eq!(catalogue.styles().len(), 1);
/// assert_eq!(catalogue.styles()[0].name(), "Dwarvish");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleCatalogue {
    version: u32,
    styles: Vec<PhoneticStyle>,
}

impl StyleCatalogue {
    /// Parses a catalogue from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - The styles array is empty
    /// - Two styles share a name
    /// - Any style fails validation
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let raw: RawCatalogue = serde_json::from_str(json).map_err(|e| StyleError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a catalogue from a JSON file inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, StyleError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| StyleError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawCatalogue) -> Result<Self, StyleError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(StyleError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }
        if raw.styles.is_empty() {
            return Err(StyleError::EmptyCatalogue);
        }

        let mut seen = HashSet::new();
        let styles = raw
            .styles
            .into_iter()
            .map(|entry| {
                if !seen.insert(entry.name.clone()) {
                    return Err(StyleError::DuplicateStyle { name: entry.name });
                }
                entry.into_style()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            version: raw.version,
            styles,
        })
    }

    /// Returns the catalogue version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the styles in file order.
    #[must_use]
    pub fn styles(&self) -> &[PhoneticStyle] {
        &self.styles
    }

    /// Consumes the catalogue, returning its styles.
    #[must_use]
    pub fn into_styles(self) -> Vec<PhoneticStyle> {
        self.styles
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalogue {
    version: u32,
    styles: Vec<RawStyle>,
}

/// Raw JSON representation of one style.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStyle {
    name: String,
    patterns: Vec<String>,
    consonants: String,
    vowels: String,
    #[serde(default)]
    symbols: BTreeMap<String, RawSymbolClass>,
    #[serde(default)]
    forbidden_patterns: Option<Vec<RawForbiddenPattern>>,
    #[serde(default)]
    substitutions: Vec<RawSubstitution>,
    #[serde(default)]
    mutations: Vec<RawMutation>,
}

impl RawStyle {
    fn into_style(self) -> Result<PhoneticStyle, StyleError> {
        let mut builder = PhoneticStyle::builder(
            self.name.clone(),
            self.patterns,
            &self.consonants,
            &self.vowels,
        );
        for (key, class) in self.symbols {
            builder = builder.symbol_key(key, class.into());
        }
        if let Some(raw_patterns) = self.forbidden_patterns {
            let patterns = raw_patterns
                .into_iter()
                .map(|raw| raw.into_pattern(&self.name))
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.forbidden_patterns(patterns);
        }
        for rule in self.substitutions {
            builder = builder.substitution(rule.from, rule.to);
        }
        for rule in self.mutations {
            builder = builder.mutation(rule.trigger, rule.alternatives);
        }
        builder.build()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
enum RawSymbolClass {
    OneOf(String),
    Literal(String),
    Choice(Vec<String>),
}

impl From<RawSymbolClass> for SymbolClass {
    fn from(raw: RawSymbolClass) -> Self {
        match raw {
            RawSymbolClass::OneOf(chars) => Self::one_of(&chars),
            RawSymbolClass::Literal(text) => Self::Literal(text),
            RawSymbolClass::Choice(options) => Self::Choice(options),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum RawForbiddenPattern {
    Run {
        #[serde(default, rename = "anyOf")]
        any_of: Option<String>,
        #[serde(default, rename = "noneOf")]
        none_of: Option<String>,
        length: usize,
    },
    Repeat {
        length: usize,
    },
}

impl RawForbiddenPattern {
    fn into_pattern(self, style: &str) -> Result<ForbiddenPattern, StyleError> {
        match self {
            Self::Run {
                any_of: Some(chars),
                none_of: None,
                length,
            } => Ok(ForbiddenPattern::Run {
                class: CharClass::AnyOf(chars.chars().collect()),
                length,
            }),
            Self::Run {
                any_of: None,
                none_of: Some(chars),
                length,
            } => Ok(ForbiddenPattern::Run {
                class: CharClass::NoneOf(chars.chars().collect()),
                length,
            }),
            Self::Run { .. } => Err(StyleError::InvalidForbiddenPattern {
                style: style.to_owned(),
                message: "a run needs exactly one of anyOf or noneOf".to_owned(),
            }),
            Self::Repeat { length } => Ok(ForbiddenPattern::Repeat { length }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSubstitution {
    from: String,
    to: String,
}

#[derive(Debug, Deserialize)]
struct RawMutation {
    trigger: String,
    alternatives: Vec<String>,
}
