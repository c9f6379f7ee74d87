//! Phonetic style definitions.
//!
//! A [`PhoneticStyle`] bundles the templates, character sets and rewrite
//! rules that give one naming aesthetic its sound. Styles are assembled
//! with [`PhoneticStyleBuilder`], which validates the definition once so the
//! pipeline never has to.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::StyleError;

const STANDARD_VOWELS: &str = "aeiou";

/// Resolution rule for one template symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolClass {
    /// Sample one character uniformly from the set.
    OneOf(Vec<char>),
    /// Splice a fixed string.
    Literal(String),
    /// Sample one string uniformly from the list.
    Choice(Vec<String>),
}

impl SymbolClass {
    /// Builds a character-set class from the characters of `chars`.
    #[must_use]
    pub fn one_of(chars: &str) -> Self {
        Self::OneOf(chars.chars().collect())
    }

    /// Builds a fixed-literal class.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Builds a choice-list class.
    #[must_use]
    pub fn choice<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choice(options.into_iter().map(Into::into).collect())
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::OneOf(chars) => chars.is_empty(),
            Self::Literal(_) => false,
            Self::Choice(options) => options.is_empty(),
        }
    }
}

/// A set of characters matched either inclusively or exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    /// Matches any listed character.
    AnyOf(Vec<char>),
    /// Matches any character not listed.
    NoneOf(Vec<char>),
}

impl CharClass {
    /// Returns `true` if `c` belongs to the class.
    #[must_use]
    pub fn matches(&self, c: char) -> bool {
        match self {
            Self::AnyOf(chars) => chars.contains(&c),
            Self::NoneOf(chars) => !chars.contains(&c),
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnyOf(chars) => write!(f, "[{}]", chars.iter().collect::<String>()),
            Self::NoneOf(chars) => write!(f, "[^{}]", chars.iter().collect::<String>()),
        }
    }
}

/// A structural class of substring disallowed in a final name.
///
/// Matching is case-sensitive: the standard rules use lower-case `aeiou`,
/// so a capitalised initial vowel counts as a non-vowel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForbiddenPattern {
    /// `length` consecutive characters from `class`.
    Run {
        /// Characters making up the run.
        class: CharClass,
        /// Number of consecutive characters that triggers the rule.
        length: usize,
    },
    /// One character repeated `length` times in a row.
    Repeat {
        /// Number of identical characters that triggers the rule.
        length: usize,
    },
}

impl ForbiddenPattern {
    /// Three consecutive characters outside `aeiou`.
    #[must_use]
    pub fn consonant_cluster() -> Self {
        Self::Run {
            class: CharClass::NoneOf(STANDARD_VOWELS.chars().collect()),
            length: 3,
        }
    }

    /// Three consecutive characters from `aeiou`.
    #[must_use]
    pub fn vowel_cluster() -> Self {
        Self::Run {
            class: CharClass::AnyOf(STANDARD_VOWELS.chars().collect()),
            length: 3,
        }
    }

    /// Any character three times in a row.
    #[must_use]
    pub const fn triple_repeat() -> Self {
        Self::Repeat { length: 3 }
    }

    /// The rules applied when a style does not declare its own.
    #[must_use]
    pub fn standard() -> Vec<Self> {
        vec![
            Self::consonant_cluster(),
            Self::vowel_cluster(),
            Self::triple_repeat(),
        ]
    }

    /// Returns the number of characters a match spans.
    #[must_use]
    pub const fn length(&self) -> usize {
        match self {
            Self::Run { length, .. } | Self::Repeat { length } => *length,
        }
    }

    /// Finds the first (leftmost) match, returning its start index.
    #[must_use]
    pub fn find(&self, chars: &[char]) -> Option<usize> {
        let length = self.length();
        if length == 0 {
            return None;
        }
        chars.windows(length).position(|window| match self {
            Self::Run { class, .. } => window.iter().all(|&c| class.matches(c)),
            Self::Repeat { .. } => window
                .split_first()
                .is_some_and(|(first, rest)| rest.iter().all(|c| c == first)),
        })
    }
}

impl fmt::Display for ForbiddenPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Run { class, length } => write!(f, "run of {length} from {class}"),
            Self::Repeat { length } => write!(f, "{length} repeated characters"),
        }
    }
}

/// A literal rewrite applied to every candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Substring to replace.
    pub from: String,
    /// Replacement text.
    pub to: String,
}

/// A probabilistic rewrite applied when its trigger is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    /// Substring that enables the mutation.
    pub trigger: String,
    /// Candidate replacements, one chosen uniformly.
    pub alternatives: Vec<String>,
}

/// A named phonetic rule-set.
///
/// # Example
///
/// ```
/// use namesmith::{PhoneticStyle, SymbolClass};
///
/// let style = PhoneticStyle::builder("Dwarvish", ["CVrCVn", "ThVC"], "bdgkmnrt", "aiou")
///     .symbol('T', SymbolClass::literal("Th"))
///     .substitution("kk", "k")
///     .build()
///     .expect("valid style");
///
/// assert_eq!(style.name(), "Dwarvish");
/// assert_eq!(style.patterns().len(), 2);
/// assert_eq!(style.forbidden_patterns().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticStyle {
    name: String,
    patterns: Vec<String>,
    consonants: Vec<char>,
    vowels: Vec<char>,
    symbols: BTreeMap<char, SymbolClass>,
    forbidden_patterns: Vec<ForbiddenPattern>,
    substitutions: Vec<Substitution>,
    mutations: Vec<Mutation>,
}

impl PhoneticStyle {
    /// Starts a builder for a style with the required fields.
    #[must_use]
    pub fn builder<I, S>(
        name: impl Into<String>,
        patterns: I,
        consonants: &str,
        vowels: &str,
    ) -> PhoneticStyleBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PhoneticStyleBuilder {
            name: name.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            consonants: consonants.chars().collect(),
            vowels: vowels.chars().collect(),
            symbols: Vec::new(),
            forbidden_patterns: None,
            substitutions: Vec::new(),
            mutations: Vec::new(),
        }
    }

    /// Returns the style name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the templates, in registration order.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the generic consonant set.
    #[must_use]
    pub fn consonants(&self) -> &[char] {
        &self.consonants
    }

    /// Returns the generic vowel set.
    #[must_use]
    pub fn vowels(&self) -> &[char] {
        &self.vowels
    }

    /// Returns the declared class for `symbol`, if any.
    #[must_use]
    pub fn symbol_class(&self, symbol: char) -> Option<&SymbolClass> {
        self.symbols.get(&symbol)
    }

    /// Returns the forbidden patterns, in application order.
    #[must_use]
    pub fn forbidden_patterns(&self) -> &[ForbiddenPattern] {
        &self.forbidden_patterns
    }

    /// Returns the substitutions, in application order.
    #[must_use]
    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    /// Returns the mutations, in application order.
    #[must_use]
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }
}

/// Builder for [`PhoneticStyle`].
#[derive(Debug, Clone)]
pub struct PhoneticStyleBuilder {
    name: String,
    patterns: Vec<String>,
    consonants: Vec<char>,
    vowels: Vec<char>,
    symbols: Vec<(String, SymbolClass)>,
    forbidden_patterns: Option<Vec<ForbiddenPattern>>,
    substitutions: Vec<Substitution>,
    mutations: Vec<Mutation>,
}

impl PhoneticStyleBuilder {
    /// Declares how `symbol` resolves. A later declaration for the same
    /// symbol replaces an earlier one.
    #[must_use]
    pub fn symbol(self, symbol: char, class: SymbolClass) -> Self {
        self.symbol_key(symbol.to_string(), class)
    }

    /// Declares a symbol from a string key; `build` rejects keys that are
    /// not exactly one character.
    #[must_use]
    pub fn symbol_key(mut self, key: impl Into<String>, class: SymbolClass) -> Self {
        self.symbols.push((key.into(), class));
        self
    }

    /// Replaces the forbidden patterns. An empty list disables repair.
    #[must_use]
    pub fn forbidden_patterns<I>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = ForbiddenPattern>,
    {
        self.forbidden_patterns = Some(patterns.into_iter().collect());
        self
    }

    /// Appends one forbidden pattern, starting an explicit list on first use.
    #[must_use]
    pub fn forbid(mut self, pattern: ForbiddenPattern) -> Self {
        self.forbidden_patterns
            .get_or_insert_with(Vec::new)
            .push(pattern);
        self
    }

    /// Appends a substitution.
    #[must_use]
    pub fn substitution(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.substitutions.push(Substitution {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    /// Appends a mutation.
    #[must_use]
    pub fn mutation<I, S>(mut self, trigger: impl Into<String>, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mutations.push(Mutation {
            trigger: trigger.into(),
            alternatives: alternatives.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Produces the style without validation, for compiled-in definitions
    /// whose validity is covered by tests.
    pub(crate) fn build_unchecked(self) -> PhoneticStyle {
        PhoneticStyle {
            name: self.name,
            patterns: self.patterns,
            consonants: self.consonants,
            vowels: self.vowels,
            symbols: self
                .symbols
                .into_iter()
                .filter_map(|(key, class)| key.chars().next().map(|symbol| (symbol, class)))
                .collect(),
            forbidden_patterns: self
                .forbidden_patterns
                .unwrap_or_else(ForbiddenPattern::standard),
            substitutions: self.substitutions,
            mutations: self.mutations,
        }
    }

    /// Validates the definition and produces the style.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError`] if:
    /// - The style has no patterns
    /// - The consonant or vowel set is empty
    /// - A symbol key is not a single character, or its class is empty
    /// - A substitution or mutation trigger is empty
    /// - A mutation has no alternatives
    /// - A forbidden pattern has zero length
    pub fn build(self) -> Result<PhoneticStyle, StyleError> {
        let name = self.name;

        if self.patterns.is_empty() {
            return Err(StyleError::NoPatterns { style: name });
        }
        if self.consonants.is_empty() {
            return Err(StyleError::EmptyCharacterSet {
                style: name,
                set: "consonant",
            });
        }
        if self.vowels.is_empty() {
            return Err(StyleError::EmptyCharacterSet {
                style: name,
                set: "vowel",
            });
        }

        let mut symbols = BTreeMap::new();
        for (key, class) in self.symbols {
            let mut chars = key.chars();
            let (Some(symbol), None) = (chars.next(), chars.next()) else {
                return Err(StyleError::InvalidSymbol {
                    style: name,
                    symbol: key,
                });
            };
            if class.is_empty() {
                return Err(StyleError::EmptySymbolClass {
                    style: name,
                    symbol,
                });
            }
            symbols.insert(symbol, class);
        }

        if self.substitutions.iter().any(|s| s.from.is_empty()) {
            return Err(StyleError::EmptyTrigger { style: name });
        }
        for mutation in &self.mutations {
            if mutation.trigger.is_empty() {
                return Err(StyleError::EmptyTrigger { style: name });
            }
            if mutation.alternatives.is_empty() {
                return Err(StyleError::NoAlternatives {
                    style: name,
                    trigger: mutation.trigger.clone(),
                });
            }
        }

        let forbidden_patterns = self
            .forbidden_patterns
            .unwrap_or_else(ForbiddenPattern::standard);
        if forbidden_patterns.iter().any(|p| p.length() == 0) {
            return Err(StyleError::InvalidForbiddenPattern {
                style: name,
                message: "length must be at least 1".to_owned(),
            });
        }

        Ok(PhoneticStyle {
            name,
            patterns: self.patterns,
            consonants: self.consonants,
            vowels: self.vowels,
            symbols,
            forbidden_patterns,
            substitutions: self.substitutions,
            mutations: self.mutations,
        })
    }
}
