//! Meaning-biased generation.
//!
//! Each letter stands for three concepts. Concepts mentioned in a meaning
//! text make their letters significant, and a generated name is nudged to
//! contain at least one of them. Letter presence is the only guarantee.

use tracing::debug;

use crate::error::GenerationError;
use crate::generator::{GenerationOptions, NameGenerator};
use crate::random::RandomSource;

const MEANING_MIN_LENGTH: usize = 4;
const MEANING_MAX_LENGTH: usize = 12;

/// Letters drawn when no concept matches.
const RANDOM_LETTER_COUNT: usize = 3;

const MEANINGS: [(char, [&str; 3]); 26] = [
    ('a', ["strength", "power", "courage"]),
    ('b', ["beauty", "grace", "elegance"]),
    ('c', ["wisdom", "knowledge", "intelligence"]),
    ('d', ["earth", "ground", "stability"]),
    ('e', ["air", "wind", "freedom"]),
    ('f', ["fire", "passion", "energy"]),
    ('g', ["growth", "nature", "life"]),
    ('h', ["healing", "health", "restoration"]),
    ('i', ["ice", "cold", "calm"]),
    ('j', ["justice", "fairness", "balance"]),
    ('k', ["kinship", "family", "community"]),
    ('l', ["light", "illumination", "truth"]),
    ('m', ["magic", "mystery", "wonder"]),
    ('n', ["night", "darkness", "shadow"]),
    ('o', ["order", "structure", "organization"]),
    ('p', ["protection", "safety", "security"]),
    ('q', ["quest", "journey", "adventure"]),
    ('r', ["royalty", "nobility", "leadership"]),
    ('s', ["spirit", "soul", "essence"]),
    ('t', ["time", "eternity", "persistence"]),
    ('u', ["unity", "harmony", "peace"]),
    ('v', ["victory", "triumph", "success"]),
    ('w', ["water", "flow", "adaptability"]),
    ('x', ["unknown", "mystery", "enigma"]),
    ('y', ["youth", "vitality", "energy"]),
    ('z', ["zeal", "passion", "intensity"]),
];

/// Returns the letters whose concepts appear in `meaning`, in alphabetical
/// order.
///
/// Matching is a case-insensitive substring search, so a concept embedded
/// in a longer word still counts.
///
/// # Example
///
/// ```
/// use namesmith::significant_letters;
///
/// assert_eq!(significant_letters("Courage and fire"), vec!['a', 'f']);
/// assert!(significant_letters("nothing relevant").is_empty());
/// ```
#[must_use]
pub fn significant_letters(meaning: &str) -> Vec<char> {
    let text = meaning.to_lowercase();
    MEANINGS
        .iter()
        .filter(|(_, concepts)| concepts.iter().any(|concept| text.contains(concept)))
        .map(|&(letter, _)| letter)
        .collect()
}

impl NameGenerator {
    /// Generates a name for `style` that contains a letter significant to
    /// `meaning`.
    ///
    /// The name comes from the regular pipeline with bounds `4..=12` and
    /// uniqueness on. If it contains no significant letter (ignoring case),
    /// one is inserted at a random interior position, which can push the
    /// result past 12 characters. The cache keeps the name as generated.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the style's constraint repair faults.
    pub fn generate_with_meaning(
        &mut self,
        meaning: &str,
        style: &str,
        seed: Option<u64>,
    ) -> Result<String, GenerationError> {
        let mut rng = RandomSource::from_optional_seed(seed);
        let mut letters = significant_letters(meaning);
        if letters.is_empty() {
            letters = (0..RANDOM_LETTER_COUNT).map(|_| rng.letter()).collect();
        }
        debug!(style = %style, letters = ?letters, "resolved significant letters");

        let options = GenerationOptions::default()
            .with_length_bounds(MEANING_MIN_LENGTH, MEANING_MAX_LENGTH)
            .with_seed(rng.seed());
        let name = self.generate(style, &options)?;

        let lowered = name.to_lowercase();
        if letters.iter().any(|&letter| lowered.contains(letter)) {
            return Ok(name);
        }

        let mut chars: Vec<char> = name.chars().collect();
        let position = rng.range(1, chars.len()).min(chars.len());
        let letter = rng.pick(&letters).copied().unwrap_or('a');
        chars.insert(position, letter);
        Ok(chars.into_iter().collect())
    }
}
