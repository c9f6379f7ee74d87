//! Length normalisation.
//!
//! Short candidates gain one freshly expanded suffix; long candidates are
//! cut, preferring a cut point just after a vowel. Neither step guarantees
//! the bounds are met; the retry loop checks the final length.

use crate::expander::expand_template;
use crate::phonetics::{char_len, is_vowel};
use crate::random::RandomSource;
use crate::style::PhoneticStyle;

/// Pads `candidate` when shorter than `min` and truncates it when longer
/// than `max`.
pub fn normalize_length(
    candidate: String,
    style: &PhoneticStyle,
    rng: &mut RandomSource,
    min: usize,
    max: usize,
) -> String {
    let padded = if char_len(&candidate) < min {
        pad_candidate(candidate, style, rng)
    } else {
        candidate
    };
    truncate_candidate(&padded, min, max)
}

/// Appends a lower-cased expansion of a randomly drawn template.
///
/// Only the expander runs for the suffix. When the join would place two
/// vowels side by side, the suffix loses its leading vowel.
pub fn pad_candidate(candidate: String, style: &PhoneticStyle, rng: &mut RandomSource) -> String {
    let Some(template) = rng.pick(style.patterns()) else {
        return candidate;
    };
    let suffix = expand_template(template, style, rng).to_lowercase();

    let ends_in_vowel = candidate.chars().last().is_some_and(is_vowel);
    let mut suffix_chars = suffix.chars();
    if ends_in_vowel && suffix.chars().next().is_some_and(is_vowel) {
        suffix_chars.next();
    }

    let mut padded = candidate;
    padded.extend(suffix_chars);
    padded
}

/// Cuts `candidate` down to at most `max` characters.
///
/// Cut points are tried from `max` down to `min`; the first whose previous
/// or second-previous character is a vowel wins. Without such a point the
/// candidate is cut at `max`.
///
/// # Example
///
/// ```
/// use namesmith::truncate_candidate;
///
/// assert_eq!(truncate_candidate("Thalindrasorn", 4, 8), "Thalin");
/// assert_eq!(truncate_candidate("Brynthstrk", 4, 6), "Brynth");
/// assert_eq!(truncate_candidate("Aldric", 4, 10), "Aldric");
/// ```
#[must_use]
pub fn truncate_candidate(candidate: &str, min: usize, max: usize) -> String {
    let chars: Vec<char> = candidate.chars().collect();
    if chars.len() <= max {
        return candidate.to_owned();
    }
    let cut = (min..=max)
        .rev()
        .find(|&cut| follows_vowel(&chars, cut))
        .unwrap_or(max);
    chars.iter().take(cut).collect()
}

fn follows_vowel(chars: &[char], cut: usize) -> bool {
    [1, 2].into_iter().any(|back| {
        cut.checked_sub(back)
            .and_then(|index| chars.get(index))
            .is_some_and(|&c| is_vowel(c))
    })
}
