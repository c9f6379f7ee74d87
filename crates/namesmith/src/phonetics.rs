//! Character helpers shared by the pipeline stages.
//!
//! Vowel checks here recognise the five Latin vowels in either case. The
//! letter `y` is sampled as a vowel by some styles but is never treated as
//! one at joins or cut points.

const VOWELS: &str = "aeiouAEIOU";

/// Returns `true` if `c` is one of `aeiou`, in either case.
///
/// # Examples
///
/// ```
/// use namesmith::is_vowel;
///
/// assert!(is_vowel('a'));
/// assert!(is_vowel('E'));
/// assert!(!is_vowel('y'));
/// assert!(!is_vowel('t'));
/// ```
#[must_use]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Upper-cases the first character and leaves the rest untouched.
#[must_use]
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Upper-cases the first character and lower-cases the rest.
#[must_use]
pub(crate) fn capitalize_only_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Counts characters rather than bytes.
#[must_use]
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
