//! Forbidden-pattern repair.
//!
//! Rules run in order. For each rule the first match is located, and every
//! occurrence of the matched text anywhere in the candidate is shortened to
//! its first two characters. This can touch regions far from the match.
//! The search repeats until the rule no longer matches.

use crate::error::GenerationError;
use crate::phonetics::char_len;
use crate::style::{ForbiddenPattern, PhoneticStyle};

/// Removes every forbidden pattern of `style` from `candidate`.
///
/// # Errors
///
/// Returns [`GenerationError::RepairStalled`] when a repair leaves the
/// candidate unchanged (for example a two-character rule, whose match is
/// already as short as a repair makes it), and
/// [`GenerationError::RepairLimitExceeded`] when a rule needs more repairs
/// than the candidate has characters.
///
/// # Example
///
/// ```
/// use namesmith::{ForbiddenPattern, PhoneticStyle, repair_candidate};
///
/// let style = PhoneticStyle::builder("Plain", ["CV"], "lrst", "ae")
///     .forbid(ForbiddenPattern::consonant_cluster())
///     .build()
///     .expect("valid style");
///
/// assert_eq!(repair_candidate("Melstra", &style).as_deref(), Ok("Melsa"));
/// ```
pub fn repair_candidate(candidate: &str, style: &PhoneticStyle) -> Result<String, GenerationError> {
    style
        .forbidden_patterns()
        .iter()
        .try_fold(candidate.to_owned(), |text, rule| repair_rule(text, rule))
}

fn repair_rule(mut text: String, rule: &ForbiddenPattern) -> Result<String, GenerationError> {
    let limit = char_len(&text).saturating_add(1);
    let mut repairs = 0_usize;

    loop {
        let chars: Vec<char> = text.chars().collect();
        let Some(start) = rule.find(&chars) else {
            return Ok(text);
        };
        if repairs >= limit {
            return Err(GenerationError::RepairLimitExceeded {
                rule: rule.to_string(),
                limit,
            });
        }

        let matched: String = chars.iter().skip(start).take(rule.length()).collect();
        let repaired = shorten_all(&text, &matched);
        if repaired == text {
            return Err(GenerationError::RepairStalled {
                rule: rule.to_string(),
                candidate: text,
            });
        }
        text = repaired;
        repairs = repairs.saturating_add(1);
    }
}

/// Replaces every occurrence of `matched` with its first two characters,
/// then collapses a three-fold repeat a second time in case the first pass
/// re-formed it from leftover characters.
fn shorten_all(text: &str, matched: &str) -> String {
    let head: String = matched.chars().take(2).collect();
    let mut out = text.to_owned();
    if char_len(matched) > 2 {
        out = out.replace(matched, &head);
    }
    if is_triple(matched) {
        out = out.replace(matched, &head);
    }
    out
}

fn is_triple(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), Some(c), None) => a == b && b == c,
        _ => false,
    }
}
