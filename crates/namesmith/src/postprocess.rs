//! Phonetic post-processing of raw candidates.
//!
//! Substitutions run first, unconditionally and in registration order.
//! Mutations then run in registration order over the progressively
//! rewritten string, each firing with [`MUTATION_CHANCE`] percent
//! probability when its trigger is present.

use crate::random::RandomSource;
use crate::style::PhoneticStyle;

/// Percentage chance that a present mutation trigger is rewritten.
pub const MUTATION_CHANCE: u32 = 80;

/// Applies `style`'s substitutions and mutations to `candidate`.
///
/// Replacement is literal and global: every non-overlapping occurrence of a
/// trigger is replaced.
pub fn apply_rewrites(candidate: &str, style: &PhoneticStyle, rng: &mut RandomSource) -> String {
    let substituted = style
        .substitutions()
        .iter()
        .fold(candidate.to_owned(), |text, rule| {
            text.replace(&rule.from, &rule.to)
        });

    style.mutations().iter().fold(substituted, |text, mutation| {
        if !text.contains(&mutation.trigger) || rng.below(100) >= MUTATION_CHANCE {
            return text;
        }
        let Some(replacement) = rng.pick(&mutation.alternatives) else {
            return text;
        };
        text.replace(&mutation.trigger, replacement)
    })
}
