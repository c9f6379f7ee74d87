//! Two-name hybridisation.

use crate::phonetics::{capitalize_only_first, is_vowel};
use crate::random::RandomSource;

const JOIN_VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Merges the front of `first` with the back of `second`.
///
/// The cut in `first` falls in its second half and the cut in `second` in
/// its first half. At the join, vowels from `second` are dropped while both
/// neighbours are vowels, and a random vowel is inserted when three
/// non-vowels would meet across it. The result is capitalised with the rest
/// lower-cased.
///
/// # Example
///
/// ```
/// use namesmith::merge_names;
///
/// let hybrid = merge_names("Aldric", "Thoralin", Some(1));
///
/// assert_eq!(hybrid, merge_names("Aldric", "Thoralin", Some(1)));
/// assert!(hybrid.starts_with("Ald"));
/// ```
#[must_use]
pub fn merge_names(first: &str, second: &str, seed: Option<u64>) -> String {
    let mut rng = RandomSource::from_optional_seed(seed);
    let first_chars: Vec<char> = first.chars().collect();
    let second_chars: Vec<char> = second.chars().collect();

    let first_cut = rng.range(half(first_chars.len()), first_chars.len());
    let second_cut = rng
        .range(1, half(second_chars.len()))
        .min(second_chars.len());

    let (hybrid, _) = splice(&first_chars, &second_chars, first_cut, second_cut, &mut rng);
    capitalize_only_first(&hybrid.into_iter().collect::<String>())
}

/// Joins `first[..first_cut]` and `second[second_cut..]`, smoothing the
/// join. Returns the characters and the final join index.
pub(crate) fn splice(
    first: &[char],
    second: &[char],
    first_cut: usize,
    second_cut: usize,
    rng: &mut RandomSource,
) -> (Vec<char>, usize) {
    let mut hybrid: Vec<char> = first
        .iter()
        .take(first_cut)
        .chain(second.iter().skip(second_cut))
        .copied()
        .collect();
    let join = first_cut.min(hybrid.len());
    if join == 0 {
        return (hybrid, join);
    }

    while vowel_at(&hybrid, join - 1) && vowel_at(&hybrid, join) {
        hybrid.remove(join);
    }

    let left_cluster = join >= 2 && consonants_from(&hybrid, join - 2);
    let right_cluster = consonants_from(&hybrid, join - 1);
    if left_cluster || right_cluster {
        let vowel = rng.pick(&JOIN_VOWELS).copied().unwrap_or('a');
        hybrid.insert(join, vowel);
    }

    (hybrid, join)
}

const fn half(len: usize) -> usize {
    len >> 1
}

fn vowel_at(chars: &[char], index: usize) -> bool {
    chars.get(index).is_some_and(|&c| is_vowel(c))
}

/// Returns `true` if three non-vowels start at `start`.
fn consonants_from(chars: &[char], start: usize) -> bool {
    chars
        .get(start..start.saturating_add(3))
        .is_some_and(|window| window.len() == 3 && window.iter().all(|&c| !is_vowel(c)))
}
