//! Template expansion.
//!
//! Each template character resolves through the style's symbol table first,
//! then through the reserved `C`/`V` symbols, and is otherwise copied
//! verbatim. The result has its first character upper-cased.

use crate::phonetics::capitalize_first;
use crate::random::RandomSource;
use crate::style::{PhoneticStyle, SymbolClass};

/// Reserved symbol for the style's consonant set.
pub const CONSONANT_SYMBOL: char = 'C';

/// Reserved symbol for the style's vowel set.
pub const VOWEL_SYMBOL: char = 'V';

/// Expands `template` into a raw candidate using `style`'s symbols.
///
/// An empty template yields an empty string. A symbol whose class has
/// nothing to draw from degrades to literal pass-through.
///
/// # Example
///
/// ```
/// use namesmith::{PhoneticStyle, RandomSource, expand_template};
///
/// let style = PhoneticStyle::builder("Tiny", ["CV"], "k", "a")
///     .build()
///     .expect("valid style");
/// let mut rng = RandomSource::from_seed(1);
///
/// assert_eq!(expand_template("CVrin", &style, &mut rng), "Karin");
/// ```
pub fn expand_template(template: &str, style: &PhoneticStyle, rng: &mut RandomSource) -> String {
    let mut raw = String::with_capacity(template.len());
    for symbol in template.chars() {
        resolve_symbol(symbol, style, rng, &mut raw);
    }
    capitalize_first(&raw)
}

/// Expands a one-off `pattern` against ad hoc character sets.
///
/// Only expansion runs: no rewrites, repair, length fitting or caching.
/// The sets are not validated, so an empty set leaves its symbol as a
/// literal.
///
/// # Example
///
/// ```
/// use namesmith::generate_from_custom_pattern;
///
/// let first = generate_from_custom_pattern("CVCCV", "bdr", "ao", Some(9));
/// let second = generate_from_custom_pattern("CVCCV", "bdr", "ao", Some(9));
///
/// assert_eq!(first, second);
/// assert_eq!(first.chars().count(), 5);
/// ```
#[must_use]
pub fn generate_from_custom_pattern(
    pattern: &str,
    consonants: &str,
    vowels: &str,
    seed: Option<u64>,
) -> String {
    let style = PhoneticStyle::builder("Custom", [pattern], consonants, vowels).build_unchecked();
    let mut rng = RandomSource::from_optional_seed(seed);
    expand_template(pattern, &style, &mut rng)
}

fn resolve_symbol(symbol: char, style: &PhoneticStyle, rng: &mut RandomSource, out: &mut String) {
    match style.symbol_class(symbol) {
        Some(SymbolClass::OneOf(chars)) => out.push(rng.pick(chars).copied().unwrap_or(symbol)),
        Some(SymbolClass::Literal(text)) => out.push_str(text),
        Some(SymbolClass::Choice(options)) => {
            let drawn = rng
                .pick(options)
                .map_or_else(|| symbol.to_string(), String::clone);
            out.push_str(&drawn);
        }
        None if symbol == CONSONANT_SYMBOL => {
            out.push(rng.pick(style.consonants()).copied().unwrap_or(symbol));
        }
        None if symbol == VOWEL_SYMBOL => {
            out.push(rng.pick(style.vowels()).copied().unwrap_or(symbol));
        }
        None => out.push(symbol),
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn single_choice_style() -> PhoneticStyle {
        PhoneticStyle::builder("Fixed", ["CV"], "t", "o")
            .symbol('G', SymbolClass::one_of("g"))
            .symbol('N', SymbolClass::literal("Neo"))
            .symbol('E', SymbolClass::choice(["Ael"]))
            .build()
            .expect("valid style")
    }

    #[rstest]
    #[case::generic("CVCV", "Toto")]
    #[case::literal_passthrough("CVrin", "Torin")]
    #[case::char_class("GVl", "Gol")]
    #[case::fixed_literal("NCV", "Neoto")]
    #[case::choice_list("ElCV", "Aellto")]
    #[case::empty("", "")]
    #[case::rest_untouched("vCV", "Vto")]
    fn expands_symbols(
        single_choice_style: PhoneticStyle,
        #[case] template: &str,
        #[case] expected: &str,
    ) {
        let mut rng = RandomSource::from_seed(3);
        assert_eq!(expand_template(template, &single_choice_style, &mut rng), expected);
    }

    #[test]
    fn symbol_table_overrides_reserved_symbols() {
        let style = PhoneticStyle::builder("Override", ["CV"], "t", "o")
            .symbol('C', SymbolClass::literal("Zh"))
            .build()
            .expect("valid style");
        let mut rng = RandomSource::from_seed(3);

        assert_eq!(expand_template("CV", &style, &mut rng), "Zho");
    }

    #[test]
    fn draws_only_from_declared_sets() {
        let style = PhoneticStyle::builder("Sets", ["CVCV"], "bdg", "ae")
            .build()
            .expect("valid style");
        let mut rng = RandomSource::from_seed(17);

        for _ in 0..100 {
            let name = expand_template("CVCV", &style, &mut rng).to_lowercase();
            let chars: Vec<char> = name.chars().collect();
            assert_eq!(chars.len(), 4);
            assert!(chars.iter().step_by(2).all(|c| "bdg".contains(*c)));
            assert!(chars.iter().skip(1).step_by(2).all(|c| "ae".contains(*c)));
        }
    }

    #[test]
    fn custom_pattern_uses_supplied_sets() {
        let name = generate_from_custom_pattern("CVCV", "z", "u", Some(1));
        assert_eq!(name, "Zuzu");
    }

    #[test]
    fn custom_pattern_skips_post_processing() {
        let name = generate_from_custom_pattern("Cxxx", "b", "a", None);
        assert_eq!(name, "Bxxx");
    }

    #[test]
    fn custom_pattern_with_empty_sets_passes_symbols_through() {
        let name = generate_from_custom_pattern("CVn", "", "", Some(2));
        assert_eq!(name, "CVn");
    }

    #[test]
    fn same_seed_expands_identically() {
        let style = PhoneticStyle::builder("Seeded", ["CVCVC"], "bcdfg", "aeiou")
            .build()
            .expect("valid style");
        let mut first = RandomSource::from_seed(2024);
        let mut second = RandomSource::from_seed(2024);

        assert_eq!(
            expand_template("CVCVC", &style, &mut first),
            expand_template("CVCVC", &style, &mut second)
        );
    }
}
