//! Compiled-in styles registered at start-up.
//!
//! These are static configuration data. Symbols not listed in a style's
//! table fall through to `C`/`V` resolution or literal copying.

use crate::style::{CharClass, ForbiddenPattern, PhoneticStyle, SymbolClass};

/// Name of the built-in fantasy style, also the default style.
pub const FANTASY: &str = "Fantasy";

/// Name of the built-in science-fiction style.
pub const SCI_FI: &str = "SciFi";

/// Name of the built-in human style.
pub const HUMAN: &str = "Human";

/// Style used when a lookup names an unknown style.
pub const DEFAULT_STYLE: &str = FANTASY;

const ELVEN_PREFIXES: &[&str] = &[
    "Ael", "Aer", "Af", "Ah", "Al", "Am", "Ama", "An", "Ang", "Ansr", "Ar", "Ari", "Arn", "Aza",
    "Bael", "Cael",
];

/// Returns the three built-in styles.
pub(crate) fn builtin_styles() -> Vec<PhoneticStyle> {
    vec![fantasy(), sci_fi(), human()]
}

/// Returns the style used for unknown names.
pub(crate) fn default_style() -> PhoneticStyle {
    fantasy()
}

fn fantasy() -> PhoneticStyle {
    PhoneticStyle::builder(
        FANTASY,
        [
            "CVCVCa", "VCCVlor", "CVCVndil", "ElCVC", "CVCVthir", "GalCVC", "CVCrion", "AelVC",
            "CVlVn", "CVCVlis",
        ],
        "bcdflmnprstvz",
        "aeiouy",
    )
    .symbol('G', SymbolClass::one_of("gkqx"))
    .symbol('E', SymbolClass::choice(ELVEN_PREFIXES.iter().copied()))
    .substitution("cq", "c")
    .substitution("qc", "c")
    .substitution("dt", "t")
    .substitution("td", "d")
    .substitution("uo", "uo")
    .substitution("ji", "ji")
    .mutation("th", ["th"])
    .mutation("ch", ["ch"])
    .mutation("sh", ["sh"])
    .mutation("ph", ["f"])
    .build_unchecked()
}

fn sci_fi() -> PhoneticStyle {
    PhoneticStyle::builder(
        SCI_FI,
        [
            "CVx", "ZVCor", "CV-CV", "XVnCV", "CVCtrV", "VCto", "NeoCV", "CVCix", "TrVnCV", "CVCon",
        ],
        "bcdfgklmnprstvz",
        "aeiou",
    )
    .symbol('Z', SymbolClass::one_of("xz"))
    .symbol('X', SymbolClass::one_of("xkq"))
    .symbol('N', SymbolClass::literal("Neo"))
    .symbol('T', SymbolClass::literal("Tr"))
    .substitution("cq", "c")
    .substitution("qc", "c")
    .substitution("dt", "t")
    .substitution("td", "d")
    .mutation("tr", ["tr"])
    .mutation("kr", ["kr"])
    .mutation("vr", ["vr"])
    .build_unchecked()
}

fn human() -> PhoneticStyle {
    PhoneticStyle::builder(
        HUMAN,
        [
            "CVCVn", "CVCey", "CVCia", "JVCob", "CVCVl", "CVCVck", "CVCVs", "CVCVm", "CVCVth",
            "CVCVr",
        ],
        "bcdfghjklmnprstvw",
        "aeiouy",
    )
    .symbol('J', SymbolClass::one_of("jy"))
    .forbidden_patterns(
        ForbiddenPattern::standard()
            .into_iter()
            .chain([ForbiddenPattern::Run {
                class: CharClass::AnyOf("jqxz".chars().collect()),
                length: 2,
            }]),
    )
    .substitution("cq", "c")
    .substitution("qc", "c")
    .substitution("dt", "t")
    .substitution("td", "d")
    .substitution("nm", "m")
    .substitution("mn", "n")
    .mutation("th", ["th"])
    .mutation("ch", ["ch"])
    .mutation("sh", ["sh"])
    .mutation("ph", ["f"])
    .build_unchecked()
}
