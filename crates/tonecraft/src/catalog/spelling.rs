//! Per-language spelling normalizations.
//!
//! These are literal substring swaps that bring common variant spellings of
//! romanized text in line with the spelling the catalog phrases use. They are
//! deliberately tiny and not a transliteration scheme. Every source is longer
//! than its target, so applying a table twice changes nothing.

/// Substring replacements for a language, applied in order.
///
/// Returns an empty slice for languages without normalizations.
pub fn spelling_normalizations(lang: &str) -> &'static [(&'static str, &'static str)] {
    match lang {
        "hi" => &[("nahin", "nahi"), ("kyon", "kyun"), ("accha", "acha")],
        "te" => &[("ledhu", "ledu"), ("chaala", "chala")],
        "ta" => &[("illai", "illa"), ("rombha", "romba")],
        _ => &[],
    }
}
