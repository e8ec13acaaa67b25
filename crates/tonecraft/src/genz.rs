//! Gen-Z register transform.
//!
//! Rewrites a message in internet slang in three tiers of intensity. This is
//! a standalone text tool; the rewrite engine reaches the same register
//! through the `genz` language profile.

use crate::engine::replace_words;

const ABBREVIATIONS: [(&str, &str); 6] = [
    ("your", "ur"),
    ("you", "u"),
    ("are", "r"),
    ("because", "bc"),
    ("tonight", "tn"),
    ("tomorrow", "tmrw"),
];

const SLANG: [(&str, &str); 9] = [
    ("good", "fire 🔥"),
    ("great", "fire 🔥"),
    ("awesome", "fire 🔥"),
    ("bad", "mid"),
    ("terrible", "mid"),
    ("very", "lowkey"),
    ("really", "lowkey"),
    ("cool", "based"),
    ("nice", "based"),
];

const SIGN_OFF: &str = " no cap 💯";

/// Converts `text` to Gen-Z register.
///
/// - above 30: common abbreviations ("you" → "u", "tomorrow" → "tmrw")
/// - above 60: slang for evaluative words ("great" → "fire 🔥", "bad" → "mid")
/// - above 80: a closing "no cap 💯"
///
/// Matching is whole-word and ignores case.
///
/// ```
/// use tonecraft::genz::to_genz;
///
/// assert_eq!(to_genz("see you tomorrow", 50), "see u tmrw");
/// assert_eq!(to_genz("that was really good", 70), "that was lowkey fire 🔥");
/// assert_eq!(to_genz("see you tomorrow", 10), "see you tomorrow");
/// ```
pub fn to_genz(text: &str, intensity: u8) -> String {
    let mut result = text.to_string();
    if intensity > 30 {
        result = apply(&result, &ABBREVIATIONS);
    }
    if intensity > 60 {
        result = apply(&result, &SLANG);
    }
    if intensity > 80 {
        result.push_str(SIGN_OFF);
    }
    result
}

fn apply(text: &str, table: &[(&str, &str)]) -> String {
    table
        .iter()
        .fold(text.to_string(), |acc, (from, to)| replace_words(&acc, from, to))
}
