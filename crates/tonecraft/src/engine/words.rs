//! Word-level text helpers shared by the pipeline stages.
//!
//! Word boundaries follow UAX #29 via `unicode-segmentation`, so contractions
//! such as "I'm" or "can't" are single words and punctuation never sticks to
//! a match. Case mapping goes through ICU so non-ASCII scripts capitalize
//! correctly.

use icu_casemap::CaseMapper;
use icu_locale_core::langid;
use unicode_segmentation::UnicodeSegmentation;

/// Characters that end a sentence.
pub const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

/// Replaces whole-word, case-insensitive occurrences of `from` with `to`.
///
/// `from` may span several words ("going to"); it then matches the same
/// sequence of words and separators. A match that starts with an upper-case
/// letter gets an upper-cased replacement head, so "Like" becomes "Adore"
/// rather than "adore".
pub fn replace_words(text: &str, from: &str, to: &str) -> String {
    let pattern: Vec<String> = from.trim().split_word_bounds().map(str::to_lowercase).collect();
    if !pattern.iter().any(|segment| is_word(segment)) {
        return text.to_string();
    }

    let segments: Vec<&str> = text.split_word_bounds().collect();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;
    while i < segments.len() {
        let end = i + pattern.len();
        let matched = end <= segments.len()
            && segments[i..end]
                .iter()
                .zip(&pattern)
                .all(|(segment, expected)| segment.to_lowercase() == *expected);
        if matched {
            result.push_str(&match_leading_case(segments[i], to));
            i = end;
        } else {
            result.push_str(segments[i]);
            i += 1;
        }
    }
    result
}

/// Replaces words exactly equal to `word` (case-sensitive) with `replacement`.
pub fn replace_exact_word(text: &str, word: &str, replacement: &str) -> String {
    text.split_word_bounds()
        .map(|segment| if segment == word { replacement } else { segment })
        .collect()
}

fn match_leading_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        capitalize_first(replacement)
    } else {
        replacement.to_string()
    }
}

/// Upper-cases the first grapheme of `text`.
pub fn capitalize_first(text: &str) -> String {
    let Some(first) = text.graphemes(true).next() else {
        return String::new();
    };
    let upper = CaseMapper::new().uppercase_to_string(first, &langid!("en"));
    format!("{upper}{}", &text[first.len()..])
}

/// Lower-cases the first grapheme of `text` so it can follow a prefix.
///
/// Leaves the text alone when it starts with the pronoun "I" (or a contraction
/// of it), with an all-caps word such as an acronym, or with a capitalized word
/// that appears capitalized again later in the text ("Sarah met Sarah's
/// sister"), which marks it as a name.
///
/// There is no name dictionary, so a proper noun that occurs only once at the
/// start is lowercased: "Sarah is lovely" becomes "sarah is lovely".
pub fn lower_first_word(text: &str) -> String {
    let Some(first_word) = text.split_word_bounds().next() else {
        return String::new();
    };
    let is_pronoun = first_word == "I" || first_word.starts_with("I'") || first_word.starts_with("I\u{2019}");
    let letters: Vec<char> = first_word.chars().filter(|c| c.is_alphabetic()).collect();
    let is_acronym = letters.len() > 1 && letters.iter().all(|c| c.is_uppercase());
    if is_pronoun || is_acronym || is_repeated_name(text, first_word) {
        return text.to_string();
    }

    let Some(first) = text.graphemes(true).next() else {
        return String::new();
    };
    let lower = CaseMapper::new().lowercase_to_string(first, &langid!("en"));
    format!("{lower}{}", &text[first.len()..])
}

/// Returns true if capitalized `word` starts `text` and occurs again later,
/// alone or with a possessive suffix.
fn is_repeated_name(text: &str, word: &str) -> bool {
    if !word.chars().next().is_some_and(char::is_uppercase) {
        return false;
    }
    text.split_word_bounds().skip(1).any(|later| {
        later == word
            || later
                .strip_prefix(word)
                .is_some_and(|rest| rest == "'s" || rest == "\u{2019}s")
    })
}

/// Splits `text` into its body and a tail of trailing emoji and whitespace.
///
/// ```
/// use tonecraft::engine::split_trailing_emoji;
///
/// assert_eq!(split_trailing_emoji("See you soon 💕✨"), ("See you soon", " 💕✨"));
/// assert_eq!(split_trailing_emoji("No emoji."), ("No emoji.", ""));
/// ```
pub fn split_trailing_emoji(text: &str) -> (&str, &str) {
    let mut cut = text.len();
    for (index, grapheme) in text.grapheme_indices(true).rev() {
        let is_space = grapheme.chars().all(char::is_whitespace);
        let is_emoji = grapheme.chars().next().is_some_and(is_pictographic);
        if !(is_space || is_emoji) {
            break;
        }
        cut = index;
    }
    text.split_at(cut)
}

/// Returns true if `text`, ignoring trailing emoji, ends a sentence.
pub fn ends_with_terminal(text: &str) -> bool {
    split_trailing_emoji(text).0.ends_with(TERMINAL_PUNCTUATION)
}

/// Rough check for characters that start an emoji grapheme.
fn is_pictographic(c: char) -> bool {
    matches!(
        u32::from(c),
        0x1F000..=0x1FAFF | 0x2600..=0x27BF | 0x2300..=0x23FF | 0x2B00..=0x2BFF | 0x3030 | 0x303D
            | 0x3297 | 0x3299 | 0x00A9 | 0x00AE | 0x2122 | 0x2190..=0x21FF
    )
}
