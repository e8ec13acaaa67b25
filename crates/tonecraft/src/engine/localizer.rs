//! Language and register idioms.
//!
//! English is the source language: it has no profile and passes through
//! unchanged, as does any code without a profile. For other languages the
//! caller's text is first spelling-normalized, then wrapped in idioms chosen
//! per slot:
//!
//! - slot 1: greeting and modern phrase in front
//! - slot 2: filler and expression in front
//! - slot 3: greeting in front, ending behind
//! - slot 4: expression and modern phrase in front, ending behind
//!
//! Normalization never touches the injected idioms.

use crate::catalog::{LanguageProfile, spelling_normalizations};
use crate::engine::words::{TERMINAL_PUNCTUATION, lower_first_word};
use crate::types::Slot;

/// Localizes `text` with `profile`; `None` is the identity.
pub fn localize(text: &str, profile: Option<&LanguageProfile>, language: &str, slot: Slot) -> String {
    let Some(profile) = profile else {
        return text.to_string();
    };

    let normalized = normalize_spelling(text, language);
    let greeting = LanguageProfile::pick(&profile.greetings, slot);
    let expression = LanguageProfile::pick(&profile.expressions, slot);
    let modern_phrase = LanguageProfile::pick(&profile.modern_phrases, slot);
    let filler = LanguageProfile::pick(&profile.fillers, slot);
    let ending = LanguageProfile::pick(&profile.endings, slot);
    let (prefix, ending) = match slot.number() {
        1 => (vec![greeting, modern_phrase], None),
        2 => (vec![filler, expression], None),
        3 => (vec![greeting], ending),
        _ => (vec![expression, modern_phrase], ending),
    };

    let prefix: Vec<&str> = prefix.into_iter().flatten().collect();
    let body = if prefix.is_empty() {
        normalized
    } else {
        format!("{} {}", prefix.join(" "), lower_first_word(&normalized))
    };

    match ending {
        Some(ending) => append_ending(&body, ending),
        None => body,
    }
}

/// Applies the language's spelling normalizations in order.
pub fn normalize_spelling(text: &str, language: &str) -> String {
    spelling_normalizations(language)
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Inserts `ending` before any closing punctuation: "Te quiero!" becomes
/// "Te quiero, de verdad!".
fn append_ending(text: &str, ending: &str) -> String {
    let body = text.trim_end_matches(TERMINAL_PUNCTUATION);
    let punctuation = &text[body.len()..];
    format!("{body}, {ending}{punctuation}")
}
