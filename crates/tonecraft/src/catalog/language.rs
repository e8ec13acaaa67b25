use serde::{Deserialize, Serialize};

use crate::types::Slot;

/// A language the rewriter accepts, as offered to users.
///
/// Listing a code makes it supported even without a [`LanguageProfile`];
/// such languages pass through the localizer unchanged. `transliteration`
/// marks languages typed in romanized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub transliteration: bool,
}

/// Idioms injected when rewriting into a language or register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    #[serde(default)]
    pub greetings: Vec<String>,
    #[serde(default)]
    pub expressions: Vec<String>,
    #[serde(default)]
    pub endings: Vec<String>,
    #[serde(default)]
    pub modern_phrases: Vec<String>,
    #[serde(default)]
    pub fillers: Vec<String>,
}

impl LanguageProfile {
    /// Returns true if every list is empty.
    pub fn is_empty(&self) -> bool {
        self.greetings.is_empty()
            && self.expressions.is_empty()
            && self.endings.is_empty()
            && self.modern_phrases.is_empty()
            && self.fillers.is_empty()
    }

    /// Picks the entry for a slot: the slot's own position if present,
    /// otherwise the first entry, otherwise nothing.
    pub fn pick(list: &[String], slot: Slot) -> Option<&str> {
        list.get(slot.position())
            .or_else(|| list.first())
            .map(String::as_str)
    }
}
