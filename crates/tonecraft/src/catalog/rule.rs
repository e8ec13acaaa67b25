use serde::{Deserialize, Serialize};

/// How one emotion reshapes a message.
///
/// - `starters`: opening frames, used by position (slot 1 takes the first,
///   slot 3 the second, slot 4 the third).
/// - `replacements`: `(from, to)` word substitutions, applied in order.
/// - `intensifiers`: adverbs for the reflective and compound frames.
/// - `endings`: emoji appended by the finisher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionTransformRule {
    #[serde(default)]
    pub starters: Vec<String>,
    #[serde(default)]
    pub replacements: Vec<(String, String)>,
    #[serde(default)]
    pub intensifiers: Vec<String>,
    #[serde(default)]
    pub endings: Vec<String>,
}

impl EmotionTransformRule {
    /// Returns true if the rule cannot change any text.
    pub fn is_empty(&self) -> bool {
        self.starters.is_empty()
            && self.replacements.is_empty()
            && self.intensifiers.is_empty()
            && self.endings.is_empty()
    }
}
