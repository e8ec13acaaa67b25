//! Final formatting of a candidate.
//!
//! Steps run in a fixed order:
//!
//! 1. context rewrites ("I" becomes "I honestly" for shy or nervous senders)
//! 2. slot register: slot 2 contracts, slot 3 expands
//! 3. context prefixes ("Um, " on slot 1; "Hey, " / "Yo, " on slots 2 and 3)
//! 4. capitalization of the first grapheme
//! 5. terminal punctuation, ignoring trailing emoji
//! 6. slot 4 escalation: every "." becomes "!" above intensity 50
//! 7. a probabilistic emoji from the dominant emotion's endings

use rand::Rng;

use crate::engine::words::{
    capitalize_first, ends_with_terminal, lower_first_word, replace_exact_word, replace_words,
    split_trailing_emoji,
};
use crate::types::Slot;

const CONTRACTIONS: [(&str, &str); 5] = [
    ("I am", "I'm"),
    ("cannot", "can't"),
    ("do not", "don't"),
    ("it is", "it's"),
    ("will not", "won't"),
];

/// What the sender told us about the situation, reduced to the cues the
/// finisher reacts to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextCues {
    pub hesitant: bool,
    pub casual: bool,
}

impl ContextCues {
    /// Scans free-text context, ignoring case.
    pub fn from_context(context: &str) -> Self {
        let context = context.to_lowercase();
        Self {
            hesitant: context.contains("shy") || context.contains("nervous"),
            casual: context.contains("casual") || context.contains("friend"),
        }
    }
}

/// Finishes a candidate. Never fails; an empty `endings` list means no emoji.
pub fn finish<R: Rng + ?Sized>(
    text: &str,
    endings: &[String],
    intensity: u8,
    slot: Slot,
    context: &str,
    emoji_probability: f64,
    rng: &mut R,
) -> String {
    let cues = ContextCues::from_context(context);
    let mut result = text.trim().to_string();

    if cues.hesitant {
        result = replace_exact_word(&result, "I", "I honestly");
    }

    result = match slot.number() {
        2 => CONTRACTIONS
            .iter()
            .fold(result, |acc, (long, short)| replace_words(&acc, long, short)),
        3 => CONTRACTIONS
            .iter()
            .fold(result, |acc, (long, short)| replace_words(&acc, short, long)),
        _ => result,
    };

    let context_prefix = match slot.number() {
        1 if cues.hesitant => Some("Um,"),
        2 if cues.casual => Some("Hey,"),
        3 if cues.casual => Some("Yo,"),
        _ => None,
    };
    if let Some(context_prefix) = context_prefix {
        result = format!("{context_prefix} {}", lower_first_word(&result));
    }

    result = capitalize_first(&result);
    result = punctuate(&result, intensity);

    if slot == Slot::FOURTH && intensity > 50 {
        result = result.replace('.', "!");
    }

    let probability = if emoji_probability.is_nan() {
        0.0
    } else {
        emoji_probability.clamp(0.0, 1.0)
    };
    if !endings.is_empty() && rng.gen_bool(probability) {
        let emoji = &endings[usize::from(slot.number()) % endings.len()];
        result = format!("{result} {emoji}");
    }

    result
}

/// Appends "!" above intensity 70, otherwise ".", unless the text already
/// ends a sentence. Trailing emoji stay at the very end.
fn punctuate(text: &str, intensity: u8) -> String {
    if ends_with_terminal(text) {
        return text.to_string();
    }
    let (body, tail) = split_trailing_emoji(text);
    let mark = if intensity > 70 { '!' } else { '.' };
    format!("{body}{mark}{tail}")
}
