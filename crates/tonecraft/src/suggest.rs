//! Tone-driven word suggestions and tone phrases.
//!
//! These back the "suggestion chips" and "adjust tone" actions of a typing
//! surface: cheap, catalog-free helpers that react to the selected tone and
//! emotions without running the rewrite pipeline.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::types::Emotion;

/// Most suggestions returned at once.
pub const MAX_SUGGESTIONS: usize = 4;

/// The overall register a sender wants to write in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Casual,
    Professional,
    Friendly,
    Formal,
    Enthusiastic,
    Romantic,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Casual,
        Tone::Professional,
        Tone::Friendly,
        Tone::Formal,
        Tone::Enthusiastic,
        Tone::Romantic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Casual => "casual",
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Romantic => "romantic",
        }
    }

    /// Single words offered while typing in this tone.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            Tone::Professional => &["regarding", "furthermore", "accordingly", "therefore"],
            Tone::Casual => &["btw", "lol", "tbh", "ngl"],
            Tone::Romantic => &["darling", "sweetheart", "beautiful", "amazing"],
            Tone::Friendly | Tone::Formal | Tone::Enthusiastic => &[],
        }
    }

    /// Phrases appended by "adjust tone".
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            Tone::Professional => &["regarding", "furthermore", "I would like to", "Please consider"],
            Tone::Casual => &["hey", "btw", "just saying", "lol"],
            Tone::Friendly => &["hope you're doing well", "looking forward to", "would love to"],
            Tone::Formal => &["I am writing to", "Thank you for your consideration", "Sincerely"],
            Tone::Enthusiastic => &["Amazing!", "So excited about", "Can't wait to", "This is incredible!"],
            Tone::Romantic => &["my love", "sweetheart", "you mean everything to me", "forever yours"],
        }
    }
}

impl Display for Tone {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown tone '{s}'"))
    }
}

/// Words to offer for the current tone and emotions, at most
/// [`MAX_SUGGESTIONS`].
///
/// Tone words come first; a cheerful mood (Happy above 50) adds exclamations.
///
/// ```
/// use tonecraft::suggest::suggestions;
/// use tonecraft::{Tone, emotions};
///
/// let happy = emotions! { "Happy" => 70 };
/// assert_eq!(suggestions(Tone::Friendly, &happy), ["awesome!", "fantastic!", "love it!"]);
/// assert_eq!(suggestions(Tone::Casual, &happy), ["btw", "lol", "tbh", "ngl"]);
/// ```
pub fn suggestions(tone: Tone, emotions: &[Emotion]) -> Vec<&'static str> {
    let mut words: Vec<&'static str> = tone.words().to_vec();
    let cheerful = emotions
        .iter()
        .any(|emotion| emotion.name() == "Happy" && emotion.intensity() > 50);
    if cheerful {
        words.extend(["awesome!", "fantastic!", "love it!"]);
    }
    words.truncate(MAX_SUGGESTIONS);
    words
}

/// A random phrase for `tone`.
pub fn tone_phrase<R: Rng + ?Sized>(tone: Tone, rng: &mut R) -> &'static str {
    tone.phrases().choose(rng).copied().unwrap_or_default()
}

/// Appends a random phrase for `tone` to `text`, separated by one space.
pub fn apply_tone<R: Rng + ?Sized>(text: &str, tone: Tone, rng: &mut R) -> String {
    let phrase = tone_phrase(tone, rng);
    let text = text.trim_end();
    if text.is_empty() {
        phrase.to_string()
    } else {
        format!("{text} {phrase}")
    }
}
