use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::EmotionCategory;

/// Upper bound of the intensity scale.
pub const MAX_INTENSITY: u8 = 100;

/// A selectable emotion together with how strongly it should come through.
///
/// Intensity is a percentage in `0..=100`; zero means the emotion is not
/// selected. Values above 100 are clamped on construction, on update and on
/// deserialization, so the invariant holds for every `Emotion` in existence.
/// A deserialized emotion without a category takes it from the built-in
/// catalog, like [`Emotion::named`].
///
/// # Example
///
/// ```
/// use tonecraft::{Emotion, EmotionCategory};
///
/// let romantic = Emotion::named("Romantic", 140);
/// assert_eq!(romantic.intensity(), 100);
/// assert_eq!(romantic.category(), EmotionCategory::Social);
/// assert!(romantic.is_selected());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEmotion")]
pub struct Emotion {
    name: String,
    intensity: u8,
    category: EmotionCategory,
}

/// Wire form of [`Emotion`], validated through its constructors.
#[derive(Deserialize)]
struct RawEmotion {
    name: String,
    intensity: u8,
    #[serde(default)]
    category: Option<EmotionCategory>,
}

impl From<RawEmotion> for Emotion {
    fn from(raw: RawEmotion) -> Self {
        match raw.category {
            Some(category) => Emotion::new(raw.name, raw.intensity, category),
            None => Emotion::named(raw.name, raw.intensity),
        }
    }
}

impl Emotion {
    /// Creates an emotion with an explicit category.
    pub fn new(name: impl Into<String>, intensity: u8, category: EmotionCategory) -> Self {
        Self {
            name: name.into(),
            intensity: intensity.min(MAX_INTENSITY),
            category,
        }
    }

    /// Creates an emotion whose category is looked up in the built-in
    /// catalog. Names the catalog does not know are filed under
    /// [`EmotionCategory::Complex`].
    pub fn named(name: impl Into<String>, intensity: u8) -> Self {
        let name = name.into();
        let category = Catalog::builtin()
            .emotion(&name)
            .map_or(EmotionCategory::Complex, |spec| spec.category);
        Self::new(name, intensity, category)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn category(&self) -> EmotionCategory {
        self.category
    }

    /// Updates the intensity, clamping it to [`MAX_INTENSITY`].
    pub fn set_intensity(&mut self, intensity: u8) {
        self.intensity = intensity.min(MAX_INTENSITY);
    }

    /// Returns true if the emotion takes part in a rewrite.
    pub fn is_selected(&self) -> bool {
        self.intensity > 0
    }

    /// Label used in candidate metadata, e.g. `Romantic(80%)`.
    pub fn blend_label(&self) -> String {
        format!("{}({}%)", self.name, self.intensity)
    }
}
