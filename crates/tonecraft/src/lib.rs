pub mod catalog;
pub mod engine;
pub mod genz;
pub mod suggest;
pub mod types;

pub use catalog::{
    Catalog, CatalogWarning, EmotionSpec, EmotionTransformRule, LanguageInfo, LanguageProfile,
    LoadError,
};
pub use engine::{EngineConfig, Resolution, RewriteEngine, RewriteError};
pub use suggest::Tone;
pub use types::{Emotion, EmotionCategory, RewriteCandidate, RewriteRequest, SLOT_COUNT, Slot};

/// Creates a `Vec<Emotion>` from name/intensity pairs, in the order given.
///
/// Categories come from the built-in catalog via [`Emotion::named`], and
/// intensities above 100 are clamped.
///
/// # Example
///
/// ```
/// use tonecraft::{Emotion, emotions};
///
/// let selected = emotions! { "Romantic" => 80, "Nervous" => 40 };
/// assert_eq!(selected.len(), 2);
/// assert_eq!(selected[0].name(), "Romantic");
/// assert_eq!(selected[1].intensity(), 40);
///
/// let none: Vec<Emotion> = emotions! {};
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! emotions {
    {} => {
        ::std::vec::Vec::<$crate::Emotion>::new()
    };
    { $($name:expr => $intensity:expr),+ $(,)? } => {
        ::std::vec![
            $($crate::Emotion::named($name, $intensity)),+
        ]
    };
}
