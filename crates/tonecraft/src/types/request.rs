use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::Emotion;

/// Input to [`RewriteEngine::generate_candidates`](crate::RewriteEngine::generate_candidates).
///
/// # Example
///
/// ```
/// use tonecraft::{RewriteRequest, emotions};
///
/// let request = RewriteRequest::builder()
///     .text("I like a girl")
///     .emotions(emotions! { "Romantic" => 80 })
///     .context("I'm shy")
///     .build();
///
/// assert_eq!(request.language, "en");
/// assert_eq!(request.emotions.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct RewriteRequest {
    /// The message to rephrase. Must contain non-whitespace text.
    pub text: String,

    /// Emotions in caller order. Order matters for tie-breaking.
    #[builder(default)]
    #[serde(default)]
    pub emotions: Vec<Emotion>,

    /// Free-text description of the situation ("I'm shy", "texting a friend").
    #[builder(default)]
    #[serde(default)]
    pub context: String,

    /// Target language or register code (e.g. "en", "es", "genz").
    #[builder(default = "en".to_string())]
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}
