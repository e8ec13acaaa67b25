//! The rewrite engine: validation, then resolve → transform → localize →
//! finish once per slot.

use bon::Builder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, thread_rng};
use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::engine::{
    Resolution, RewriteError, apply_replacements, finisher, localizer, resolver, transformer,
};
use crate::types::{Emotion, RewriteCandidate, RewriteRequest, Slot};

/// Cosmetic model names shown next to each slot's candidate.
pub const MODEL_LABELS: [&str; 4] = [
    "Neural Transformer v3.2",
    "Emotion-GPT Enhanced",
    "Sentiment-BERT Pro",
    "Contextual-RNN Advanced",
];

/// Tuning knobs for the engine. Tests usually pin `emoji_probability` to
/// 0 or 1.
///
/// ```
/// use tonecraft::EngineConfig;
///
/// let config = EngineConfig::builder().emoji_probability(0.0).build();
/// assert_eq!(config.secondary_floor, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct EngineConfig {
    /// Chance that a candidate gets an emoji, in `[0, 1]`.
    #[builder(default = 0.7)]
    pub emoji_probability: f64,

    /// A secondary emotion must be strictly above this intensity.
    #[builder(default = 20)]
    pub secondary_floor: u8,

    /// Factor applied to the secondary emotion's intensity.
    #[builder(default = 0.6)]
    pub secondary_damping: f64,

    /// Word replacements need an intensity strictly above this.
    #[builder(default = 20)]
    pub replacement_threshold: u8,

    /// Lowest placeholder confidence.
    #[builder(default = 85)]
    pub min_confidence: u8,

    /// Highest placeholder confidence.
    #[builder(default = 100)]
    pub max_confidence: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig::builder().build()
    }
}

/// Produces emotionally tinted rewrites of a message.
///
/// The engine is stateless between requests: it only reads its catalog and
/// configuration, so one instance can serve any number of threads.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tonecraft::{RewriteEngine, RewriteRequest, emotions};
///
/// let engine = RewriteEngine::new();
/// let request = RewriteRequest::builder()
///     .text("I like a girl")
///     .emotions(emotions! { "Romantic" => 80 })
///     .build();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let candidates = engine.generate_candidates_with_rng(&request, &mut rng).unwrap();
/// assert_eq!(candidates.len(), 4);
/// assert!(candidates.iter().all(|c| c.dominant_emotion == "Romantic"));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct RewriteEngine<'a> {
    #[builder(default = Catalog::builtin())]
    catalog: &'a Catalog,

    #[builder(default)]
    config: EngineConfig,
}

impl Default for RewriteEngine<'static> {
    fn default() -> Self {
        RewriteEngine::builder().build()
    }
}

impl RewriteEngine<'static> {
    /// An engine over the built-in catalog with default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> RewriteEngine<'a> {
    /// An engine over `catalog` with default configuration.
    pub fn with_catalog(catalog: &'a Catalog) -> Self {
        RewriteEngine::builder().catalog(catalog).build()
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates one candidate per slot using thread-local randomness.
    pub fn generate_candidates(
        &self,
        request: &RewriteRequest,
    ) -> Result<Vec<RewriteCandidate>, RewriteError> {
        self.generate_candidates_with_rng(request, &mut thread_rng())
    }

    /// Generates one candidate per slot, drawing all randomness from `rng`.
    ///
    /// A single seed is taken from `rng` and each slot derives its own
    /// generator from it, so slots never observe each other and the same
    /// seed always produces the same candidates.
    pub fn generate_candidates_with_rng<R: Rng + ?Sized>(
        &self,
        request: &RewriteRequest,
        rng: &mut R,
    ) -> Result<Vec<RewriteCandidate>, RewriteError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(RewriteError::EmptyText);
        }
        let resolution = self.resolve(&request.emotions)?;
        debug!(
            dominant = resolution.dominant.name(),
            secondary = resolution.secondary.as_ref().map(Emotion::name),
            language = %request.language,
            "resolved emotions"
        );
        self.note_unknown(&resolution, &request.language);

        let emotion_blend: Vec<String> = request
            .emotions
            .iter()
            .filter(|emotion| emotion.is_selected())
            .map(Emotion::blend_label)
            .collect();

        let base_seed = rng.next_u64();
        let candidates = Slot::all()
            .map(|slot| {
                let mut slot_rng = StdRng::seed_from_u64(base_seed ^ u64::from(slot.number()));
                let text = self.rewrite_slot(text, request, &resolution, slot, &mut slot_rng);
                trace!(%slot, %text, "generated candidate");
                RewriteCandidate {
                    slot,
                    text,
                    dominant_emotion: resolution.dominant.name().to_string(),
                    confidence: self.confidence(&mut slot_rng),
                    model_label: MODEL_LABELS[slot.position()].to_string(),
                    emotion_blend: emotion_blend.clone(),
                }
            })
            .collect();
        Ok(candidates)
    }

    /// Picks the dominant and secondary emotions using the configured floor
    /// and damping.
    pub fn resolve(&self, emotions: &[Emotion]) -> Result<Resolution, RewriteError> {
        resolver::resolve(emotions, self.config.secondary_floor, self.config.secondary_damping)
    }

    /// Applies `emotion`'s rule to `text` for one slot.
    pub fn transform<R: Rng + ?Sized>(
        &self,
        text: &str,
        emotion: &str,
        intensity: u8,
        slot: Slot,
        rng: &mut R,
    ) -> String {
        transformer::transform(
            text,
            self.catalog.rule(emotion),
            intensity,
            slot,
            self.config.replacement_threshold,
            rng,
        )
    }

    /// Injects the idioms of `language` for one slot.
    pub fn localize(&self, text: &str, language: &str, slot: Slot) -> String {
        localizer::localize(text, self.catalog.language(language), language, slot)
    }

    /// Applies context, casing, punctuation and emoji rules for one slot.
    pub fn finish<R: Rng + ?Sized>(
        &self,
        text: &str,
        dominant: &str,
        intensity: u8,
        slot: Slot,
        context: &str,
        rng: &mut R,
    ) -> String {
        let endings = self
            .catalog
            .rule(dominant)
            .map_or(&[][..], |rule| rule.endings.as_slice());
        finisher::finish(
            text,
            endings,
            intensity,
            slot,
            context,
            self.config.emoji_probability,
            rng,
        )
    }

    fn rewrite_slot<R: Rng + ?Sized>(
        &self,
        text: &str,
        request: &RewriteRequest,
        resolution: &Resolution,
        slot: Slot,
        rng: &mut R,
    ) -> String {
        let dominant = &resolution.dominant;
        let mut result = self.transform(text, dominant.name(), dominant.intensity(), slot, rng);
        if let Some(rule) = resolution
            .secondary
            .as_ref()
            .and_then(|secondary| self.catalog.rule(secondary.name()))
        {
            result = apply_replacements(
                &result,
                rule,
                resolution.secondary_weight(),
                self.config.replacement_threshold,
            );
        }
        result = self.localize(&result, &request.language, slot);
        self.finish(
            &result,
            dominant.name(),
            dominant.intensity(),
            slot,
            &request.context,
            rng,
        )
    }

    fn confidence<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        let low = self.config.min_confidence.min(self.config.max_confidence);
        let high = self.config.min_confidence.max(self.config.max_confidence);
        rng.gen_range(low..=high)
    }

    /// Unknown names are tolerated; log them so typos are discoverable.
    fn note_unknown(&self, resolution: &Resolution, language: &str) {
        let names = [Some(&resolution.dominant), resolution.secondary.as_ref()];
        for emotion in names.into_iter().flatten() {
            if self.catalog.rule(emotion.name()).is_none() && self.catalog.emotion(emotion.name()).is_none() {
                debug!(
                    emotion = emotion.name(),
                    suggestions = ?self.catalog.suggest_emotion(emotion.name()),
                    "unknown emotion, passing text through"
                );
            }
        }
        if !self.catalog.supports_language(language) {
            debug!(language, "unknown language, skipping localization");
        } else if language != "en" && self.catalog.language(language).is_none() {
            trace!(language, "no idioms for language, text passes through");
        }
    }
}
