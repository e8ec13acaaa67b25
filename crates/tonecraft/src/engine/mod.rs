//! The rewrite pipeline.
//!
//! A request passes through four stages, run independently for each of the
//! four slots:
//!
//! 1. [`resolve`]: choose the dominant and secondary emotions
//! 2. [`transform`]: emotion-specific substitutions and opening frames
//! 3. [`localize`]: language and register idioms
//! 4. [`finish`]: context cues, casing, punctuation and emoji
//!
//! [`RewriteEngine`] wires the stages to a catalog and configuration.

mod error;
mod finisher;
mod localizer;
mod resolver;
mod rewriter;
mod transformer;
mod words;

pub use error::RewriteError;
pub use finisher::{ContextCues, finish};
pub use localizer::{localize, normalize_spelling};
pub use resolver::{Resolution, resolve};
pub use rewriter::{EngineConfig, MODEL_LABELS, RewriteEngine};
pub use transformer::{apply_replacements, slot_fires, transform};
pub use words::{
    TERMINAL_PUNCTUATION, capitalize_first, ends_with_terminal, lower_first_word,
    replace_exact_word, replace_words, split_trailing_emoji,
};
