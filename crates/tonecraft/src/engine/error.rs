//! Error types for the rewrite engine.

use thiserror::Error;

/// A request that cannot be rewritten.
///
/// Validation happens before any stage runs, so a failed request never
/// yields partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// The message is empty or only whitespace.
    #[error("no text: enter a message to rephrase")]
    EmptyText,

    /// Every emotion has intensity 0.
    #[error("no emotion selected: raise at least one emotion above 0%")]
    NoEmotionSelected,
}
