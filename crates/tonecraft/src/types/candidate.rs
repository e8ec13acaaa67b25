use serde::{Deserialize, Serialize};

use crate::types::Slot;

/// One rewritten version of the caller's message.
///
/// `confidence` and `model_label` are presentation placeholders. Confidence
/// is drawn uniformly from the configured range and says nothing about the
/// quality of the rewrite; the label names the slot's strategy in the style
/// the front end expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteCandidate {
    pub slot: Slot,
    pub text: String,
    pub dominant_emotion: String,
    pub confidence: u8,
    pub model_label: String,
    /// Every selected emotion as `Name(NN%)`, in caller order.
    pub emotion_blend: Vec<String>,
}
