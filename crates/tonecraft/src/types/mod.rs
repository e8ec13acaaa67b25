mod candidate;
mod category;
mod emotion;
mod request;
mod slot;

pub use candidate::RewriteCandidate;
pub use category::EmotionCategory;
pub use emotion::{Emotion, MAX_INTENSITY};
pub use request::RewriteRequest;
pub use slot::{SLOT_COUNT, Slot};
