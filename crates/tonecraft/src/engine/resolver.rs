//! Dominant and secondary emotion selection.

use crate::engine::RewriteError;
use crate::types::Emotion;

/// The emotions that drive a rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The strongest emotion; the first one listed wins ties.
    pub dominant: Emotion,
    /// The runner-up, present only when it clears the secondary floor.
    pub secondary: Option<Emotion>,
    secondary_weight: f64,
}

impl Resolution {
    /// Intensity at which the secondary emotion is applied: its own intensity
    /// damped, and never above the dominant's. Zero without a secondary.
    pub fn secondary_weight(&self) -> f64 {
        self.secondary_weight
    }
}

/// Selects the dominant and secondary emotions.
///
/// Both picks take the first maximum in caller order, so equal intensities
/// resolve the same way on every run. The secondary must be selected and
/// strictly above `floor`.
pub fn resolve(emotions: &[Emotion], floor: u8, damping: f64) -> Result<Resolution, RewriteError> {
    let (dominant_index, dominant) =
        first_max(emotions.iter().enumerate()).ok_or(RewriteError::NoEmotionSelected)?;

    let secondary = first_max(
        emotions
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != dominant_index),
    )
    .map(|(_, emotion)| emotion)
    .filter(|emotion| emotion.intensity() > floor);

    let secondary_weight = secondary.map_or(0.0, |emotion| {
        (f64::from(emotion.intensity()) * damping).min(f64::from(dominant.intensity()))
    });

    Ok(Resolution {
        dominant: dominant.clone(),
        secondary: secondary.cloned(),
        secondary_weight,
    })
}

/// First selected emotion with the highest intensity.
fn first_max<'a>(
    emotions: impl Iterator<Item = (usize, &'a Emotion)>,
) -> Option<(usize, &'a Emotion)> {
    emotions
        .filter(|(_, emotion)| emotion.is_selected())
        .fold(None, |best, (index, emotion)| match best {
            Some((_, current)) if emotion.intensity() <= current.intensity() => best,
            _ => Some((index, emotion)),
        })
}
