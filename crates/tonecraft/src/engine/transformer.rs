//! Emotion-specific rewriting: word substitutions plus one opening frame per
//! slot.
//!
//! Each slot has its own activation curve over intensity, so the four
//! candidates differ by construction:
//!
//! | slot | activation                         | fires above | frame                          |
//! |------|------------------------------------|-------------|--------------------------------|
//! | 1    | `sqrt(i/100) > 0.5`                | 25          | `starters[0]`                  |
//! | 2    | `(i/100)^1.5 > 0.3`                | ~44.8       | "I {random intensifier} wonder, " |
//! | 3    | `i > 40 + 0.2·i`                   | 50          | `starters[1]`                  |
//! | 4    | `(i/100)·(slot/4) > 0.6`           | 60          | `starters[2]` + `intensifiers[0]` |

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::EmotionTransformRule;
use crate::engine::words::{lower_first_word, replace_words};
use crate::types::{SLOT_COUNT, Slot};

/// Returns true if the slot's activation curve fires at `intensity`,
/// independent of what the rule provides.
pub fn slot_fires(slot: Slot, intensity: u8) -> bool {
    let scale = f64::from(intensity) / 100.0;
    match slot.number() {
        1 => scale.sqrt() > 0.5,
        2 => scale.powf(1.5) > 0.3,
        3 => f64::from(intensity) > 40.0 + 0.2 * f64::from(intensity),
        _ => scale * (f64::from(slot.number()) / f64::from(SLOT_COUNT)) > 0.6,
    }
}

/// Applies the rule's word replacements when `intensity` is above `threshold`.
pub fn apply_replacements(text: &str, rule: &EmotionTransformRule, intensity: f64, threshold: u8) -> String {
    if intensity <= f64::from(threshold) {
        return text.to_string();
    }
    rule.replacements
        .iter()
        .fold(text.to_string(), |acc, (from, to)| replace_words(&acc, from, to))
}

/// Rewrites `text` for one emotion and slot.
///
/// A missing rule leaves the text untouched.
pub fn transform<R: Rng + ?Sized>(
    text: &str,
    rule: Option<&EmotionTransformRule>,
    intensity: u8,
    slot: Slot,
    threshold: u8,
    rng: &mut R,
) -> String {
    let Some(rule) = rule else {
        return text.to_string();
    };

    let replaced = apply_replacements(text, rule, f64::from(intensity), threshold);
    if !slot_fires(slot, intensity) {
        return replaced;
    }

    match slot.number() {
        1 => match rule.starters.first() {
            Some(starter) => prefix(starter, &replaced),
            None => replaced,
        },
        2 => match rule.intensifiers.choose(rng) {
            Some(intensifier) => prefix(&format!("I {intensifier} wonder,"), &replaced),
            None => replaced,
        },
        3 => match rule.starters.get(1) {
            Some(starter) => prefix(starter, &replaced),
            None => replaced,
        },
        _ => match (rule.starters.get(2), rule.intensifiers.first()) {
            (Some(starter), Some(intensifier)) => {
                let starter = starter.trim_end_matches([',', ':', ';', '.', '!', '-', ' ']);
                prefix(&format!("{starter}, {intensifier},"), &replaced)
            }
            _ => replaced,
        },
    }
}

fn prefix(frame: &str, text: &str) -> String {
    format!("{frame} {}", lower_first_word(text))
}
