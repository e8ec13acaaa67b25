//! Tests for context cues, casing, punctuation and emoji.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tonecraft::engine::{ContextCues, finish};
use tonecraft::{EngineConfig, RewriteEngine, Slot};

fn plain(text: &str, intensity: u8, slot: Slot, context: &str) -> String {
    let mut rng = StdRng::seed_from_u64(3);
    finish(text, &[], intensity, slot, context, 0.7, &mut rng)
}

fn romantic_endings() -> Vec<String> {
    ["💕", "❤️", "🌹", "✨"].iter().map(|s| (*s).to_string()).collect()
}

// =============================================================================
// Context Cues
// =============================================================================

#[test]
fn context_cues_ignore_case() {
    assert_eq!(
        ContextCues::from_context("I'm SHY around her"),
        ContextCues {
            hesitant: true,
            casual: false
        }
    );
    assert_eq!(
        ContextCues::from_context("Texting a Friend, keep it casual"),
        ContextCues {
            hesitant: false,
            casual: true
        }
    );
    assert_eq!(ContextCues::from_context(""), ContextCues::default());
}

#[test]
fn hesitant_sender_gets_um_on_slot_one() {
    assert_eq!(
        plain("I think I like you", 40, Slot::FIRST, "I'm nervous"),
        "Um, I honestly think I honestly like you."
    );
}

#[test]
fn hesitant_rewrite_only_touches_standalone_i() {
    assert_eq!(
        plain("I've said I will", 40, Slot::SECOND, "shy"),
        "I've said I honestly will."
    );
}

#[test]
fn um_is_slot_one_only() {
    assert_eq!(
        plain("I think I like you", 40, Slot::FOURTH, "shy"),
        "I honestly think I honestly like you."
    );
}

#[test]
fn casual_context_prefixes_slots_two_and_three() {
    assert_eq!(plain("Sure thing", 40, Slot::SECOND, "texting a friend"), "Hey, sure thing.");
    assert_eq!(plain("Sure thing", 40, Slot::THIRD, "texting a friend"), "Yo, sure thing.");
    assert_eq!(plain("Sure thing", 40, Slot::FIRST, "texting a friend"), "Sure thing.");
    assert_eq!(plain("Sure thing", 40, Slot::FOURTH, "texting a friend"), "Sure thing.");
}

// =============================================================================
// Register
// =============================================================================

#[test]
fn slot_two_contracts() {
    assert_eq!(
        plain("I am sure I cannot wait", 10, Slot::SECOND, ""),
        "I'm sure I can't wait."
    );
}

#[test]
fn slot_three_expands() {
    assert_eq!(
        plain("I'm sure it's fine, don't worry", 10, Slot::THIRD, ""),
        "I am sure it is fine, do not worry."
    );
}

#[test]
fn slots_one_and_four_keep_register() {
    assert_eq!(plain("I'm sure I cannot", 10, Slot::FIRST, ""), "I'm sure I cannot.");
    assert_eq!(plain("I'm sure I cannot", 10, Slot::FOURTH, ""), "I'm sure I cannot.");
}

// =============================================================================
// Casing and Punctuation
// =============================================================================

#[test]
fn first_letter_is_capitalized() {
    assert_eq!(plain("hello there", 10, Slot::FIRST, ""), "Hello there.");
    assert_eq!(plain("élan vital", 10, Slot::FIRST, ""), "Élan vital.");
}

#[test]
fn exclamation_strictly_above_70() {
    assert_eq!(plain("hello", 70, Slot::FIRST, ""), "Hello.");
    assert_eq!(plain("hello", 71, Slot::FIRST, ""), "Hello!");
}

#[test]
fn existing_terminal_punctuation_is_kept() {
    assert_eq!(plain("really?", 90, Slot::FIRST, ""), "Really?");
    assert_eq!(plain("done.", 90, Slot::FIRST, ""), "Done.");
}

#[test]
fn punctuation_goes_before_trailing_emoji() {
    assert_eq!(plain("love you 💕", 40, Slot::FIRST, ""), "Love you. 💕");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(plain("  hello  ", 10, Slot::FIRST, ""), "Hello.");
}

#[test]
fn slot_four_escalates_above_50() {
    assert_eq!(
        plain("I like you. You are great", 60, Slot::FOURTH, ""),
        "I like you! You are great!"
    );
    assert_eq!(
        plain("I like you. You are great", 50, Slot::FOURTH, ""),
        "I like you. You are great."
    );
    assert_eq!(
        plain("I like you. You are great", 60, Slot::THIRD, ""),
        "I like you. You are great."
    );
}

// =============================================================================
// Emoji
// =============================================================================

#[test]
fn emoji_is_indexed_by_slot() {
    let endings = romantic_endings();
    let expected = [(Slot::FIRST, "❤️"), (Slot::SECOND, "🌹"), (Slot::THIRD, "✨"), (Slot::FOURTH, "💕")];
    for (slot, emoji) in expected {
        let mut rng = StdRng::seed_from_u64(0);
        let result = finish("hello", &endings, 40, slot, "", 1.0, &mut rng);
        assert_eq!(result, format!("Hello. {emoji}"), "slot {slot}");
    }
}

#[test]
fn zero_probability_never_adds_emoji() {
    let endings = romantic_endings();
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(finish("hello", &endings, 40, Slot::FIRST, "", 0.0, &mut rng), "Hello.");
    }
}

#[test]
fn out_of_range_probability_is_clamped() {
    let endings = romantic_endings();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(finish("hello", &endings, 40, Slot::FIRST, "", 5.0, &mut rng), "Hello. ❤️");
    assert_eq!(finish("hello", &endings, 40, Slot::FIRST, "", -1.0, &mut rng), "Hello.");
    assert_eq!(finish("hello", &endings, 40, Slot::FIRST, "", f64::NAN, &mut rng), "Hello.");
}

#[test]
fn no_endings_means_no_emoji() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(finish("hello", &[], 40, Slot::FIRST, "", 1.0, &mut rng), "Hello.");
}

#[test]
fn engine_finish_uses_dominant_endings() {
    let engine = RewriteEngine::builder()
        .config(EngineConfig::builder().emoji_probability(1.0).build())
        .build();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        engine.finish("i like you", "Romantic", 80, Slot::FIRST, "", &mut rng),
        "I like you! ❤️"
    );
    assert_eq!(
        engine.finish("i like you", "Bewildered", 80, Slot::FIRST, "", &mut rng),
        "I like you!"
    );
}
