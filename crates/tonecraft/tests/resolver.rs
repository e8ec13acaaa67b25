//! Tests for dominant and secondary emotion selection.

use tonecraft::engine::resolve;
use tonecraft::{Emotion, EmotionCategory, RewriteEngine, RewriteError, emotions};

fn emotion(name: &str, intensity: u8) -> Emotion {
    Emotion::new(name, intensity, EmotionCategory::Primary)
}

// =============================================================================
// Dominant Selection
// =============================================================================

#[test]
fn dominant_is_highest_intensity() {
    let selected = vec![emotion("A", 30), emotion("B", 90), emotion("C", 60)];
    let resolution = resolve(&selected, 20, 0.6).unwrap();
    assert_eq!(resolution.dominant.name(), "B");
}

#[test]
fn dominant_tie_goes_to_first_in_caller_order() {
    let selected = vec![emotion("A", 30), emotion("B", 80), emotion("C", 80)];
    let resolution = resolve(&selected, 20, 0.6).unwrap();
    assert_eq!(resolution.dominant.name(), "B");

    let reversed = vec![emotion("C", 80), emotion("B", 80), emotion("A", 30)];
    let resolution = resolve(&reversed, 20, 0.6).unwrap();
    assert_eq!(resolution.dominant.name(), "C");
}

#[test]
fn single_selected_emotion_among_zeros() {
    let selected = vec![emotion("A", 0), emotion("B", 5), emotion("C", 0)];
    let resolution = resolve(&selected, 20, 0.6).unwrap();
    assert_eq!(resolution.dominant.name(), "B");
    assert_eq!(resolution.secondary, None);
}

// =============================================================================
// Secondary Selection
// =============================================================================

#[test]
fn secondary_is_runner_up() {
    let selected = vec![emotion("A", 30), emotion("B", 90), emotion("C", 60)];
    let resolution = resolve(&selected, 20, 0.6).unwrap();
    assert_eq!(resolution.secondary.unwrap().name(), "C");
}

#[test]
fn secondary_tie_with_dominant_is_the_later_one() {
    let selected = vec![emotion("A", 30), emotion("B", 80), emotion("C", 80)];
    let resolution = resolve(&selected, 20, 0.6).unwrap();
    assert_eq!(resolution.secondary.unwrap().name(), "C");
}

#[test]
fn secondary_absent_at_or_below_floor() {
    let selected = vec![emotion("A", 90), emotion("B", 15)];
    let resolution = resolve(&selected, 20, 0.6).unwrap();
    assert_eq!(resolution.secondary, None);
    assert_eq!(resolution.secondary_weight(), 0.0);

    let at_floor = vec![emotion("A", 90), emotion("B", 20)];
    assert_eq!(resolve(&at_floor, 20, 0.6).unwrap().secondary, None);

    let above_floor = vec![emotion("A", 90), emotion("B", 21)];
    assert!(resolve(&above_floor, 20, 0.6).unwrap().secondary.is_some());
}

#[test]
fn secondary_weight_is_damped() {
    let selected = vec![emotion("A", 90), emotion("B", 50)];
    let resolution = resolve(&selected, 20, 0.6).unwrap();
    assert!((resolution.secondary_weight() - 30.0).abs() < 1e-9);
}

#[test]
fn secondary_weight_never_exceeds_dominant() {
    // With no damping a tied secondary would match the dominant exactly;
    // with amplification it is capped.
    let selected = vec![emotion("A", 40), emotion("B", 40)];
    let resolution = resolve(&selected, 20, 2.0).unwrap();
    assert!((resolution.secondary_weight() - 40.0).abs() < 1e-9);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn no_selected_emotion_is_an_error() {
    let selected = emotions! { "Happy" => 0 };
    assert_eq!(resolve(&selected, 20, 0.6), Err(RewriteError::NoEmotionSelected));
}

#[test]
fn empty_emotion_list_is_an_error() {
    assert_eq!(resolve(&[], 20, 0.6), Err(RewriteError::NoEmotionSelected));
}

#[test]
fn engine_resolve_uses_configured_floor() {
    let engine = RewriteEngine::new();
    let selected = emotions! { "Romantic" => 80, "Nervous" => 25 };
    let resolution = engine.resolve(&selected).unwrap();
    assert_eq!(resolution.dominant.name(), "Romantic");
    assert_eq!(resolution.secondary.unwrap().name(), "Nervous");
}
