//! Tests for tone suggestions and tone phrases.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tonecraft::suggest::{MAX_SUGGESTIONS, apply_tone, suggestions, tone_phrase};
use tonecraft::{Tone, emotions};

// =============================================================================
// Suggestions
// =============================================================================

#[test]
fn tone_words_without_cheer() {
    let calm = emotions! { "Happy" => 50 };
    assert_eq!(
        suggestions(Tone::Professional, &calm),
        ["regarding", "furthermore", "accordingly", "therefore"]
    );
    assert!(suggestions(Tone::Formal, &calm).is_empty());
}

#[test]
fn cheer_adds_exclamations_up_to_the_cap() {
    let happy = emotions! { "Happy" => 51 };
    assert_eq!(suggestions(Tone::Enthusiastic, &happy), ["awesome!", "fantastic!", "love it!"]);
    for tone in Tone::ALL {
        assert!(suggestions(tone, &happy).len() <= MAX_SUGGESTIONS);
    }
}

#[test]
fn cheer_requires_happy() {
    let excited = emotions! { "Excited" => 100 };
    assert!(suggestions(Tone::Friendly, &excited).is_empty());
}

// =============================================================================
// Tone Phrases
// =============================================================================

#[test]
fn tone_phrase_comes_from_tone() {
    let mut rng = StdRng::seed_from_u64(1);
    for tone in Tone::ALL {
        for _ in 0..10 {
            assert!(tone.phrases().contains(&tone_phrase(tone, &mut rng)));
        }
    }
}

#[test]
fn apply_tone_appends_with_single_space() {
    let mut rng = StdRng::seed_from_u64(2);
    let result = apply_tone("See you soon  ", Tone::Romantic, &mut rng);
    let phrase = result.strip_prefix("See you soon ").unwrap();
    assert!(Tone::Romantic.phrases().contains(&phrase));
}

#[test]
fn apply_tone_on_empty_text_is_just_the_phrase() {
    let mut rng = StdRng::seed_from_u64(3);
    let result = apply_tone("", Tone::Formal, &mut rng);
    assert!(Tone::Formal.phrases().contains(&result.as_str()));
}

// =============================================================================
// Tone
// =============================================================================

#[test]
fn tone_parses_ignoring_case() {
    assert_eq!("Romantic".parse::<Tone>(), Ok(Tone::Romantic));
    assert_eq!("CASUAL".parse::<Tone>(), Ok(Tone::Casual));
    assert_eq!("grumpy".parse::<Tone>(), Err("unknown tone 'grumpy'".to_string()));
}

#[test]
fn tone_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Tone::Enthusiastic).unwrap(), "\"enthusiastic\"");
}
