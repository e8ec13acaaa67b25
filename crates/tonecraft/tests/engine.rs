//! End-to-end tests for candidate generation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tonecraft::engine::{MODEL_LABELS, split_trailing_emoji};
use tonecraft::{
    Catalog, Emotion, EngineConfig, RewriteCandidate, RewriteEngine, RewriteError,
    RewriteRequest, SLOT_COUNT, emotions,
};

fn request(text: &str, emotions: Vec<Emotion>) -> RewriteRequest {
    RewriteRequest::builder().text(text).emotions(emotions).build()
}

fn no_emoji() -> RewriteEngine<'static> {
    RewriteEngine::builder()
        .config(EngineConfig::builder().emoji_probability(0.0).build())
        .build()
}

fn generate(engine: &RewriteEngine<'_>, request: &RewriteRequest, seed: u64) -> Vec<RewriteCandidate> {
    let mut rng = StdRng::seed_from_u64(seed);
    engine.generate_candidates_with_rng(request, &mut rng).unwrap()
}

fn texts(candidates: &[RewriteCandidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.text.as_str()).collect()
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn empty_text_is_rejected() {
    let engine = RewriteEngine::new();
    let result = engine.generate_candidates(&request("", emotions! { "Happy" => 50 }));
    assert_eq!(result, Err(RewriteError::EmptyText));
}

#[test]
fn whitespace_text_is_rejected_before_emotions_are_checked() {
    let engine = RewriteEngine::new();
    let result = engine.generate_candidates(&request(" \t\n ", emotions! {}));
    assert_eq!(result, Err(RewriteError::EmptyText));
}

#[test]
fn all_zero_emotions_are_rejected() {
    let engine = RewriteEngine::new();
    let result =
        engine.generate_candidates(&request("hello", emotions! { "Happy" => 0, "Sad" => 0 }));
    assert_eq!(result, Err(RewriteError::NoEmotionSelected));
}

#[test]
fn validation_errors_have_distinct_messages() {
    assert_eq!(RewriteError::EmptyText.to_string(), "no text: enter a message to rephrase");
    assert_eq!(
        RewriteError::NoEmotionSelected.to_string(),
        "no emotion selected: raise at least one emotion above 0%"
    );
}

// =============================================================================
// Candidate Properties
// =============================================================================

#[test]
fn every_candidate_is_well_formed() {
    let engine = RewriteEngine::new();
    let requests = [
        request("I like a girl", emotions! { "Romantic" => 80 }),
        request("see you tomorrow", emotions! { "Happy" => 30, "Casual" => 90 }),
        request("i am going to call you", emotions! { "Professional" => 100, "Nervous" => 60 }),
        request("I need help", emotions! { "Surprise" => 45 }),
        request("thanks", emotions! { "Bewildered" => 10 }),
    ];
    let languages = ["en", "es", "fr", "de", "it", "pt", "hi", "te", "ta", "genz", "xx"];
    let contexts = ["", "I'm shy", "texting a friend"];

    for base in &requests {
        for language in languages {
            for context in contexts {
                let mut request = base.clone();
                request.language = language.to_string();
                request.context = context.to_string();
                for seed in 0..5 {
                    let candidates = generate(&engine, &request, seed);
                    assert_eq!(candidates.len(), usize::from(SLOT_COUNT));
                    for (index, candidate) in candidates.iter().enumerate() {
                        let text = &candidate.text;
                        assert_eq!(candidate.slot.position(), index);
                        assert!(!text.trim().is_empty());
                        assert!(
                            text.chars().next().is_some_and(char::is_uppercase),
                            "not capitalized: {text:?} ({language}, {context:?})"
                        );
                        let (body, _) = split_trailing_emoji(text);
                        assert!(
                            body.ends_with(['.', '!']),
                            "not terminated: {text:?} ({language}, {context:?})"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn metadata_describes_the_request() {
    let engine = RewriteEngine::new();
    let request = request(
        "I like a girl",
        emotions! { "Romantic" => 80, "Happy" => 0, "Nervous" => 40 },
    );
    let candidates = generate(&engine, &request, 11);

    for (index, candidate) in candidates.iter().enumerate() {
        assert_eq!(usize::from(candidate.slot.number()), index + 1);
        assert_eq!(candidate.dominant_emotion, "Romantic");
        assert_eq!(candidate.model_label, MODEL_LABELS[index]);
        assert_eq!(candidate.emotion_blend, ["Romantic(80%)", "Nervous(40%)"]);
        assert!((85..=100).contains(&candidate.confidence));
    }
}

#[test]
fn confidence_range_is_configurable() {
    let fixed = RewriteEngine::builder()
        .config(EngineConfig::builder().min_confidence(90).max_confidence(90).build())
        .build();
    let swapped = RewriteEngine::builder()
        .config(EngineConfig::builder().min_confidence(99).max_confidence(95).build())
        .build();
    let request = request("hello", emotions! { "Happy" => 50 });
    for seed in 0..20 {
        assert!(generate(&fixed, &request, seed).iter().all(|c| c.confidence == 90));
        assert!(
            generate(&swapped, &request, seed)
                .iter()
                .all(|c| (95..=99).contains(&c.confidence))
        );
    }
}

#[test]
fn candidates_serialize_slot_as_number() {
    let engine = no_emoji();
    let candidates = generate(&engine, &request("hello", emotions! { "Happy" => 50 }), 0);
    let json = serde_json::to_value(&candidates[2]).unwrap();
    assert_eq!(json["slot"], 3);
    assert_eq!(json["dominant_emotion"], "Happy");
    let back: RewriteCandidate = serde_json::from_value(json).unwrap();
    assert_eq!(back, candidates[2]);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn same_seed_same_candidates() {
    let engine = RewriteEngine::new();
    let request = request("I like a girl", emotions! { "Romantic" => 80, "Flirty" => 60 });
    for seed in [0, 1, 99, u64::MAX] {
        assert_eq!(generate(&engine, &request, seed), generate(&engine, &request, seed));
    }
}

#[test]
fn thread_rng_entry_point_produces_four_candidates() {
    let engine = RewriteEngine::new();
    let candidates = engine
        .generate_candidates(&request("I like a girl", emotions! { "Romantic" => 80 }))
        .unwrap();
    assert_eq!(candidates.len(), 4);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn romantic_confession() {
    let engine = no_emoji();
    let candidates = generate(&engine, &request("I like a girl", emotions! { "Romantic" => 80 }), 5);
    let texts = texts(&candidates);

    insta::assert_snapshot!(
        texts[0],
        @"I have to confess something, I have feelings for a special someone!"
    );
    insta::assert_snapshot!(
        texts[2],
        @"Every time I think of you, I have feelings for a special someone!"
    );
    insta::assert_snapshot!(
        texts[3],
        @"From the bottom of my heart, truly, I have feelings for a special someone!"
    );
    let reflective = ["truly", "deeply", "completely"]
        .map(|word| format!("I {word} wonder, I have feelings for a special someone!"));
    assert!(reflective.iter().any(|text| text == texts[1]), "unexpected: {}", texts[1]);
    for text in &texts {
        assert!(!text.to_lowercase().contains("girl"), "unexpected: {text}");
    }
}

#[test]
fn shy_sender_hesitates() {
    let engine = no_emoji();
    let request = RewriteRequest::builder()
        .text("I like her")
        .emotions(emotions! { "Nervous" => 90 })
        .context("I'm shy")
        .build();
    let candidates = generate(&engine, &request, 5);

    insta::assert_snapshot!(
        &candidates[0].text,
        @"Um, I've been meaning to tell you something... I honestly like her!"
    );
    assert!(candidates.iter().all(|c| c.text.contains("I honestly like her")));
}

#[test]
fn unknown_emotion_only_gets_finishing() {
    let engine = RewriteEngine::builder()
        .config(EngineConfig::builder().emoji_probability(1.0).build())
        .build();
    let candidates = generate(&engine, &request("i like you", emotions! { "Bewildered" => 50 }), 0);
    assert_eq!(texts(&candidates), ["I like you."; 4]);
    assert!(candidates.iter().all(|c| c.dominant_emotion == "Bewildered"));
}

#[test]
fn secondary_emotion_adds_its_replacements() {
    let engine = no_emoji();
    let strong = request("I want a girl", emotions! { "Romantic" => 80, "Professional" => 50 });
    assert_eq!(
        generate(&engine, &strong, 0)[2].text,
        "Every time I think of you, I would like a special someone!"
    );

    // 30 damped by 0.6 is 18, below the replacement threshold.
    let weak = request("I want a girl", emotions! { "Romantic" => 80, "Professional" => 30 });
    assert_eq!(
        generate(&engine, &weak, 0)[2].text,
        "Every time I think of you, I want a special someone!"
    );
}

#[test]
fn secondary_never_adds_frames() {
    let engine = no_emoji();
    let request = request("hello", emotions! { "Surprise" => 90, "Happy" => 80 });
    let candidates = generate(&engine, &request, 0);
    assert!(candidates.iter().all(|c| !c.text.contains("Good news")));
    assert_eq!(candidates[0].dominant_emotion, "Surprise");
}

#[test]
fn localized_candidates_carry_idioms() {
    let engine = no_emoji();
    let mut request = request("I like you", emotions! { "Bewildered" => 40 });
    request.language = "es".to_string();
    let candidates = generate(&engine, &request, 0);
    assert_eq!(
        texts(&candidates),
        [
            "Hola, en serio I like you.",
            "Bueno sinceramente I like you.",
            "Buenas, I like you, jaja.",
            "Te cuento que posta I like you, besos.",
        ]
    );
}

#[test]
fn listed_language_without_idioms_matches_english() {
    let engine = RewriteEngine::new();
    let english = request("I like a girl", emotions! { "Romantic" => 80 });
    let mut japanese = english.clone();
    japanese.language = "ja".to_string();
    for seed in 0..5 {
        assert_eq!(
            texts(&generate(&engine, &japanese, seed)),
            texts(&generate(&engine, &english, seed))
        );
    }
}

#[test]
fn custom_catalog_drives_rewrites() {
    let custom = Catalog::from_json_str(
        r#"{
            "rules": {
                "Grateful": {
                    "starters": ["Thank you so much,", "I owe you one,", "Honestly,"],
                    "replacements": [["thanks", "thank you"]],
                    "intensifiers": ["really"],
                    "endings": ["🙏"]
                }
            }
        }"#,
    )
    .unwrap();
    let catalog = Catalog::builtin_with(custom);
    let engine = RewriteEngine::builder()
        .catalog(&catalog)
        .config(EngineConfig::builder().emoji_probability(0.0).build())
        .build();

    let candidates = generate(&engine, &request("thanks for the help", emotions! { "Grateful" => 100 }), 0);
    assert_eq!(
        texts(&candidates),
        [
            "Thank you so much, thank you for the help!",
            "I really wonder, thank you for the help!",
            "I owe you one, thank you for the help!",
            "Honestly, really, thank you for the help!",
        ]
    );
}
