//! Implementation of the `tonecraft rewrite` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use rand::rngs::StdRng;
use rand::{thread_rng, RngCore, SeedableRng};
use serde::Serialize;
use tonecraft::catalog::compute_suggestions;
use tonecraft::{Emotion, EngineConfig, RewriteCandidate, RewriteEngine, RewriteRequest};
use tracing::{info, warn};

use super::{load_catalog, parse_emotion};
use crate::output::table::format_candidates_table;

/// Arguments for the rewrite command.
#[derive(Debug, clap::Args)]
pub struct RewriteArgs {
    /// Message to rewrite
    pub text: String,

    /// Emotion in Name=intensity format, e.g. Romantic=80 (repeatable)
    #[arg(short, long = "emotion", value_parser = parse_emotion, required = true)]
    pub emotions: Vec<Emotion>,

    /// Free-text context, e.g. "I'm shy" or "texting a friend"
    #[arg(short, long, default_value = "")]
    pub context: String,

    /// Target language or register code (en, es, fr, de, it, pt, hi, te, ta, genz)
    #[arg(short, long, default_value = "en")]
    pub lang: String,

    /// Seed for reproducible output
    #[arg(long, env = "TONECRAFT_SEED")]
    pub seed: Option<u64>,

    /// Catalog file (JSON) merged over the built-in catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Never append emoji
    #[arg(long)]
    pub no_emoji: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for rewrite results.
#[derive(Serialize)]
pub struct RewriteResult<'a> {
    pub seed: u64,
    pub candidates: &'a [RewriteCandidate],
}

/// Run the rewrite command.
pub fn run_rewrite(args: RewriteArgs) -> Result<i32> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    for emotion in &args.emotions {
        if catalog.emotion(emotion.name()).is_none() && catalog.rule(emotion.name()).is_none() {
            warn!(
                emotion = emotion.name(),
                suggestions = ?catalog.suggest_emotion(emotion.name()),
                "unknown emotion has no effect on the text"
            );
        }
    }

    if !catalog.supports_language(&args.lang) {
        warn!(
            language = %args.lang,
            suggestions = ?compute_suggestions(&args.lang, &catalog.language_codes()),
            "unknown language, text is not localized"
        );
    }

    let mut config = EngineConfig::default();
    if args.no_emoji {
        config.emoji_probability = 0.0;
    }
    let engine = RewriteEngine::builder()
        .catalog(&catalog)
        .config(config)
        .build();

    let request = RewriteRequest::builder()
        .text(args.text)
        .emotions(args.emotions)
        .context(args.context)
        .language(args.lang)
        .build();

    let seed = args.seed.unwrap_or_else(|| thread_rng().next_u64());
    info!(seed, "generating candidates");
    let mut rng = StdRng::seed_from_u64(seed);

    match engine.generate_candidates_with_rng(&request, &mut rng) {
        Ok(candidates) => {
            if args.json {
                let output = RewriteResult {
                    seed,
                    candidates: &candidates,
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                if let Some(first) = candidates.first() {
                    println!(
                        "Dominant: {}  Blend: {}",
                        first.dominant_emotion,
                        first.emotion_blend.join(", ")
                    );
                }
                println!("{}", format_candidates_table(&candidates));
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Rewrite error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
