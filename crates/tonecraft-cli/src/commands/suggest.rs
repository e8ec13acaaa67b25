//! Implementation of the `tonecraft suggest` command.

use miette::{IntoDiagnostic, Result};
use rand::rngs::StdRng;
use rand::{thread_rng, RngCore, SeedableRng};
use serde::Serialize;
use tonecraft::suggest::{apply_tone, suggestions};
use tonecraft::{Emotion, Tone};

use super::parse_emotion;

/// Arguments for the suggest command.
#[derive(Debug, clap::Args)]
pub struct SuggestArgs {
    /// Tone to suggest for (casual, professional, friendly, formal, enthusiastic, romantic)
    #[arg(short, long)]
    pub tone: Tone,

    /// Emotion in Name=intensity format (repeatable)
    #[arg(short, long = "emotion", value_parser = parse_emotion)]
    pub emotions: Vec<Emotion>,

    /// Append a phrase in the tone to this text instead of listing words
    #[arg(long)]
    pub apply: Option<String>,

    /// Seed for reproducible phrase choice
    #[arg(long, env = "TONECRAFT_SEED")]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum SuggestOutput {
    Words { suggestions: Vec<&'static str> },
    Applied { text: String },
}

/// Run the suggest command.
pub fn run_suggest(args: SuggestArgs) -> Result<i32> {
    let output = match &args.apply {
        Some(text) => {
            let seed = args.seed.unwrap_or_else(|| thread_rng().next_u64());
            let mut rng = StdRng::seed_from_u64(seed);
            SuggestOutput::Applied {
                text: apply_tone(text, args.tone, &mut rng),
            }
        }
        None => SuggestOutput::Words {
            suggestions: suggestions(args.tone, &args.emotions),
        },
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        match output {
            SuggestOutput::Words { suggestions } => {
                for word in suggestions {
                    println!("{}", word);
                }
            }
            SuggestOutput::Applied { text } => println!("{}", text),
        }
    }
    Ok(exitcode::OK)
}
