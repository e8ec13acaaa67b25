//! Tonecraft CLI entry point.
//!
//! Command-line tools around the tonecraft rewrite engine:
//! - `tonecraft rewrite` - Generate the four emotion-tinted candidates
//! - `tonecraft catalog` - List emotions and languages
//! - `tonecraft check` - Validate catalog JSON files
//! - `tonecraft genz` - Convert a message to Gen-Z register
//! - `tonecraft suggest` - Tone word suggestions and tone phrases

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_catalog, run_check, run_genz, run_rewrite, run_suggest, CatalogArgs, CheckArgs, GenzArgs,
    RewriteArgs, SuggestArgs,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Emotion-aware message rewriting.
#[derive(Debug, Parser)]
#[command(name = "tonecraft")]
#[command(about = "Emotion-aware message rewriting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite a message with the selected emotions
    Rewrite(RewriteArgs),
    /// List selectable emotions and supported languages
    Catalog(CatalogArgs),
    /// Validate catalog JSON files
    Check(CheckArgs),
    /// Convert a message to Gen-Z register
    Genz(GenzArgs),
    /// Suggest words for a tone, or append a tone phrase
    Suggest(SuggestArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Logs go to stderr so `--json` output stays machine-readable.
/// `RUST_LOG` overrides the level chosen by `--verbose`.
fn setup_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(stderr).with_target(false))
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Rewrite(args) => run_rewrite(args),
        Commands::Catalog(args) => run_catalog(args),
        Commands::Check(args) => run_check(args),
        Commands::Genz(args) => run_genz(args),
        Commands::Suggest(args) => run_suggest(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
