//! Implementation of the `tonecraft check` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tonecraft::Catalog;

use super::load_error_report;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Catalog files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Serialize)]
struct FileReport {
    file: String,
    error: Option<String>,
    warnings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut reports = Vec::new();
    for path in &args.files {
        let report = match Catalog::load_file(path) {
            Ok(catalog) => FileReport {
                file: path.display().to_string(),
                error: None,
                warnings: catalog.lint().iter().map(ToString::to_string).collect(),
            },
            Err(e) => {
                let message = e.to_string();
                if !args.json {
                    eprintln!("{:?}", load_error_report(path, e));
                }
                FileReport {
                    file: path.display().to_string(),
                    error: Some(message),
                    warnings: Vec::new(),
                }
            }
        };
        reports.push(report);
    }

    let any_error = reports.iter().any(|r| r.error.is_some());
    let any_warning = reports.iter().any(|r| !r.warnings.is_empty());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports).into_diagnostic()?);
    } else {
        for report in reports.iter().filter(|r| r.error.is_none()) {
            for warning in &report.warnings {
                eprintln!(
                    "{}: {}: {}",
                    "warning".if_supports_color(Stream::Stderr, |t| t.yellow()),
                    report.file,
                    warning
                );
            }
            if report.warnings.is_empty() {
                println!(
                    "{} {}",
                    "ok".if_supports_color(Stream::Stdout, |t| t.green()),
                    report.file
                );
            }
        }
    }

    if any_error || (args.strict && any_warning) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
