//! CLI command implementations.

mod catalog;
mod check;
mod genz;
mod rewrite;
mod suggest;

use std::fs::read_to_string;
use std::path::Path;

use miette::Result;
use tonecraft::{Catalog, Emotion, LoadError};

use crate::output::CatalogDiagnostic;

pub use catalog::{run_catalog, CatalogArgs};
pub use check::{run_check, CheckArgs};
pub use genz::{run_genz, GenzArgs};
pub use rewrite::{run_rewrite, RewriteArgs};
pub use suggest::{run_suggest, SuggestArgs};

/// Parse a `Name=intensity` emotion argument.
pub fn parse_emotion(s: &str) -> Result<Emotion, String> {
    let (name, intensity) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid emotion '{}': expected Name=intensity", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("invalid emotion '{}': name is empty", s));
    }
    let intensity = intensity
        .trim()
        .trim_end_matches('%')
        .parse::<u8>()
        .ok()
        .filter(|value| *value <= 100)
        .ok_or_else(|| format!("invalid intensity in '{}': expected 0-100", s))?;
    Ok(Emotion::named(name, intensity))
}

/// Load the catalog to rewrite with: the built-in one, with an optional
/// file merged over it.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let extra = Catalog::load_file(path).map_err(|e| load_error_report(path, e))?;
            Ok(Catalog::builtin_with(extra))
        }
        None => Ok(Catalog::builtin().clone()),
    }
}

/// Convert a catalog load failure into a report, with source context for
/// parse errors.
pub fn load_error_report(path: &Path, err: LoadError) -> miette::Report {
    match err {
        LoadError::Parse {
            line,
            column,
            message,
            ..
        } => {
            let content = read_to_string(path).unwrap_or_default();
            CatalogDiagnostic::new(path, &content, line, column, message).into()
        }
        LoadError::Io { .. } => miette::miette!("{}", err),
    }
}
