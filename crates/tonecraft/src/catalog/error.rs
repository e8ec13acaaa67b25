//! Error and warning types for catalog loading.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a catalog file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed JSON or a value of the wrong shape.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

/// A catalog entry that loads fine but can never influence a rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
    /// A rule is keyed by a name that is not a selectable emotion.
    UnknownRuleEmotion {
        name: String,
        suggestions: Vec<String>,
    },

    /// A rule with no starters, replacements, intensifiers or endings.
    EmptyRule { name: String },

    /// A language profile whose every list is empty.
    EmptyLanguageProfile { code: String },

    /// The same emotion name is listed more than once.
    DuplicateEmotion { name: String },
}

impl Display for CatalogWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CatalogWarning::UnknownRuleEmotion { name, suggestions } => {
                write!(f, "rule '{name}' does not match any selectable emotion")?;
                if !suggestions.is_empty() {
                    write!(f, " (did you mean: {}?)", suggestions.join(", "))?;
                }
                Ok(())
            }
            CatalogWarning::EmptyRule { name } => {
                write!(f, "rule '{name}' has no starters, replacements, intensifiers or endings")
            }
            CatalogWarning::EmptyLanguageProfile { code } => {
                write!(f, "language profile '{code}' is empty")
            }
            CatalogWarning::DuplicateEmotion { name } => {
                write!(f, "emotion '{name}' is listed more than once")
            }
        }
    }
}
