//! Miette diagnostic wrapper for catalog parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::Path;
use thiserror::Error;

/// A miette-compatible diagnostic for malformed catalog JSON.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid catalog: {message}")]
#[diagnostic(
    code(tonecraft::catalog),
    help("catalogs are JSON objects with optional \"emotions\", \"rules\" and \"languages\" keys")
)]
pub struct CatalogDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,
}

impl CatalogDiagnostic {
    /// Create a diagnostic pointing at `line`:`column` (both 1-based) of
    /// `content`.
    pub fn new(path: &Path, content: &str, line: usize, column: usize, message: String) -> Self {
        let offset = byte_offset(content, line, column);

        CatalogDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
        }
    }
}

/// Byte offset of `line`:`column` in `content`, counting line endings as
/// they appear in the file (`\n` or `\r\n`). Clamped to the content and
/// to a character boundary.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let mut offset = (line_start + column.saturating_sub(1)).min(content.len());
    while !content.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
