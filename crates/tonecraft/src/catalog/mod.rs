//! Read-only rewrite catalogs.
//!
//! A [`Catalog`] holds the selectable emotions, the per-emotion transform
//! rules and the per-language profiles. The built-in catalog is created once
//! per process and shared; callers can load more catalogs from JSON and merge
//! them over it before handing the result to an engine.

mod builtin;
mod error;
mod language;
mod lint;
mod rule;
mod spelling;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::EmotionCategory;

pub use error::{CatalogWarning, LoadError};
pub use language::{LanguageInfo, LanguageProfile};
pub use lint::compute_suggestions;
pub use rule::EmotionTransformRule;
pub use spelling::spelling_normalizations;

/// A selectable emotion as offered to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionSpec {
    pub name: String,
    pub emoji: String,
    pub category: EmotionCategory,
}

/// Emotions, transform rules and language profiles consulted by the engine.
///
/// Rules are keyed by emotion name and profiles by language code. Both maps
/// are allowed to be incomplete: a missing entry makes the corresponding
/// pipeline stage a pass-through.
///
/// # Example
///
/// ```
/// use tonecraft::Catalog;
///
/// let catalog = Catalog::from_json_str(r#"{
///     "rules": {
///         "Grateful": {
///             "starters": ["I just want to say thank you:"],
///             "endings": ["🙏"]
///         }
///     }
/// }"#).unwrap();
///
/// assert!(catalog.rule("Grateful").is_some());
/// assert!(catalog.language("es").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub emotions: Vec<EmotionSpec>,
    #[serde(default)]
    pub rules: BTreeMap<String, EmotionTransformRule>,
    #[serde(default)]
    pub languages: BTreeMap<String, LanguageProfile>,
    #[serde(default)]
    pub supported_languages: Vec<LanguageInfo>,
}

impl Catalog {
    /// The catalog shipped with the crate, built on first use.
    pub fn builtin() -> &'static Catalog {
        &builtin::BUILTIN
    }

    /// Parses a catalog from JSON text.
    pub fn from_json_str(content: &str) -> Result<Catalog, LoadError> {
        Self::parse(content, None)
    }

    /// Reads and parses a catalog file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let catalog = Self::parse(&content, Some(path))?;
        debug!(
            path = %path.display(),
            rules = catalog.rules.len(),
            languages = catalog.languages.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn parse(content: &str, path: Option<&Path>) -> Result<Catalog, LoadError> {
        serde_json::from_str(content).map_err(|e| LoadError::Parse {
            path: path.map_or_else(|| PathBuf::from("<string>"), Path::to_path_buf),
            line: e.line(),
            column: e.column(),
            message: parse_message(&e),
        })
    }

    /// Overlays `other` onto this catalog.
    ///
    /// Rules and language profiles from `other` replace entries with the same
    /// key. Emotions replace the entry with the same name or are appended.
    pub fn merge(&mut self, other: Catalog) {
        for spec in other.emotions {
            match self.emotions.iter_mut().find(|e| e.name == spec.name) {
                Some(existing) => *existing = spec,
                None => self.emotions.push(spec),
            }
        }
        for info in other.supported_languages {
            match self.supported_languages.iter_mut().find(|l| l.code == info.code) {
                Some(existing) => *existing = info,
                None => self.supported_languages.push(info),
            }
        }
        self.rules.extend(other.rules);
        self.languages.extend(other.languages);
    }

    /// Returns the built-in catalog with `other` merged over it.
    pub fn builtin_with(other: Catalog) -> Catalog {
        let mut catalog = Self::builtin().clone();
        catalog.merge(other);
        catalog
    }

    /// Looks up a selectable emotion by exact name.
    pub fn emotion(&self, name: &str) -> Option<&EmotionSpec> {
        self.emotions.iter().find(|e| e.name == name)
    }

    /// Selectable emotions in one category, in catalog order.
    pub fn emotions_in(&self, category: EmotionCategory) -> impl Iterator<Item = &EmotionSpec> {
        self.emotions.iter().filter(move |e| e.category == category)
    }

    /// The transform rule for an emotion, if any.
    pub fn rule(&self, emotion: &str) -> Option<&EmotionTransformRule> {
        self.rules.get(emotion)
    }

    /// The profile for a language code, if any. English has none.
    pub fn language(&self, code: &str) -> Option<&LanguageProfile> {
        self.languages.get(code)
    }

    /// The listing entry for a language code, if any.
    pub fn language_info(&self, code: &str) -> Option<&LanguageInfo> {
        self.supported_languages.iter().find(|l| l.code == code)
    }

    /// Returns true if `code` is English, listed, or has a profile.
    pub fn supports_language(&self, code: &str) -> bool {
        code == "en" || self.language_info(code).is_some() || self.language(code).is_some()
    }

    /// Supported language codes: `en`, then listed codes in listing order,
    /// then codes that only have a profile.
    pub fn language_codes(&self) -> Vec<&str> {
        let mut codes = vec!["en"];
        let listed = self.supported_languages.iter().map(|l| l.code.as_str());
        for code in listed.chain(self.languages.keys().map(String::as_str)) {
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        codes
    }

    /// Close matches for a misspelled emotion name among the catalog's
    /// emotions and rules.
    pub fn suggest_emotion(&self, name: &str) -> Vec<String> {
        let mut known: Vec<&str> = self.emotions.iter().map(|e| e.name.as_str()).collect();
        for rule_name in self.rules.keys() {
            if !known.contains(&rule_name.as_str()) {
                known.push(rule_name);
            }
        }
        compute_suggestions(name, &known)
    }

    /// Checks the catalog for entries that will never have an effect.
    pub fn lint(&self) -> Vec<CatalogWarning> {
        lint::lint_catalog(self)
    }
}

/// Strips serde_json's trailing " at line L column C", which `LoadError`
/// reports separately.
fn parse_message(error: &serde_json::Error) -> String {
    let text = error.to_string();
    match text.rfind(" at line ") {
        Some(pos) => text[..pos].to_string(),
        None => text,
    }
}
