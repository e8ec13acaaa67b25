//! Static checks over catalog contents.

use std::collections::BTreeSet;

use strsim::levenshtein;

use crate::catalog::{Catalog, CatalogWarning};

/// Runs every catalog check, returning warnings in a stable order:
/// duplicate emotions, then rules, then language profiles.
pub fn lint_catalog(catalog: &Catalog) -> Vec<CatalogWarning> {
    let mut warnings = Vec::new();
    lint_duplicate_emotions(catalog, &mut warnings);
    lint_rules(catalog, &mut warnings);
    lint_languages(catalog, &mut warnings);
    warnings
}

fn lint_duplicate_emotions(catalog: &Catalog, warnings: &mut Vec<CatalogWarning>) {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    for spec in &catalog.emotions {
        if !seen.insert(spec.name.as_str()) && reported.insert(spec.name.as_str()) {
            warnings.push(CatalogWarning::DuplicateEmotion {
                name: spec.name.clone(),
            });
        }
    }
}

fn lint_rules(catalog: &Catalog, warnings: &mut Vec<CatalogWarning>) {
    let mut names: Vec<&str> = Vec::new();
    for spec in &catalog.emotions {
        if !names.contains(&spec.name.as_str()) {
            names.push(&spec.name);
        }
    }
    for (name, rule) in &catalog.rules {
        // A catalog without an emotion list only extends rules; nothing to check against.
        if !names.is_empty() && !names.contains(&name.as_str()) {
            warnings.push(CatalogWarning::UnknownRuleEmotion {
                name: name.clone(),
                suggestions: compute_suggestions(name, &names),
            });
        }
        if rule.is_empty() {
            warnings.push(CatalogWarning::EmptyRule { name: name.clone() });
        }
    }
}

fn lint_languages(catalog: &Catalog, warnings: &mut Vec<CatalogWarning>) {
    for (code, profile) in &catalog.languages {
        if profile.is_empty() {
            warnings.push(CatalogWarning::EmptyLanguageProfile { code: code.clone() });
        }
    }
}

/// Computes typo suggestions for a name using Levenshtein distance.
///
/// Comparison ignores case. Returns up to 3 suggestions with distance <= 2
/// (or <= 1 for names of 3 characters or fewer), sorted by distance. Exact
/// matches are not suggestions.
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let needle = name.to_lowercase();
    let max_distance = if needle.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(&needle, &candidate.to_lowercase());
            (dist <= max_distance && candidate != &name).then(|| (dist, (*candidate).to_string()))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
