//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;
use tonecraft::{EmotionSpec, RewriteCandidate};

/// One emotion listing row.
pub struct EmotionRow<'a> {
    pub spec: &'a EmotionSpec,
    /// Whether the emotion changes text or only shows up in metadata.
    pub has_rule: bool,
}

/// One supported language listing row.
#[derive(Serialize)]
pub struct LanguageRow<'a> {
    pub code: &'a str,
    /// Absent for codes that only have a profile.
    pub name: Option<&'a str>,
    pub flag: Option<&'a str>,
    pub transliteration: bool,
    /// Whether idioms are injected or the text passes through.
    pub has_profile: bool,
}

/// Format rewrite candidates as an ASCII table.
pub fn format_candidates_table(candidates: &[RewriteCandidate]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Slot", "Candidate", "Model", "Confidence"]);

    for candidate in candidates {
        table.add_row(vec![
            candidate.slot.to_string(),
            candidate.text.clone(),
            candidate.model_label.clone(),
            format!("{}%", candidate.confidence),
        ]);
    }

    table
}

/// Format emotions as an ASCII table.
pub fn format_emotions_table(rows: &[EmotionRow<'_>]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Emotion", "Emoji", "Category", "Rewrites"]);

    for row in rows {
        table.add_row(vec![
            row.spec.name.clone(),
            row.spec.emoji.clone(),
            row.spec.category.to_string(),
            if row.has_rule { "yes" } else { "metadata only" }.to_string(),
        ]);
    }

    table
}

/// Format supported languages as an ASCII table.
pub fn format_languages_table(rows: &[LanguageRow<'_>]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Code", "Language", "Flag", "Idioms", "Romanized"]);

    for row in rows {
        table.add_row(vec![
            row.code.to_string(),
            row.name.unwrap_or_default().to_string(),
            row.flag.unwrap_or_default().to_string(),
            if row.has_profile { "yes" } else { "pass-through" }.to_string(),
            if row.transliteration { "yes" } else { "" }.to_string(),
        ]);
    }

    table
}
