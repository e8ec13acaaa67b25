//! Implementation of the `tonecraft catalog` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tonecraft::{EmotionCategory, EmotionSpec};

use super::load_catalog;
use crate::output::table::{format_emotions_table, format_languages_table, EmotionRow, LanguageRow};

/// Arguments for the catalog command.
#[derive(Debug, clap::Args)]
pub struct CatalogArgs {
    /// Only list emotions in this category
    #[arg(long)]
    pub category: Option<EmotionCategory>,

    /// Catalog file (JSON) merged over the built-in catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for catalog listings.
#[derive(Serialize)]
struct CatalogJson<'a> {
    emotions: Vec<EmotionJson<'a>>,
    languages: Vec<LanguageRow<'a>>,
}

#[derive(Serialize)]
struct EmotionJson<'a> {
    #[serde(flatten)]
    spec: &'a EmotionSpec,
    has_rule: bool,
}

/// Run the catalog command.
pub fn run_catalog(args: CatalogArgs) -> Result<i32> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let categories: Vec<EmotionCategory> = match args.category {
        Some(category) => vec![category],
        None => EmotionCategory::ALL.to_vec(),
    };
    let specs: Vec<&EmotionSpec> = categories
        .iter()
        .flat_map(|category| catalog.emotions_in(*category))
        .collect();
    let languages: Vec<LanguageRow<'_>> = catalog
        .language_codes()
        .into_iter()
        .map(|code| {
            let info = catalog.language_info(code);
            LanguageRow {
                code,
                name: info.map(|l| l.name.as_str()),
                flag: info.map(|l| l.flag.as_str()),
                transliteration: info.is_some_and(|l| l.transliteration),
                has_profile: catalog.language(code).is_some(),
            }
        })
        .collect();

    if args.json {
        let output = CatalogJson {
            emotions: specs
                .iter()
                .map(|&spec| EmotionJson {
                    spec,
                    has_rule: catalog.rule(&spec.name).is_some(),
                })
                .collect(),
            languages,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        let rows: Vec<EmotionRow<'_>> = specs
            .iter()
            .map(|&spec| EmotionRow {
                spec,
                has_rule: catalog.rule(&spec.name).is_some(),
            })
            .collect();
        println!("{}", format_emotions_table(&rows));
        println!("{}", format_languages_table(&languages));
    }

    Ok(exitcode::OK)
}
