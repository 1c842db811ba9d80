//! Catalog listing commands
//!
//! `formcheck rules <FIELD_TYPE>` shows the templates the resolver offers
//! for a field type; `formcheck patterns` shows the pattern registry.

use crate::cli::args::OutputFormat;
use crate::cli::common::EXIT_SUCCESS;
use crate::output::{CatalogHumanFormatter, CatalogJsonlFormatter};
use crate::rules::{FieldTypeClass, PATTERNS, get_rules_for_field_type};

/// Run the rules command
pub fn run_rules(field_type: &str, format: OutputFormat) -> i32 {
    let templates = get_rules_for_field_type(field_type);

    match format {
        OutputFormat::Human => {
            let class = FieldTypeClass::classify(field_type);
            if class == FieldTypeClass::Other {
                eprintln!(
                    "Note: '{}' is not a recognized field type; showing text rules only.",
                    field_type
                );
            }
            print!(
                "{}",
                CatalogHumanFormatter::new().format_rules(field_type, &templates)
            );
        }
        OutputFormat::Jsonl => print!("{}", CatalogJsonlFormatter::new().format_rules(&templates)),
    }

    EXIT_SUCCESS
}

/// Run the patterns command
pub fn run_patterns(format: OutputFormat) -> i32 {
    match format {
        OutputFormat::Human => print!("{}", CatalogHumanFormatter::new().format_patterns(PATTERNS)),
        OutputFormat::Jsonl => print!("{}", CatalogJsonlFormatter::new().format_patterns(PATTERNS)),
    }

    EXIT_SUCCESS
}
