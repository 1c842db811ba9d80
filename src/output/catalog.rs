#![forbid(unsafe_code)]

//! Catalog output formatters
//!
//! Formatters for `formcheck rules` (templates offered for a field type) and
//! `formcheck patterns` (the pattern registry), in human-readable and JSONL
//! form.

use crate::rules::{PatternEntry, RuleTemplate};
use serde::Serialize;

/// Human-readable formatter for catalog listings
pub struct CatalogHumanFormatter;

impl CatalogHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        CatalogHumanFormatter
    }

    /// Format the templates offered for `field_type`
    pub fn format_rules(&self, field_type: &str, templates: &[&RuleTemplate]) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Rules for field type '{}' ({} available):\n",
            field_type,
            templates.len()
        ));
        output.push('\n');

        for template in templates {
            output.push_str(&format!("{} ({})\n", template.id, template.category));
            output.push_str(&format!("  Name: {}\n", template.name));
            output.push_str(&format!("  Description: {}\n", template.description));
            if template.takes_value() {
                output.push_str("  Parameter: numeric value\n");
            } else if template.takes_pattern() {
                output.push_str("  Parameter: regex pattern\n");
            }
            if let Some(pattern) = template.generate_pattern() {
                output.push_str(&format!("  Pattern: {}\n", pattern));
            }
            output.push('\n');
        }

        output
    }

    /// Format the pattern registry
    pub fn format_patterns(&self, patterns: &[PatternEntry]) -> String {
        let mut output = String::new();

        output.push_str(&format!("Patterns ({}):\n", patterns.len()));
        output.push('\n');

        for entry in patterns {
            output.push_str(&format!("{}\n", entry.key));
            output.push_str(&format!("  Description: {}\n", entry.description));
            output.push_str(&format!("  Pattern: {}\n", entry.pattern));
            output.push('\n');
        }

        output
    }
}

impl Default for CatalogHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL output structure for a rule template
#[derive(Debug, Serialize)]
struct JsonlRule<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    category: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pattern: Option<&'a str>,
    parameter: Option<&'static str>,
}

/// JSONL output structure for a registry entry
#[derive(Debug, Serialize)]
struct JsonlPattern<'a> {
    key: &'a str,
    pattern: &'a str,
    description: &'a str,
}

/// JSONL formatter for catalog listings
pub struct CatalogJsonlFormatter;

impl CatalogJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        CatalogJsonlFormatter
    }

    /// One JSON object per template
    pub fn format_rules(&self, templates: &[&RuleTemplate]) -> String {
        let mut output = String::new();

        for template in templates {
            let parameter = if template.takes_value() {
                Some("value")
            } else if template.takes_pattern() {
                Some("pattern")
            } else {
                None
            };
            let record = JsonlRule {
                id: template.id,
                name: template.name,
                description: template.description,
                category: template.category.as_str(),
                pattern: template.generate_pattern(),
                parameter,
            };

            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// One JSON object per registry entry
    pub fn format_patterns(&self, patterns: &[PatternEntry]) -> String {
        let mut output = String::new();

        for entry in patterns {
            let record = JsonlPattern {
                key: entry.key,
                pattern: entry.pattern,
                description: entry.description,
            };

            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }
}

impl Default for CatalogJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
