#![forbid(unsafe_code)]

//! Field-type-to-rules resolution
//!
//! A field's semantic type string is classified once into a
//! [`FieldTypeClass`]; each class selects a fixed subset of the catalog.
//! Exactly one class matches any string, and every class keeps at least the
//! `text` templates, so the result is never empty.

use crate::rules::builtin::templates;
use crate::rules::template::RuleTemplate;
use crate::types::Category;
use serde::Serialize;

/// Classification of a field type string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldTypeClass {
    /// `text`, `textarea`, `input`, `Input`
    Text,
    /// `number`, `slider`, `cgpa`
    Numeric,
    /// `email`
    Email,
    /// `phone`
    Phone,
    /// `url`, `website`
    Url,
    /// Anything else
    Other,
}

impl FieldTypeClass {
    /// Classify a field type; matching is case-sensitive on the literal string
    pub fn classify(field_type: &str) -> Self {
        match field_type {
            "text" | "textarea" | "input" | "Input" => FieldTypeClass::Text,
            "number" | "slider" | "cgpa" => FieldTypeClass::Numeric,
            "email" => FieldTypeClass::Email,
            "phone" => FieldTypeClass::Phone,
            "url" | "website" => FieldTypeClass::Url,
            _ => FieldTypeClass::Other,
        }
    }

    /// Whether a template is offered for fields of this class
    pub fn accepts(&self, template: &RuleTemplate) -> bool {
        match self {
            FieldTypeClass::Text => matches!(
                template.category,
                Category::Text
                    | Category::Contact
                    | Category::Format
                    | Category::Security
                    | Category::College
            ),
            FieldTypeClass::Numeric => {
                matches!(template.category, Category::Number | Category::College)
            }
            FieldTypeClass::Email => {
                matches!(template.id, "email" | "collegeEmail")
                    || template.category == Category::Text
            }
            FieldTypeClass::Phone => {
                matches!(template.id, "phone" | "indianPhone")
                    || template.category == Category::Text
            }
            FieldTypeClass::Url => template.id == "url" || template.category == Category::Text,
            FieldTypeClass::Other => template.category == Category::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldTypeClass::Text => "text",
            FieldTypeClass::Numeric => "numeric",
            FieldTypeClass::Email => "email",
            FieldTypeClass::Phone => "phone",
            FieldTypeClass::Url => "url",
            FieldTypeClass::Other => "other",
        }
    }
}

/// Templates applicable to a field type, in catalog order
pub fn get_rules_for_field_type(field_type: &str) -> Vec<&'static RuleTemplate> {
    let class = FieldTypeClass::classify(field_type);
    templates().filter(|t| class.accepts(t)).collect()
}
