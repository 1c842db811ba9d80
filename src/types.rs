#![forbid(unsafe_code)]

//! Core domain types for formcheck
//!
//! This module defines the small value types shared by the rule catalog,
//! the config builder, and the validator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping used by the catalog and the field-type resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Text,
    Number,
    Contact,
    Format,
    Security,
    College,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 6] = [
        Category::Text,
        Category::Number,
        Category::Contact,
        Category::Format,
        Category::Security,
        Category::College,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Text => "text",
            Category::Number => "number",
            Category::Contact => "contact",
            Category::Format => "format",
            Category::Security => "security",
            Category::College => "college",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters a user supplies when adding a rule in the editor
///
/// Parameterized length/range rules read `value`; the custom-pattern rule
/// reads `pattern`. Everything else ignores both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl RuleParams {
    /// Parameters carrying only a numeric value
    pub fn value(value: f64) -> Self {
        Self {
            value: Some(value),
            pattern: None,
        }
    }

    /// Parameters carrying only a pattern source
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            value: None,
            pattern: Some(pattern.into()),
        }
    }
}

/// An in-progress rule selection inside an editing session
///
/// The list of active rules is reduced to a
/// [`ValidationConfig`](crate::config::ValidationConfig) on every change and
/// is never persisted itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRule {
    pub rule_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<RuleParams>,
}

impl ActiveRule {
    /// A rule selection without parameters
    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            params: None,
        }
    }

    /// A rule selection with parameters
    pub fn with_params(rule_id: impl Into<String>, params: RuleParams) -> Self {
        Self {
            rule_id: rule_id.into(),
            params: Some(params),
        }
    }
}
