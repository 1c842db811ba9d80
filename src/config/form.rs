//! Parsing and validation of form definition files
//!
//! A form definition lists fields with their semantic type and validation
//! config. TOML is the default format; files ending in `.json` are read as
//! JSON, matching the records the form editor persists.

use crate::config::validation::{ConfigIssue, ValidationConfig};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A whole form: optional metadata plus its ordered fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    #[serde(default)]
    pub form: FormMeta,

    pub fields: Vec<FieldDefinition>,
}

/// Descriptive metadata, unused by validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One field of a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: String,

    #[serde(default)]
    pub label: String,

    #[serde(default = "default_field_type")]
    pub field_type: String,

    /// Absent means no constraints
    #[serde(default)]
    pub validation: ValidationConfig,
}

fn default_field_type() -> String {
    "text".to_string()
}

impl FieldDefinition {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        field_type: impl Into<String>,
        validation: ValidationConfig,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field_type: field_type.into(),
            validation,
        }
    }
}

/// Sanity-check findings for one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssues {
    pub field_id: String,
    pub issues: Vec<ConfigIssue>,
}

impl FormDefinition {
    /// Load a form definition, picking the format from the file extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            Self::parse_json(&content)
        } else {
            Self::parse(&content)
        }
    }

    /// Parse a form definition from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let form: FormDefinition = toml::from_str(s)?;
        form.validate()?;
        Ok(form)
    }

    /// Parse a form definition from a JSON string
    pub fn parse_json(s: &str) -> Result<Self, ConfigError> {
        let form: FormDefinition = serde_json::from_str(s)?;
        form.validate()?;
        Ok(form)
    }

    /// Structural checks: at least one field, unique non-empty ids
    fn validate(&self) -> Result<(), ConfigError> {
        if self.fields.is_empty() {
            return Err(ConfigError::Validation(
                "Form has no fields. Add at least one [[fields]] entry.".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.id.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Field id must not be empty".to_string(),
                ));
            }
            if !seen.insert(field.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate field id '{}'",
                    field.id
                )));
            }
        }

        Ok(())
    }

    /// Run [`ValidationConfig::sanity_check`] on every field
    ///
    /// Only fields with at least one issue are returned, in form order.
    pub fn sanity_check(&self) -> Vec<FieldIssues> {
        self.fields
            .iter()
            .filter_map(|field| {
                let issues = field.validation.sanity_check();
                (!issues.is_empty()).then(|| FieldIssues {
                    field_id: field.id.clone(),
                    issues,
                })
            })
            .collect()
    }

    /// Fail on the first sanity-check finding
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn ensure_sane(&self) -> Result<(), ConfigError> {
        match self.sanity_check().into_iter().next() {
            Some(found) => Err(ConfigError::InvalidValue {
                field: found.field_id,
                message: found
                    .issues
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            }),
            None => Ok(()),
        }
    }
}
