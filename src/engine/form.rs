#![forbid(unsafe_code)]

//! Whole-form validation

use crate::config::{FieldDefinition, FormDefinition};
use crate::engine::ValidationError;
use crate::engine::field::CompiledValidation;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value};

/// Submitted values keyed by field id
pub type Responses = Map<String, Value>;

static ABSENT: Value = Value::Null;

/// Outcome of validating a whole form
///
/// `is_valid` is derived from `errors` and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Build a result; validity is derived from `errors`
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Errors for a single field, in check order
    pub fn errors_for<'a>(&'a self, field_id: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.field == field_id)
    }
}

/// The fields of a form with every config compiled once
///
/// Cheap to share across threads; validating a submission never mutates it.
#[derive(Debug, Clone)]
pub struct FormValidator {
    fields: Vec<CompiledField>,
}

#[derive(Debug, Clone)]
struct CompiledField {
    id: String,
    label: String,
    validation: CompiledValidation,
}

impl FormValidator {
    pub fn new(fields: &[FieldDefinition]) -> Self {
        let fields = fields
            .iter()
            .map(|field| CompiledField {
                id: field.id.clone(),
                label: field.label.clone(),
                validation: CompiledValidation::new(&field.validation),
            })
            .collect();
        Self { fields }
    }

    pub fn from_form(form: &FormDefinition) -> Self {
        Self::new(&form.fields)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate one submission; missing keys are treated as absent values
    pub fn validate(&self, responses: &Responses) -> ValidationResult {
        let errors: Vec<ValidationError> = self
            .fields
            .iter()
            .flat_map(|field| {
                let value = responses.get(&field.id).unwrap_or(&ABSENT);
                field.validation.validate(value, &field.id, &field.label)
            })
            .collect();

        tracing::debug!(
            fields = self.fields.len(),
            errors = errors.len(),
            "validated submission"
        );

        ValidationResult::new(errors)
    }

    /// Validate many submissions in parallel, preserving input order
    pub fn validate_all(&self, submissions: &[Responses]) -> Vec<ValidationResult> {
        submissions
            .par_iter()
            .map(|responses| self.validate(responses))
            .collect()
    }
}

/// Validate a submission against a list of field definitions
pub fn validate_form(responses: &Responses, fields: &[FieldDefinition]) -> ValidationResult {
    FormValidator::new(fields).validate(responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationConfig;
    use serde_json::json;

    fn responses(value: Value) -> Responses {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    fn fields() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new(
                "f1",
                "Name",
                "text",
                ValidationConfig {
                    required: Some(true),
                    ..Default::default()
                },
            ),
            FieldDefinition::new(
                "f2",
                "Code",
                "text",
                ValidationConfig {
                    min_length: Some(3.0),
                    ..Default::default()
                },
            ),
        ]
    }

    #[test]
    fn test_errors_preserve_field_order() {
        let result = validate_form(&responses(json!({"f2": "ab", "f1": ""})), &fields());
        assert!(!result.is_valid());
        let ids: Vec<_> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f2"]);
    }

    #[test]
    fn test_missing_key_is_absent() {
        let result = validate_form(&Responses::new(), &fields());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].message, "Name is required");
    }

    #[test]
    fn test_valid_submission() {
        let result = validate_form(&responses(json!({"f1": "Ada", "f2": "abc"})), &fields());
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_validate_all_keeps_order() {
        let validator = FormValidator::new(&fields());
        let submissions = vec![
            responses(json!({"f1": "Ada"})),
            responses(json!({"f1": ""})),
            responses(json!({"f1": "Bob", "f2": "x"})),
        ];
        let results = validator.validate_all(&submissions);
        let valid: Vec<_> = results.iter().map(|r| r.is_valid()).collect();
        assert_eq!(valid, vec![true, false, false]);
        assert_eq!(results[2].errors_for("f2").count(), 1);
    }

    #[test]
    fn test_into_errors_yields_owned_errors() {
        let result = validate_form(&Responses::new(), &fields());
        let errors = result.into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "f1");
        assert_eq!(errors[0].field_label, "Name");
    }

    #[test]
    fn test_result_wire_shape() {
        let result = validate_form(&responses(json!({"f1": ""})), &fields()[..1]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            json!({
                "isValid": false,
                "errors": [{"field": "f1", "fieldLabel": "Name", "message": "Name is required"}]
            })
        );
    }
}
