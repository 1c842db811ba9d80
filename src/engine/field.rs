#![forbid(unsafe_code)]

//! Single-field validation
//!
//! A [`ValidationConfig`] is compiled once into a [`CompiledValidation`],
//! which can then check any number of values. Compilation is fail-open: a
//! pattern that does not compile is logged and dropped instead of blocking
//! submission.

use crate::config::{CustomRule, CustomRuleKind, ValidationConfig};
use crate::engine::ValidationError;
use crate::engine::matcher::PatternMatcher;
use crate::engine::value::{as_number, char_len, format_number, to_display_string};
use crate::rules::patterns::known_description;
use serde_json::Value;

/// Label used in messages when a field has none
pub const FALLBACK_LABEL: &str = "This field";

#[derive(Debug, Clone)]
struct CompiledPattern {
    matcher: PatternMatcher,
    description: Option<&'static str>,
}

#[derive(Debug, Clone)]
enum CustomCheck {
    Required,
    MinLength(f64),
    MaxLength(f64),
    Min(f64),
    Max(f64),
    Pattern(PatternMatcher),
}

#[derive(Debug, Clone)]
struct CompiledCustomRule {
    check: CustomCheck,
    message: String,
}

/// A validation config with its patterns compiled
#[derive(Debug, Clone)]
pub struct CompiledValidation {
    required: bool,
    min_length: Option<f64>,
    max_length: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    pattern: Option<CompiledPattern>,
    custom: Vec<CompiledCustomRule>,
}

impl CompiledValidation {
    /// Compile a config; malformed patterns are logged and skipped
    pub fn new(config: &ValidationConfig) -> Self {
        let pattern = config
            .pattern
            .as_deref()
            .and_then(compile_pattern)
            .map(|(matcher, source)| CompiledPattern {
                description: known_description(source),
                matcher,
            });

        let custom = config
            .custom_rules
            .iter()
            .flatten()
            .filter_map(compile_custom_rule)
            .collect();

        Self {
            required: config.is_required(),
            min_length: config.min_length,
            max_length: config.max_length,
            min: config.min,
            max: config.max,
            pattern,
            custom,
        }
    }

    /// Check one value
    ///
    /// A blank required value yields exactly one "is required" error and
    /// nothing else. A blank optional value yields nothing. Otherwise every
    /// configured check runs and contributes its own error.
    pub fn validate(&self, value: &Value, field_id: &str, field_label: &str) -> Vec<ValidationError> {
        let label = if field_label.is_empty() {
            FALLBACK_LABEL
        } else {
            field_label
        };
        let error = |message: String| ValidationError {
            field: field_id.to_string(),
            field_label: field_label.to_string(),
            message,
        };

        let text = to_display_string(value);
        if text.trim().is_empty() {
            return self
                .required_message(label)
                .map(|message| vec![error(message)])
                .unwrap_or_default();
        }

        let mut errors = Vec::new();
        let length = char_len(&text) as f64;

        if let Some(min_length) = self.min_length
            && length < min_length
        {
            errors.push(error(format!(
                "{} must be at least {} characters",
                label,
                format_number(min_length)
            )));
        }

        if let Some(max_length) = self.max_length
            && length > max_length
        {
            errors.push(error(format!(
                "{} must be at most {} characters",
                label,
                format_number(max_length)
            )));
        }

        let number = as_number(value);
        if let Some(number) = number {
            if let Some(min) = self.min
                && number < min
            {
                errors.push(error(format!("{} must be at least {}", label, format_number(min))));
            }
            if let Some(max) = self.max
                && number > max
            {
                errors.push(error(format!("{} must be at most {}", label, format_number(max))));
            }
        }

        if let Some(pattern) = &self.pattern
            && !pattern.matcher.is_match(&text)
        {
            let message = match pattern.description {
                Some(description) => format!("{} must be: {}", label, description.to_lowercase()),
                None => format!("{} has an invalid format", label),
            };
            errors.push(error(message));
        }

        for rule in &self.custom {
            let failed = match &rule.check {
                CustomCheck::Required => false,
                CustomCheck::MinLength(n) => length < *n,
                CustomCheck::MaxLength(n) => length > *n,
                CustomCheck::Min(n) => number.is_some_and(|v| v < *n),
                CustomCheck::Max(n) => number.is_some_and(|v| v > *n),
                CustomCheck::Pattern(matcher) => !matcher.is_match(&text),
            };
            if failed {
                errors.push(error(rule.message.clone()));
            }
        }

        errors
    }

    /// Message for a blank value, if the field is required at all
    fn required_message(&self, label: &str) -> Option<String> {
        if self.required {
            return Some(format!("{} is required", label));
        }
        self.custom
            .iter()
            .find(|rule| matches!(rule.check, CustomCheck::Required))
            .map(|rule| rule.message.clone())
    }
}

fn compile_pattern(source: &str) -> Option<(PatternMatcher, &str)> {
    match PatternMatcher::new(source) {
        Ok(matcher) => Some((matcher, source)),
        Err(e) => {
            tracing::warn!(
                pattern = %source,
                error = %e,
                "invalid validation pattern, skipping pattern check"
            );
            None
        }
    }
}

fn compile_custom_rule(rule: &CustomRule) -> Option<CompiledCustomRule> {
    let check = match rule.kind {
        CustomRuleKind::Required => Some(CustomCheck::Required),
        CustomRuleKind::MinLength => rule.numeric_value().map(CustomCheck::MinLength),
        CustomRuleKind::MaxLength => rule.numeric_value().map(CustomCheck::MaxLength),
        CustomRuleKind::Min => rule.numeric_value().map(CustomCheck::Min),
        CustomRuleKind::Max => rule.numeric_value().map(CustomCheck::Max),
        CustomRuleKind::Pattern => rule
            .pattern_value()
            .and_then(compile_pattern)
            .map(|(matcher, _)| CustomCheck::Pattern(matcher)),
    };

    if check.is_none() {
        tracing::warn!(
            rule = rule.kind.as_str(),
            "custom rule has no usable value, skipping"
        );
    }

    check.map(|check| CompiledCustomRule {
        check,
        message: rule.message.clone(),
    })
}

/// Validate one value against a config
///
/// Compiles the config on every call; use [`CompiledValidation`] directly
/// to check many values against the same config.
pub fn validate_field(
    value: &Value,
    field_id: &str,
    field_label: &str,
    config: &ValidationConfig,
) -> Vec<ValidationError> {
    CompiledValidation::new(config).validate(value, field_id, field_label)
}
