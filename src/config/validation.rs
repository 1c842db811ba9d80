#![forbid(unsafe_code)]

//! The declarative, serializable validation configuration attached to a field
//!
//! A missing key means "no constraint of that kind", never "constraint with a
//! default value". The JSON shape uses camelCase keys so it round-trips with
//! the records stored by the form editor.

use crate::engine::PatternMatcher;
use crate::engine::value::format_number;
use crate::error::RuleError;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Constraints for a single field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Minimum length in Unicode scalar values (`chars().count()`), not
    /// UTF-16 code units
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub min_length: Option<f64>,

    /// Maximum length, counted like `min_length`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub max_length: Option<f64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub min: Option<f64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub max: Option<f64>,

    /// Regex source, matched case-sensitively with no implicit anchoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_rules: Option<Vec<CustomRule>>,
}

impl ValidationConfig {
    /// Whether the field must be non-blank
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// Shallow merge: every key set in `other` overwrites the same key here
    pub fn merge(&mut self, other: ValidationConfig) {
        let ValidationConfig {
            required,
            min_length,
            max_length,
            min,
            max,
            pattern,
            custom_rules,
        } = other;

        if required.is_some() {
            self.required = required;
        }
        if min_length.is_some() {
            self.min_length = min_length;
        }
        if max_length.is_some() {
            self.max_length = max_length;
        }
        if min.is_some() {
            self.min = min;
        }
        if max.is_some() {
            self.max = max;
        }
        if pattern.is_some() {
            self.pattern = pattern;
        }
        if custom_rules.is_some() {
            self.custom_rules = custom_rules;
        }
    }

    /// Report configurations that can never be satisfied or never compile
    ///
    /// Nothing here is enforced by the builder or the validator; callers
    /// decide whether an issue is fatal.
    pub fn sanity_check(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (key, bound) in [("minLength", self.min_length), ("maxLength", self.max_length)] {
            match bound {
                Some(bound) if !bound.is_finite() => {
                    issues.push(ConfigIssue::NonFiniteBound { key });
                }
                Some(bound) if bound < 0.0 || bound.fract() != 0.0 => {
                    issues.push(ConfigIssue::LengthNotWholeNumber { key, value: bound });
                }
                _ => {}
            }
        }

        if let (Some(min_length), Some(max_length)) = (self.min_length, self.max_length)
            && min_length > max_length
        {
            issues.push(ConfigIssue::LengthBoundsInverted {
                min_length,
                max_length,
            });
        }

        for (key, bound) in [("min", self.min), ("max", self.max)] {
            if let Some(bound) = bound
                && !bound.is_finite()
            {
                issues.push(ConfigIssue::NonFiniteBound { key });
            }
        }

        if let (Some(min), Some(max)) = (self.min, self.max)
            && min > max
        {
            issues.push(ConfigIssue::RangeInverted { min, max });
        }

        if let Some(pattern) = &self.pattern
            && let Err(e) = PatternMatcher::new(pattern)
        {
            issues.push(ConfigIssue::invalid_pattern(pattern, e));
        }

        for (index, rule) in self.custom_rules.iter().flatten().enumerate() {
            issues.extend(rule.sanity_check(index));
        }

        issues
    }
}

/// Write whole numbers as JSON integers, the way the editor stores them
fn serialize_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(n) if n.fract() == 0.0 && n.abs() < 1e15 => serializer.serialize_i64(*n as i64),
        Some(n) => serializer.serialize_f64(*n),
        None => serializer.serialize_none(),
    }
}

/// Kind of check a custom rule performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomRuleKind {
    Required,
    MinLength,
    MaxLength,
    Min,
    Max,
    Pattern,
}

impl CustomRuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomRuleKind::Required => "required",
            CustomRuleKind::MinLength => "minLength",
            CustomRuleKind::MaxLength => "maxLength",
            CustomRuleKind::Min => "min",
            CustomRuleKind::Max => "max",
            CustomRuleKind::Pattern => "pattern",
        }
    }

    /// Whether the rule is meaningless without a `value`
    pub fn needs_value(&self) -> bool {
        !matches!(self, CustomRuleKind::Required)
    }
}

/// A user-authored rule carrying its own error message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRule {
    #[serde(rename = "type")]
    pub kind: CustomRuleKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    pub message: String,
}

impl CustomRule {
    /// Numeric parameter, accepting numbers or numeric strings
    pub fn numeric_value(&self) -> Option<f64> {
        match self.value.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|n| n.is_finite())
    }

    /// Pattern parameter for `pattern` rules
    pub fn pattern_value(&self) -> Option<&str> {
        self.value.as_ref()?.as_str()
    }

    fn sanity_check(&self, index: usize) -> Vec<ConfigIssue> {
        if !self.kind.needs_value() {
            return vec![];
        }

        if self.kind == CustomRuleKind::Pattern {
            return match self.pattern_value() {
                None => vec![ConfigIssue::CustomRuleMissingValue {
                    index,
                    kind: self.kind,
                }],
                Some(pattern) => match PatternMatcher::new(pattern) {
                    Ok(_) => vec![],
                    Err(e) => vec![ConfigIssue::invalid_pattern(pattern, e)],
                },
            };
        }

        if self.numeric_value().is_none() {
            return vec![ConfigIssue::CustomRuleMissingValue {
                index,
                kind: self.kind,
            }];
        }

        vec![]
    }
}

/// A problem found by [`ValidationConfig::sanity_check`]
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssue {
    LengthBoundsInverted { min_length: f64, max_length: f64 },
    LengthNotWholeNumber { key: &'static str, value: f64 },
    RangeInverted { min: f64, max: f64 },
    NonFiniteBound { key: &'static str },
    InvalidPattern { pattern: String, message: String },
    CustomRuleMissingValue { index: usize, kind: CustomRuleKind },
}

impl ConfigIssue {
    fn invalid_pattern(pattern: &str, error: RuleError) -> Self {
        let message = match error {
            RuleError::InvalidPattern { message, .. } => message,
            other => other.to_string(),
        };
        ConfigIssue::InvalidPattern {
            pattern: pattern.to_string(),
            message,
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::LengthBoundsInverted {
                min_length,
                max_length,
            } => write!(
                f,
                "minLength ({}) is greater than maxLength ({})",
                format_number(*min_length),
                format_number(*max_length)
            ),
            ConfigIssue::LengthNotWholeNumber { key, value } => write!(
                f,
                "{} ({}) is not a whole number of characters",
                key,
                format_number(*value)
            ),
            ConfigIssue::RangeInverted { min, max } => write!(
                f,
                "min ({}) is greater than max ({})",
                format_number(*min),
                format_number(*max)
            ),
            ConfigIssue::NonFiniteBound { key } => write!(f, "{} is not a finite number", key),
            ConfigIssue::InvalidPattern { pattern, message } => {
                write!(f, "pattern '{}' does not compile: {}", pattern, message)
            }
            ConfigIssue::CustomRuleMissingValue { index, kind } => write!(
                f,
                "custom rule #{} ({}) has no usable value",
                index + 1,
                kind.as_str()
            ),
        }
    }
}
