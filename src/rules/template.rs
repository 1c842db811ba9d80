#![forbid(unsafe_code)]

//! Rule templates: named recipes that produce part of a validation config

use crate::config::ValidationConfig;
use crate::rules::patterns::PatternEntry;
use crate::types::{Category, RuleParams};

/// What a template contributes to a [`ValidationConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `minLength` from `params.value`
    MinLength,
    /// `maxLength` from `params.value`
    MaxLength,
    /// `min` from `params.value`
    Min,
    /// `max` from `params.value`
    Max,
    /// A fixed pattern from the registry; parameters are ignored
    Pattern(&'static PatternEntry),
    /// `pattern` from `params.pattern`
    CustomPattern,
}

/// A catalog entry
///
/// Templates are process-wide constants. Generating a config is pure: the
/// same parameters always produce the same output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub kind: RuleKind,
}

impl RuleTemplate {
    /// Turn optional parameters into a partial config
    ///
    /// Missing parameters produce an empty config rather than an error.
    /// Numeric values pass through unchanged, including negative and
    /// fractional lengths; [`ValidationConfig::sanity_check`] reports those.
    pub fn generate_validation(&self, params: Option<&RuleParams>) -> ValidationConfig {
        let value = params.and_then(|p| p.value).filter(|v| !v.is_nan());

        match self.kind {
            RuleKind::MinLength => ValidationConfig {
                min_length: value,
                ..Default::default()
            },
            RuleKind::MaxLength => ValidationConfig {
                max_length: value,
                ..Default::default()
            },
            RuleKind::Min => ValidationConfig {
                min: value,
                ..Default::default()
            },
            RuleKind::Max => ValidationConfig {
                max: value,
                ..Default::default()
            },
            RuleKind::Pattern(entry) => ValidationConfig {
                pattern: Some(entry.pattern.to_string()),
                ..Default::default()
            },
            RuleKind::CustomPattern => ValidationConfig {
                pattern: params
                    .and_then(|p| p.pattern.as_deref())
                    .filter(|p| !p.is_empty())
                    .map(str::to_string),
                ..Default::default()
            },
        }
    }

    /// The raw pattern source for fixed-pattern templates
    ///
    /// Always identical to the `pattern` produced by
    /// [`generate_validation`](Self::generate_validation).
    pub fn generate_pattern(&self) -> Option<&'static str> {
        match self.kind {
            RuleKind::Pattern(entry) => Some(entry.pattern),
            _ => None,
        }
    }

    /// Whether the template reads `params.value`
    pub fn takes_value(&self) -> bool {
        matches!(
            self.kind,
            RuleKind::MinLength | RuleKind::MaxLength | RuleKind::Min | RuleKind::Max
        )
    }

    /// Whether the template reads `params.pattern`
    pub fn takes_pattern(&self) -> bool {
        self.kind == RuleKind::CustomPattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::patterns;

    fn template(kind: RuleKind) -> RuleTemplate {
        RuleTemplate {
            id: "test",
            name: "Test",
            description: "Test template",
            category: Category::Text,
            kind,
        }
    }

    #[test]
    fn test_parameterized_without_value_is_empty() {
        for kind in [
            RuleKind::MinLength,
            RuleKind::MaxLength,
            RuleKind::Min,
            RuleKind::Max,
        ] {
            let t = template(kind);
            assert_eq!(t.generate_validation(None), ValidationConfig::default());
            assert_eq!(
                t.generate_validation(Some(&RuleParams::default())),
                ValidationConfig::default()
            );
        }
    }

    #[test]
    fn test_range_values_pass_through_unchanged() {
        let t = template(RuleKind::Min);
        let config = t.generate_validation(Some(&RuleParams::value(-42.5)));
        assert_eq!(config.min, Some(-42.5));
    }

    #[test]
    fn test_length_values_pass_through_unchanged() {
        let min = template(RuleKind::MinLength);
        let max = template(RuleKind::MaxLength);
        assert_eq!(
            min.generate_validation(Some(&RuleParams::value(2.5))).min_length,
            Some(2.5)
        );
        assert_eq!(
            max.generate_validation(Some(&RuleParams::value(2.5))).max_length,
            Some(2.5)
        );
        assert_eq!(
            min.generate_validation(Some(&RuleParams::value(-1.0))).min_length,
            Some(-1.0)
        );
    }

    #[test]
    fn test_fixed_pattern_ignores_params() {
        let t = template(RuleKind::Pattern(&patterns::EMAIL));
        let with_params = t.generate_validation(Some(&RuleParams {
            value: Some(3.0),
            pattern: Some("^x$".to_string()),
        }));
        assert_eq!(with_params, t.generate_validation(None));
        assert_eq!(with_params.pattern.as_deref(), Some(patterns::EMAIL.pattern));
        assert_eq!(t.generate_pattern(), Some(patterns::EMAIL.pattern));
    }

    #[test]
    fn test_custom_pattern_reads_params() {
        let t = template(RuleKind::CustomPattern);
        assert_eq!(
            t.generate_validation(Some(&RuleParams::pattern("^[A-Z]{3}$")))
                .pattern
                .as_deref(),
            Some("^[A-Z]{3}$")
        );
        assert_eq!(t.generate_validation(None), ValidationConfig::default());
        assert_eq!(t.generate_pattern(), None);
    }
}
