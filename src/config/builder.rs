#![forbid(unsafe_code)]

//! Reduce a list of active rules to a single [`ValidationConfig`]

use crate::config::ValidationConfig;
use crate::error::RuleError;
use crate::rules::find_template;
use crate::types::ActiveRule;

/// Merge the selected rules, in order, on top of `{ required }`
///
/// Later rules overwrite keys set by earlier ones, so two pattern rules
/// leave only the last pattern. Unknown rule ids are skipped.
pub fn build_validation_config(selected: &[ActiveRule], required: bool) -> ValidationConfig {
    let mut config = ValidationConfig {
        required: Some(required),
        ..Default::default()
    };

    for rule in selected {
        match find_template(&rule.rule_id) {
            Some(template) => config.merge(template.generate_validation(rule.params.as_ref())),
            None => tracing::warn!(rule_id = %rule.rule_id, "skipping unknown validation rule"),
        }
    }

    config
}

/// Like [`build_validation_config`] but unknown rule ids are an error
///
/// # Errors
///
/// Returns `RuleError::NotFound` for the first id with no template.
pub fn build_validation_config_strict(
    selected: &[ActiveRule],
    required: bool,
) -> Result<ValidationConfig, RuleError> {
    if let Some(unknown) = selected
        .iter()
        .find(|rule| find_template(&rule.rule_id).is_none())
    {
        return Err(RuleError::NotFound(unknown.rule_id.clone()));
    }

    Ok(build_validation_config(selected, required))
}
