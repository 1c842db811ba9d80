//! Common helper functions shared across CLI commands

use crate::config::FormDefinition;
use crate::engine::Responses;
use crate::error::{ConfigError, FormcheckError};
use crate::rules::find_template;
use crate::types::{ActiveRule, RuleParams};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Map an error to the exit code the CLI reports for it
pub(crate) fn exit_code_for(error: &FormcheckError) -> i32 {
    match error {
        FormcheckError::Parse { .. }
        | FormcheckError::Config(ConfigError::Parse(_))
        | FormcheckError::Config(ConfigError::Json(_)) => EXIT_PARSE_ERROR,
        _ => EXIT_ERROR,
    }
}

/// Load a form definition, optionally refusing inconsistent configs
///
/// Without `strict`, sanity-check findings are logged as warnings.
pub(crate) fn load_form(path: &Path, strict: bool) -> Result<FormDefinition, ConfigError> {
    let form = FormDefinition::load(path)?;

    if strict {
        form.ensure_sane()?;
    } else {
        for found in form.sanity_check() {
            for issue in &found.issues {
                tracing::warn!(field = %found.field_id, "{}", issue);
            }
        }
    }

    Ok(form)
}

/// Load submissions from a responses file
///
/// Accepts a single JSON object, a JSON array of objects, or JSON Lines
/// with one object per line.
pub(crate) fn load_responses(path: &Path) -> Result<Vec<Responses>, FormcheckError> {
    let content = fs::read_to_string(path)?;
    parse_responses(&content).map_err(|message| FormcheckError::Parse {
        file: path.to_path_buf(),
        message,
    })
}

fn parse_responses(content: &str) -> Result<Vec<Responses>, String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err("no submissions found".to_string());
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => Ok(vec![map]),
        Ok(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(map) => Ok(map),
                _ => Err(format!("item {} is not a JSON object", i + 1)),
            })
            .collect(),
        Ok(_) => Err("expected a JSON object, array, or JSON Lines".to_string()),
        Err(_) => parse_json_lines(trimmed),
    }
}

fn parse_json_lines(content: &str) -> Result<Vec<Responses>, String> {
    let mut submissions = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(Value::Object(map)) => submissions.push(map),
            Ok(_) => return Err(format!("line {}: not a JSON object", i + 1)),
            Err(e) => return Err(format!("line {}: {}", i + 1, e)),
        }
    }

    Ok(submissions)
}

/// Parse a `RULE` or `RULE=VALUE` argument into an active rule
///
/// The value is a pattern for templates that take one, and a number
/// otherwise. Unknown rule ids are passed through so the builder can decide
/// what to do with them.
pub(crate) fn parse_rule_arg(arg: &str) -> Result<ActiveRule, ConfigError> {
    let Some((rule_id, raw)) = arg.split_once('=') else {
        return Ok(ActiveRule::new(arg));
    };

    let takes_pattern = find_template(rule_id).is_some_and(|t| t.takes_pattern());
    let params = if takes_pattern {
        RuleParams::pattern(raw)
    } else {
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidValue {
                field: rule_id.to_string(),
                message: format!("expected a number, got '{}'", raw),
            })?;
        RuleParams::value(value)
    };

    Ok(ActiveRule::with_params(rule_id, params))
}
