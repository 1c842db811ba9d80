//! Build command implementation
//!
//! Reduces `RULE[=VALUE]` arguments to a validation config, the same way the
//! form editor does on every rule change, and prints it as JSON.

use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, parse_rule_arg};
use crate::config::{ValidationConfig, build_validation_config, build_validation_config_strict};
use crate::error::{ConfigError, FormcheckError};
use crate::types::ActiveRule;

/// Run the build command
///
/// # Returns
///
/// Exit code:
/// - 0: Config printed
/// - 2: Error (bad argument, or unknown rule with `--strict`)
pub fn run_build(rules: &[String], required: bool, strict: bool) -> i32 {
    match run_build_inner(rules, required, strict) {
        Ok(json) => {
            println!("{}", json);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_build_inner(rules: &[String], required: bool, strict: bool) -> Result<String, FormcheckError> {
    let config = build_config(rules, required, strict)?;
    Ok(serde_json::to_string_pretty(&config).map_err(ConfigError::from)?)
}

pub(crate) fn build_config(
    rules: &[String],
    required: bool,
    strict: bool,
) -> Result<ValidationConfig, FormcheckError> {
    let selected = rules
        .iter()
        .map(|arg| parse_rule_arg(arg))
        .collect::<Result<Vec<ActiveRule>, _>>()?;

    if strict {
        Ok(build_validation_config_strict(&selected, required)?)
    } else {
        Ok(build_validation_config(&selected, required))
    }
}
