//! Check command implementation
//!
//! This module implements the `formcheck check` command, which:
//! - Loads a form definition (TOML or JSON)
//! - Loads one or more submissions from a responses file
//! - Compiles every field's validation config once
//! - Validates all submissions in parallel
//! - Formats output (human or JSONL)
//! - Returns appropriate exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{
    EXIT_INVALID, EXIT_SUCCESS, exit_code_for, load_form, load_responses,
};
use crate::engine::FormValidator;
use crate::error::FormcheckError;
use crate::output::{CheckReport, HumanFormatter, JsonlFormatter};
use std::path::Path;

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: Every submission is valid
/// - 1: At least one submission has validation errors
/// - 2: Error (configuration/I/O error)
/// - 3: Parse error (malformed form definition or responses)
pub fn run_check(
    form: &Path,
    responses: &Path,
    format: OutputFormat,
    strict: bool,
    color: ColorChoice,
) -> i32 {
    match run_check_inner(form, responses, format, strict, color) {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_INVALID,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

/// Internal implementation of check command
pub(crate) fn run_check_inner(
    form_path: &Path,
    responses_path: &Path,
    format: OutputFormat,
    strict: bool,
    color: ColorChoice,
) -> Result<bool, FormcheckError> {
    let form = load_form(form_path, strict)?;
    let submissions = load_responses(responses_path)?;

    if format == OutputFormat::Human {
        eprintln!(
            "Checking {} submission(s) against {} field(s)...",
            submissions.len(),
            form.fields.len()
        );
    }

    let validator = FormValidator::from_form(&form);
    let report = CheckReport {
        form_title: form.form.title.clone(),
        results: validator.validate_all(&submissions),
    };

    match format {
        OutputFormat::Human => {
            HumanFormatter::new().write_to_stdout(&report, color.into())?;
        }
        OutputFormat::Jsonl => JsonlFormatter::new().write_to_stdout(&report),
    }

    Ok(report.passed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR};
    use std::fs;
    use tempfile::TempDir;

    const FORM: &str = r#"
[[fields]]
id = "name"
label = "Name"
validation = { required = true }

[[fields]]
id = "age"
label = "Age"
fieldType = "number"
validation = { min = 18 }
"#;

    fn setup(responses: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("form.toml"), FORM).unwrap();
        fs::write(dir.path().join("responses.jsonl"), responses).unwrap();
        dir
    }

    fn run(dir: &TempDir) -> i32 {
        run_check(
            &dir.path().join("form.toml"),
            &dir.path().join("responses.jsonl"),
            OutputFormat::Jsonl,
            false,
            ColorChoice::Never,
        )
    }

    #[test]
    fn test_all_valid() {
        let dir = setup("{\"name\": \"Ada\", \"age\": 36}\n");
        assert_eq!(run(&dir), EXIT_SUCCESS);
    }

    #[test]
    fn test_some_invalid() {
        let dir = setup("{\"name\": \"Ada\", \"age\": 36}\n{\"age\": \"12\"}\n");
        assert_eq!(run(&dir), EXIT_INVALID);
    }

    #[test]
    fn test_malformed_responses() {
        let dir = setup("{\"name\": \"Ada\"}\nnot json\n");
        assert_eq!(run(&dir), EXIT_PARSE_ERROR);
    }

    #[test]
    fn test_missing_form() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("responses.jsonl"), "{}").unwrap();
        assert_eq!(run(&dir), EXIT_ERROR);
    }
}
