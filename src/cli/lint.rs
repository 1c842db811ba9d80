//! Lint command implementation
//!
//! Reports validation configs that can never be satisfied or that contain
//! patterns the validator would silently skip.

use crate::cli::common::{EXIT_INVALID, EXIT_SUCCESS, exit_code_for};
use crate::config::{FieldIssues, FormDefinition};
use crate::error::FormcheckError;
use std::path::Path;

/// Run the lint command
///
/// # Returns
///
/// Exit code:
/// - 0: No issues
/// - 1: One or more fields have issues
/// - 2: Error (I/O or invalid definition)
/// - 3: Parse error
pub fn run_lint(form: &Path) -> i32 {
    match lint_form(form) {
        Ok(found) if found.is_empty() => {
            println!("No issues found.");
            EXIT_SUCCESS
        }
        Ok(found) => {
            print!("{}", format_issues(&found));
            EXIT_INVALID
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

fn lint_form(path: &Path) -> Result<Vec<FieldIssues>, FormcheckError> {
    let form = FormDefinition::load(path)?;
    Ok(form.sanity_check())
}

fn format_issues(found: &[FieldIssues]) -> String {
    let mut output = String::new();
    let total: usize = found.iter().map(|f| f.issues.len()).sum();

    for field in found {
        for issue in &field.issues {
            output.push_str(&format!("{}: {}\n", field.field_id, issue));
        }
    }
    output.push_str(&format!(
        "\n{} issue(s) in {} field(s)\n",
        total,
        found.len()
    ));

    output
}
