#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order:
//! 1. All error records (by submission, then field order)
//! 2. One summary record per submission
//! 3. One status record

use crate::output::CheckReport;
use serde::Serialize;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format the report as JSONL
    pub fn format(&self, report: &CheckReport) -> String {
        let mut output = String::new();

        for (index, result) in report.results.iter().enumerate() {
            for error in result.errors() {
                push_record(
                    &mut output,
                    &ErrorRecord {
                        record_type: "error",
                        submission: index + 1,
                        field: &error.field,
                        field_label: &error.field_label,
                        message: &error.message,
                    },
                );
            }
        }

        for (index, result) in report.results.iter().enumerate() {
            push_record(
                &mut output,
                &SubmissionRecord {
                    record_type: "submission",
                    submission: index + 1,
                    is_valid: result.is_valid(),
                    errors: result.errors().len(),
                },
            );
        }

        push_record(
            &mut output,
            &StatusRecord {
                record_type: "status",
                passed: report.passed(),
                submissions: report.results.len(),
                invalid: report.invalid_count(),
                total_errors: report.total_errors(),
            },
        );

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, report: &CheckReport) {
        print!("{}", self.format(report));
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_record<T: Serialize>(output: &mut String, record: &T) {
    if let Ok(json) = serde_json::to_string(record) {
        output.push_str(&json);
        output.push('\n');
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    submission: usize,
    field: &'a str,
    field_label: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    submission: usize,
    is_valid: bool,
    errors: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    submissions: usize,
    invalid: usize,
    total_errors: usize,
}
