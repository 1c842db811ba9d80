#![forbid(unsafe_code)]

//! Human-readable output for `formcheck check`

use crate::output::CheckReport;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

/// Human-readable formatter for check results
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new HumanFormatter
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Format the report without color
    pub fn format(&self, report: &CheckReport) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail
        let _ = self.write(report, &mut out);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Write the report, colored when `out` supports it
    pub fn write(&self, report: &CheckReport, out: &mut dyn WriteColor) -> io::Result<()> {
        if let Some(title) = &report.form_title {
            writeln!(out, "Form: {}", title)?;
            writeln!(out)?;
        }

        for (index, result) in report.results.iter().enumerate() {
            write!(out, "Submission {}: ", index + 1)?;
            if result.is_valid() {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                writeln!(out, "valid ✓")?;
            } else {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                writeln!(out, "{} error(s) ✗", result.errors().len())?;
            }
            out.reset()?;

            for error in result.errors() {
                if error.field_label.is_empty() {
                    writeln!(out, "  {}: {}", error.field, error.message)?;
                } else {
                    writeln!(
                        out,
                        "  {} ({}): {}",
                        error.field, error.field_label, error.message
                    )?;
                }
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "Checked {} submission(s): {} invalid, {} error(s)",
            report.results.len(),
            report.invalid_count(),
            report.total_errors()
        )?;

        if report.passed() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            writeln!(out, "Check PASSED")?;
        } else {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            writeln!(out, "Check FAILED")?;
        }
        out.reset()
    }

    /// Write the report to stdout
    pub fn write_to_stdout(&self, report: &CheckReport, color: ColorChoice) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(color);
        self.write(report, &mut stdout)?;
        stdout.flush()
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}
