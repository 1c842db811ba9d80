//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for formcheck commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for termcolor::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// formcheck CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "formcheck")]
#[command(about = "Validation rule engine for form builders")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Available formcheck subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the rule templates offered for a field type
    Rules {
        /// Field type, e.g. text, number, email, phone, url
        field_type: String,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// List the predefined pattern registry
    Patterns {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Merge rules into a validation config and print it as JSON
    Build {
        /// Rules to apply in order, as RULE or RULE=VALUE
        rules: Vec<String>,

        /// Mark the field as required
        #[arg(long)]
        required: bool,

        /// Fail on unknown rule ids instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Validate submitted responses against a form definition
    Check {
        /// Form definition (TOML, or JSON with a .json extension)
        #[arg(long)]
        form: PathBuf,

        /// Responses: a JSON object, a JSON array, or JSON Lines
        #[arg(long)]
        responses: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,

        /// Refuse to run when the form has inconsistent validation configs
        #[arg(long)]
        strict: bool,
    },

    /// Report inconsistent validation configs in a form definition
    Lint {
        /// Form definition (TOML, or JSON with a .json extension)
        #[arg(long)]
        form: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        // Verify that the CLI struct is properly configured
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rules_default_format() {
        let cli = Cli::parse_from(["formcheck", "rules", "email"]);
        match cli.command {
            Command::Rules { field_type, format } => {
                assert_eq!(field_type, "email");
                assert_eq!(format, OutputFormat::Human);
            }
            _ => panic!("Expected Rules command"),
        }
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_build_args() {
        let cli = Cli::parse_from([
            "formcheck",
            "build",
            "--required",
            "minLength=5",
            "email",
        ]);
        match cli.command {
            Command::Build {
                rules,
                required,
                strict,
            } => {
                assert_eq!(rules, vec!["minLength=5", "email"]);
                assert!(required);
                assert!(!strict);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_check_args() {
        let cli = Cli::parse_from([
            "formcheck",
            "--color",
            "never",
            "check",
            "--form",
            "form.toml",
            "--responses",
            "responses.jsonl",
            "-f",
            "jsonl",
        ]);
        match cli.command {
            Command::Check {
                form,
                responses,
                format,
                strict,
            } => {
                assert_eq!(form, PathBuf::from("form.toml"));
                assert_eq!(responses, PathBuf::from("responses.jsonl"));
                assert_eq!(format, OutputFormat::Jsonl);
                assert!(!strict);
            }
            _ => panic!("Expected Check command"),
        }
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn test_check_requires_form() {
        let result = Cli::try_parse_from(["formcheck", "check", "--responses", "r.json"]);
        assert!(result.is_err());
    }
}
