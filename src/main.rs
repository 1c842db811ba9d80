//! formcheck CLI entry point

use clap::Parser;
use formcheck::cli::{Command, args::Cli};
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `formcheck=debug`
const LOG_ENV: &str = "FORMCHECK_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Rules { field_type, format } => {
            formcheck::cli::list::run_rules(&field_type, format)
        }
        Command::Patterns { format } => formcheck::cli::list::run_patterns(format),
        Command::Build {
            rules,
            required,
            strict,
        } => formcheck::cli::build::run_build(&rules, required, strict),
        Command::Check {
            form,
            responses,
            format,
            strict,
        } => formcheck::cli::check::run_check(&form, &responses, format, strict, cli.color),
        Command::Lint { form } => formcheck::cli::lint::run_lint(&form),
    };

    process::exit(exit_code);
}
