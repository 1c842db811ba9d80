//! Output formatters (human and JSONL)

pub mod catalog;
pub mod human;
pub mod jsonl;

pub use catalog::{CatalogHumanFormatter, CatalogJsonlFormatter};
pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;

use crate::engine::ValidationResult;

/// Results of checking one or more submissions against a form
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub form_title: Option<String>,
    pub results: Vec<ValidationResult>,
}

impl CheckReport {
    /// Whether every submission is valid
    pub fn passed(&self) -> bool {
        self.results.iter().all(ValidationResult::is_valid)
    }

    pub fn invalid_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_valid()).count()
    }

    pub fn total_errors(&self) -> usize {
        self.results.iter().map(|r| r.errors().len()).sum()
    }
}
