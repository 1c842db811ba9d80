#![forbid(unsafe_code)]

//! formcheck: the validation rule engine behind a form builder
//!
//! The engine maps field types to applicable rule templates, merges chosen
//! templates into a declarative [`ValidationConfig`], and checks submitted
//! values against it, producing field-scoped [`ValidationError`]s. Every
//! entry point is a pure function over its inputs and safe to call from any
//! number of threads.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, FormcheckError, RuleError};

// Re-export the core API
pub use config::{
    FieldDefinition, FormDefinition, ValidationConfig, build_validation_config,
    build_validation_config_strict,
};
pub use engine::{
    CompiledValidation, FormValidator, Responses, ValidationError, ValidationResult,
    validate_field, validate_form,
};
pub use rules::{RuleTemplate, get_rules_for_field_type, lookup_description};
pub use types::{ActiveRule, Category, RuleParams};
