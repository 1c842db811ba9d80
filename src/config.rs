//! Validation configs, the config builder, and form definition files

pub mod builder;
pub mod form;
pub mod validation;

pub use builder::{build_validation_config, build_validation_config_strict};
pub use form::{FieldDefinition, FieldIssues, FormDefinition, FormMeta};
pub use validation::{ConfigIssue, CustomRule, CustomRuleKind, ValidationConfig};
