#![forbid(unsafe_code)]

//! Pattern registry, rule template catalog, and field-type resolution

pub mod builtin;
pub mod patterns;
pub mod resolver;
pub mod template;

// Re-export core types
pub use builtin::{TEMPLATES, find_template, templates};
pub use patterns::{PATTERNS, PatternEntry, lookup_description};
pub use resolver::{FieldTypeClass, get_rules_for_field_type};
pub use template::{RuleKind, RuleTemplate};
