//! Field and form validation against compiled configs

pub mod field;
pub mod form;
pub mod matcher;
pub mod value;

pub use field::{CompiledValidation, validate_field};
pub use form::{FormValidator, Responses, ValidationResult, validate_form};
pub use matcher::PatternMatcher;

use serde::{Deserialize, Serialize};

/// A user-facing validation failure for one field
///
/// Created fresh on every validation pass and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Field id
    pub field: String,
    pub field_label: String,
    pub message: String,
}
