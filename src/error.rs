//! Error types for formcheck
//!
//! These are operator-facing errors: loading a form definition, resolving
//! rule ids in strict mode, and so on. The end-user-facing record produced by
//! validation is [`crate::engine::ValidationError`], which is plain data and
//! never travels through `Result`.

use std::path::PathBuf;

/// Form-definition loading and validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error while reading a definition file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or shape error
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// JSON syntax or shape error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Structurally valid but semantically wrong definition
    #[error("Invalid form definition: {0}")]
    Validation(String),

    /// Invalid value for a single field's configuration
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Rule id has no template in the catalog
    #[error("Rule not found: {0}")]
    NotFound(String),

    /// Pattern source no regex engine accepts
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Top-level error type for formcheck
#[derive(Debug, thiserror::Error)]
pub enum FormcheckError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Malformed responses file
    #[error("Parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
