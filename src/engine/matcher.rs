#![forbid(unsafe_code)]

//! Compilation of validation patterns
//!
//! Patterns are authored for the form editor's regex dialect. They compile
//! with `regex` when possible; lookaround and backreferences, which `regex`
//! does not support, fall back to the backtracking `fancy_regex` engine.
//! The `\d` and `\w` shorthands are narrowed to ASCII before compiling, so
//! `^\d{3}$` rejects non-ASCII digits. `\b` and `\s` keep their Unicode
//! meaning.

use crate::error::RuleError;
use std::borrow::Cow;

const ASCII_DIGIT: &str = "0-9";
const ASCII_WORD: &str = "0-9A-Za-z_";

/// A compiled validation pattern
#[derive(Debug, Clone)]
pub enum PatternMatcher {
    /// Compiled by `regex`; matching runs in linear time
    Linear(regex::Regex),
    /// Needed lookaround or backreferences; compiled by `fancy_regex`
    Backtracking(fancy_regex::Regex),
}

impl PatternMatcher {
    /// Compile a pattern source
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidPattern` when neither engine accepts it.
    pub fn new(source: &str) -> Result<Self, RuleError> {
        let translated = ascii_shorthands(source);

        match regex::Regex::new(&translated) {
            Ok(regex) => Ok(PatternMatcher::Linear(regex)),
            Err(linear_err) => fancy_regex::Regex::new(&translated)
                .map(PatternMatcher::Backtracking)
                .map_err(|_| RuleError::InvalidPattern {
                    pattern: source.to_string(),
                    message: linear_err.to_string(),
                }),
        }
    }

    /// Whether `text` contains a match
    ///
    /// A backtracking match that exceeds its step limit counts as a match,
    /// so a pathological pattern never blocks a submission.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            PatternMatcher::Linear(regex) => regex.is_match(text),
            PatternMatcher::Backtracking(regex) => match regex.is_match(text) {
                Ok(matched) => matched,
                Err(e) => {
                    tracing::warn!(error = %e, "pattern match aborted, skipping pattern check");
                    true
                }
            },
        }
    }

    pub fn is_backtracking(&self) -> bool {
        matches!(self, PatternMatcher::Backtracking(_))
    }
}

/// Rewrite `\d`, `\D`, `\w`, and `\W` as ASCII classes
fn ascii_shorthands(source: &str) -> Cow<'_, str> {
    if !source.contains('\\') {
        return Cow::Borrowed(source);
    }

    let mut out = String::with_capacity(source.len() + 16);
    let mut in_class = false;
    let mut chars = source.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('d') if in_class => out.push_str(ASCII_DIGIT),
                Some('w') if in_class => out.push_str(ASCII_WORD),
                Some('d') => out.push_str(&format!("[{}]", ASCII_DIGIT)),
                Some('w') => out.push_str(&format!("[{}]", ASCII_WORD)),
                Some('D') if !in_class => out.push_str(&format!("[^{}]", ASCII_DIGIT)),
                Some('W') if !in_class => out.push_str(&format!("[^{}]", ASCII_WORD)),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            '[' if !in_class => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    Cow::Owned(out)
}
