#![forbid(unsafe_code)]

//! Predefined regex patterns with human-readable descriptions
//!
//! The registry is a fixed table compiled into the binary. Templates in
//! [`crate::rules::builtin`] embed these constants directly, so a template's
//! pattern and the description shown to users can never drift apart.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Description returned when a pattern is not in the registry
pub const CUSTOM_PATTERN_DESCRIPTION: &str = "Custom pattern";

/// A named regex pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternEntry {
    /// Stable identifier, e.g. `email` or `cgpa`
    pub key: &'static str,

    /// Regex source, compiled with default flags
    pub pattern: &'static str,

    /// Shown to users when a value fails the pattern
    pub description: &'static str,
}

pub const EMAIL: PatternEntry = PatternEntry {
    key: "email",
    pattern: r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
    description: "A valid email address",
};

pub const PHONE: PatternEntry = PatternEntry {
    key: "phone",
    pattern: r"^\+?[0-9]{10,15}$",
    description: "A valid phone number (10-15 digits, optional leading +)",
};

pub const INDIAN_PHONE: PatternEntry = PatternEntry {
    key: "indianPhone",
    pattern: r"^(\+91[\-\s]?)?[6-9][0-9]{9}$",
    description: "A valid Indian mobile number",
};

pub const URL: PatternEntry = PatternEntry {
    key: "url",
    pattern: r"^https?://[^\s/$.?#][^\s]*$",
    description: "A valid URL starting with http:// or https://",
};

pub const POSTAL_CODE: PatternEntry = PatternEntry {
    key: "postalCode",
    pattern: r"^[0-9]{5}(-[0-9]{4})?$",
    description: "A valid US ZIP code",
};

pub const PIN_CODE: PatternEntry = PatternEntry {
    key: "pinCode",
    pattern: r"^[1-9][0-9]{5}$",
    description: "A valid 6-digit PIN code",
};

pub const DATE: PatternEntry = PatternEntry {
    key: "date",
    pattern: r"^[0-9]{4}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$",
    description: "A date in YYYY-MM-DD format",
};

pub const HEX_COLOR: PatternEntry = PatternEntry {
    key: "hexColor",
    pattern: r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$",
    description: "A hex color code like #1a2b3c",
};

pub const LETTERS_ONLY: PatternEntry = PatternEntry {
    key: "lettersOnly",
    pattern: r"^[a-zA-Z\s]+$",
    description: "Letters and spaces only",
};

pub const ALPHANUMERIC: PatternEntry = PatternEntry {
    key: "alphanumeric",
    pattern: r"^[a-zA-Z0-9]+$",
    description: "Letters and numbers only",
};

pub const NO_SPECIAL_CHARS: PatternEntry = PatternEntry {
    key: "noSpecialChars",
    pattern: r"^[a-zA-Z0-9\s]+$",
    description: "No special characters",
};

pub const NUMBERS_ONLY: PatternEntry = PatternEntry {
    key: "numbersOnly",
    pattern: r"^[0-9]+$",
    description: "Numbers only",
};

pub const PASSWORD: PatternEntry = PatternEntry {
    key: "password",
    pattern: r"^(?=.*[a-z])(?=.*[A-Z])(?=.*\d)(?=.*[@$!%*?&]).{8,}$",
    description: "At least 8 characters with an uppercase letter, a lowercase letter, a number and one of @$!%*?&",
};

pub const PIN: PatternEntry = PatternEntry {
    key: "pin",
    pattern: r"^[0-9]{4,6}$",
    description: "A 4 to 6 digit PIN",
};

pub const COLLEGE_EMAIL: PatternEntry = PatternEntry {
    key: "collegeEmail",
    pattern: r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.(edu|ac\.in|edu\.in)$",
    description: "A college email address ending in .edu, .ac.in or .edu.in",
};

pub const CGPA: PatternEntry = PatternEntry {
    key: "cgpa",
    pattern: r"^(10(\.0{1,2})?|[0-9](\.[0-9]{1,2})?)$",
    description: "A CGPA between 0 and 10 with up to 2 decimals",
};

pub const PERCENTAGE: PatternEntry = PatternEntry {
    key: "percentage",
    pattern: r"^(100(\.0{1,2})?|[0-9]{1,2}(\.[0-9]{1,2})?)$",
    description: "A percentage between 0 and 100 with up to 2 decimals",
};

pub const ROLL_NUMBER: PatternEntry = PatternEntry {
    key: "rollNumber",
    pattern: r"^[A-Z0-9]{6,12}$",
    description: "A roll number of 6-12 uppercase letters or digits",
};

pub const USN: PatternEntry = PatternEntry {
    key: "usn",
    pattern: r"^[1-4][A-Z]{2}[0-9]{2}[A-Z]{2}[0-9]{3}$",
    description: "A university seat number like 1AB21CS001",
};

/// All predefined patterns, in registry order
pub const PATTERNS: &[PatternEntry] = &[
    EMAIL,
    PHONE,
    INDIAN_PHONE,
    URL,
    POSTAL_CODE,
    PIN_CODE,
    DATE,
    HEX_COLOR,
    LETTERS_ONLY,
    ALPHANUMERIC,
    NO_SPECIAL_CHARS,
    NUMBERS_ONLY,
    PASSWORD,
    PIN,
    COLLEGE_EMAIL,
    CGPA,
    PERCENTAGE,
    ROLL_NUMBER,
    USN,
];

static BY_KEY: Lazy<HashMap<&'static str, &'static PatternEntry>> =
    Lazy::new(|| PATTERNS.iter().map(|entry| (entry.key, entry)).collect());

/// Look up a registry entry by its key
pub fn pattern(key: &str) -> Option<&'static PatternEntry> {
    BY_KEY.get(key).copied()
}

/// Describe a regex source for display
///
/// Returns the description of the first entry whose pattern source is
/// exactly `pattern`, or [`CUSTOM_PATTERN_DESCRIPTION`] otherwise. Two
/// equivalent regexes spelled differently do not match.
pub fn lookup_description(pattern: &str) -> &'static str {
    known_description(pattern).unwrap_or(CUSTOM_PATTERN_DESCRIPTION)
}

/// Like [`lookup_description`] but `None` for unknown patterns
pub fn known_description(pattern: &str) -> Option<&'static str> {
    PATTERNS
        .iter()
        .find(|entry| entry.pattern == pattern)
        .map(|entry| entry.description)
}
