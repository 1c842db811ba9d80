#![forbid(unsafe_code)]

//! Built-in rule template catalog
//!
//! The catalog is fixed at compile time and is not user-editable. Its order
//! is the order the resolver returns templates in.

use crate::rules::patterns;
use crate::rules::template::{RuleKind, RuleTemplate};
use crate::types::Category;
use once_cell::sync::Lazy;
use std::collections::HashMap;

const fn fixed(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: Category,
    entry: &'static patterns::PatternEntry,
) -> RuleTemplate {
    RuleTemplate {
        id,
        name,
        description,
        category,
        kind: RuleKind::Pattern(entry),
    }
}

/// All templates, in declaration order
pub const TEMPLATES: &[RuleTemplate] = &[
    // Text
    RuleTemplate {
        id: "minLength",
        name: "Minimum Length",
        description: "Require at least N characters",
        category: Category::Text,
        kind: RuleKind::MinLength,
    },
    RuleTemplate {
        id: "maxLength",
        name: "Maximum Length",
        description: "Allow at most N characters",
        category: Category::Text,
        kind: RuleKind::MaxLength,
    },
    fixed(
        "lettersOnly",
        "Letters Only",
        "Only letters and spaces are allowed",
        Category::Text,
        &patterns::LETTERS_ONLY,
    ),
    fixed(
        "alphanumeric",
        "Alphanumeric",
        "Only letters and numbers are allowed",
        Category::Text,
        &patterns::ALPHANUMERIC,
    ),
    fixed(
        "noSpecialChars",
        "No Special Characters",
        "Letters, numbers and spaces only",
        Category::Text,
        &patterns::NO_SPECIAL_CHARS,
    ),
    // Number
    RuleTemplate {
        id: "min",
        name: "Minimum Value",
        description: "Value must be at least N",
        category: Category::Number,
        kind: RuleKind::Min,
    },
    RuleTemplate {
        id: "max",
        name: "Maximum Value",
        description: "Value must be at most N",
        category: Category::Number,
        kind: RuleKind::Max,
    },
    // Contact
    fixed(
        "email",
        "Email Address",
        "Must be a valid email address",
        Category::Contact,
        &patterns::EMAIL,
    ),
    fixed(
        "phone",
        "Phone Number",
        "Must be a valid phone number",
        Category::Contact,
        &patterns::PHONE,
    ),
    fixed(
        "indianPhone",
        "Indian Mobile Number",
        "Must be a 10-digit Indian mobile number",
        Category::Contact,
        &patterns::INDIAN_PHONE,
    ),
    // Format
    fixed(
        "url",
        "Website URL",
        "Must be an http or https URL",
        Category::Format,
        &patterns::URL,
    ),
    fixed(
        "postalCode",
        "US ZIP Code",
        "Must be a 5-digit ZIP or ZIP+4",
        Category::Format,
        &patterns::POSTAL_CODE,
    ),
    fixed(
        "pinCode",
        "PIN Code",
        "Must be a 6-digit Indian PIN code",
        Category::Format,
        &patterns::PIN_CODE,
    ),
    fixed(
        "date",
        "Date (YYYY-MM-DD)",
        "Must be an ISO calendar date",
        Category::Format,
        &patterns::DATE,
    ),
    fixed(
        "hexColor",
        "Hex Color",
        "Must be a #RGB or #RRGGBB color",
        Category::Format,
        &patterns::HEX_COLOR,
    ),
    fixed(
        "numbersOnly",
        "Numbers Only",
        "Only digits are allowed",
        Category::Format,
        &patterns::NUMBERS_ONLY,
    ),
    RuleTemplate {
        id: "customPattern",
        name: "Custom Pattern",
        description: "Match a regular expression you provide",
        category: Category::Format,
        kind: RuleKind::CustomPattern,
    },
    // Security
    fixed(
        "password",
        "Password",
        "Strong password: mixed case, a number and a special character",
        Category::Security,
        &patterns::PASSWORD,
    ),
    fixed(
        "pin",
        "Numeric PIN",
        "A 4 to 6 digit PIN",
        Category::Security,
        &patterns::PIN,
    ),
    // College
    fixed(
        "collegeEmail",
        "College Email",
        "Must be an academic email address",
        Category::College,
        &patterns::COLLEGE_EMAIL,
    ),
    fixed(
        "cgpa",
        "CGPA",
        "Grade point average on a 10-point scale",
        Category::College,
        &patterns::CGPA,
    ),
    fixed(
        "percentage",
        "Percentage",
        "A percentage between 0 and 100",
        Category::College,
        &patterns::PERCENTAGE,
    ),
    fixed(
        "rollNumber",
        "Roll Number",
        "Institution roll number",
        Category::College,
        &patterns::ROLL_NUMBER,
    ),
    fixed(
        "usn",
        "University Seat Number",
        "VTU-style university seat number",
        Category::College,
        &patterns::USN,
    ),
];

static BY_ID: Lazy<HashMap<&'static str, &'static RuleTemplate>> =
    Lazy::new(|| TEMPLATES.iter().map(|t| (t.id, t)).collect());

/// Look up a template by id
pub fn find_template(id: &str) -> Option<&'static RuleTemplate> {
    BY_ID.get(id).copied()
}

/// Iterate over every template in declaration order
pub fn templates() -> impl Iterator<Item = &'static RuleTemplate> {
    TEMPLATES.iter()
}
