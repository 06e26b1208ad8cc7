//! Field rule table
//!
//! Each required field has one rule: a pure predicate over the raw value and
//! the exact message shown when the predicate fails. Adding a required field
//! means adding a row to [`FIELD_RULES`].

use super::field::FieldName;
use super::form_state::{ErrorSet, FormState};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum number of characters for the name fields, measured after trimming
pub const MIN_NAME_LENGTH: usize = 5;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("valid regex literal")
});

/// A validation rule bound to one field
#[derive(Debug)]
pub struct FieldRule {
    pub field: FieldName,
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl FieldRule {
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        (self.check)(value)
    }
}

pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: FieldName::FirstName,
        message: "Error: firstName must have a value of at least 5 characters.",
        check: has_min_name_length,
    },
    FieldRule {
        field: FieldName::LastName,
        message: "Error: lastName is a required field.",
        check: has_min_name_length,
    },
    FieldRule {
        field: FieldName::Email,
        message: "Error: email must be a valid email address.",
        check: is_valid_email,
    },
];

/// Look up the rule for a field; `None` for fields without constraints
pub fn rule_for(field: FieldName) -> Option<&'static FieldRule> {
    FIELD_RULES.iter().find(|rule| rule.field == field)
}

/// Whether a field takes part in validation at all
pub fn is_required(field: FieldName) -> bool {
    rule_for(field).is_some()
}

/// At least [`MIN_NAME_LENGTH`] characters once surrounding whitespace is removed
pub fn has_min_name_length(value: &str) -> bool {
    value.trim().chars().count() >= MIN_NAME_LENGTH
}

/// `local@domain.tld` shaped, no surrounding whitespace
pub fn is_valid_email(value: &str) -> bool {
    !value.is_empty() && EMAIL_PATTERN.is_match(value)
}

/// Evaluate every rule whose field passes `include`.
///
/// Rules never short-circuit each other.
pub fn validate(state: &FormState, include: impl Fn(FieldName) -> bool) -> ErrorSet {
    let mut errors = ErrorSet::default();
    for rule in FIELD_RULES.iter().filter(|rule| include(rule.field)) {
        if !rule.is_satisfied_by(state.get(rule.field).as_text()) {
            errors.insert(rule.field, rule.message);
        }
    }
    errors
}
