//! Form field value objects

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Names of the contact form fields, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Message,
    ];

    /// Wire name used in error messages and parsing
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Message => "message",
        }
    }

    /// Input label; required fields carry a trailing `*`
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name*",
            FieldName::LastName => "Last Name*",
            FieldName::Email => "Email*",
            FieldName::Message => "Message",
        }
    }

    /// Label used on the submission summary lines
    pub fn summary_label(&self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name",
            FieldName::LastName => "Last Name",
            FieldName::Email => "Email",
            FieldName::Message => "Message",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldName::Message)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Current text of a single form field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub value: String,
}

impl FormField {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
