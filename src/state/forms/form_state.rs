//! Form values, derived errors and submission snapshots

use super::field::{FieldName, FormField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Current values of all contact form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub message: FormField,
}

impl FormState {
    pub fn get(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        }
    }

    /// Reset every field to empty
    pub fn clear(&mut self) {
        for name in FieldName::ALL {
            self.get_mut(name).clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        FieldName::ALL.iter().all(|name| self.get(*name).is_empty())
    }
}

/// Active validation errors keyed by field, iterated in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorSet(BTreeMap<FieldName, String>);

impl ErrorSet {
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Snapshot of the form taken at a successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub submission_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `None` when the message was left empty
    pub message: Option<String>,
}

impl SubmissionRecord {
    /// Capture the current form values
    pub fn capture(state: &FormState) -> Self {
        let message = state.message.as_text();
        Self {
            submission_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            first_name: state.first_name.as_text().to_string(),
            last_name: state.last_name.as_text().to_string(),
            email: state.email.as_text().to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
        }
    }

    /// Labeled summary lines; the message line is left out when there was none
    pub fn summary_lines(&self) -> Vec<(FieldName, &str)> {
        let mut lines = vec![
            (FieldName::FirstName, self.first_name.as_str()),
            (FieldName::LastName, self.last_name.as_str()),
            (FieldName::Email, self.email.as_str()),
        ];
        if let Some(message) = &self.message {
            lines.push((FieldName::Message, message.as_str()));
        }
        lines
    }

    /// Summary as plain text, one `Label: value` line per field
    pub fn summary_text(&self) -> String {
        self.summary_lines()
            .into_iter()
            .map(|(field, value)| format!("{}: {}", field.summary_label(), value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state(message: &str) -> FormState {
        FormState {
            first_name: FormField::with_value("12345"),
            last_name: FormField::with_value("myLastName"),
            email: FormField::with_value("email@mail.com"),
            message: FormField::with_value(message),
        }
    }

    mod form_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_empty() {
            let state = FormState::default();
            assert!(state.is_empty());
            for name in FieldName::ALL {
                assert_eq!(state.get(name).as_text(), "");
            }
        }

        #[test]
        fn test_get_mut_targets_named_field() {
            let mut state = FormState::default();
            state.get_mut(FieldName::Email).set_text("a@b.io".to_string());
            assert_eq!(state.email.as_text(), "a@b.io");
            assert!(state.first_name.is_empty());
        }

        #[test]
        fn test_clear_resets_all_fields() {
            let mut state = filled_state("hi");
            state.clear();
            assert!(state.is_empty());
        }
    }

    mod error_set {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_iterates_in_field_order() {
            let mut errors = ErrorSet::default();
            errors.insert(FieldName::Email, "e");
            errors.insert(FieldName::FirstName, "f");
            errors.insert(FieldName::LastName, "l");
            let order: Vec<FieldName> = errors.iter().map(|(f, _)| f).collect();
            assert_eq!(
                order,
                vec![FieldName::FirstName, FieldName::LastName, FieldName::Email]
            );
        }

        #[test]
        fn test_insert_replaces_existing_message() {
            let mut errors = ErrorSet::default();
            errors.insert(FieldName::Email, "old");
            errors.insert(FieldName::Email, "new");
            assert_eq!(errors.len(), 1);
            assert_eq!(errors.get(FieldName::Email), Some("new"));
        }

        #[test]
        fn test_serializes_as_map() {
            let mut errors = ErrorSet::default();
            errors.insert(FieldName::LastName, "Error: lastName is a required field.");
            let json = serde_json::to_string(&errors).unwrap();
            assert_eq!(json, r#"{"lastName":"Error: lastName is a required field."}"#);
        }
    }

    mod submission_record {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_capture_without_message() {
            let record = SubmissionRecord::capture(&filled_state(""));
            assert_eq!(record.first_name, "12345");
            assert_eq!(record.last_name, "myLastName");
            assert_eq!(record.email, "email@mail.com");
            assert!(record.message.is_none());
        }

        #[test]
        fn test_summary_omits_message_line_when_empty() {
            let record = SubmissionRecord::capture(&filled_state(""));
            assert_eq!(
                record.summary_text(),
                "First Name: 12345\nLast Name: myLastName\nEmail: email@mail.com"
            );
        }

        #[test]
        fn test_summary_includes_message() {
            let record = SubmissionRecord::capture(&filled_state("this is my message to you..."));
            assert_eq!(record.message.as_deref(), Some("this is my message to you..."));
            let lines = record.summary_lines();
            assert_eq!(lines.len(), 4);
            assert_eq!(
                lines[3],
                (FieldName::Message, "this is my message to you...")
            );
            assert!(record
                .summary_text()
                .ends_with("Message: this is my message to you..."));
        }

        #[test]
        fn test_identical_captures_get_distinct_ids() {
            let state = filled_state("");
            let a = SubmissionRecord::capture(&state);
            let b = SubmissionRecord::capture(&state);
            assert_ne!(a.submission_id, b.submission_id);
        }
    }
}
