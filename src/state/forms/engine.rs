//! Validation engine owning the contact form state

use super::field::FieldName;
use super::form_state::{ErrorSet, FormState, SubmissionRecord};
use super::rules;
use crate::error::FormError;
use std::collections::BTreeSet;
use std::fmt;

/// Change notifications from [`FormValidationEngine`]
#[cfg_attr(test, mockall::automock)]
pub trait FormObserver {
    /// Called after every field update and submit attempt
    fn on_change(&mut self, errors: &ErrorSet);

    /// Called after a successful submit, once the form has been reset
    fn on_submit(&mut self, record: &SubmissionRecord);
}

/// Owns the form values and derives their errors.
///
/// Errors only cover fields that have been touched, either by an update or by
/// a submit attempt, so a fresh form shows no errors.
#[derive(Default)]
pub struct FormValidationEngine {
    state: FormState,
    errors: ErrorSet,
    touched: BTreeSet<FieldName>,
    last_submission: Option<SubmissionRecord>,
    observers: Vec<Box<dyn FormObserver>>,
}

impl fmt::Debug for FormValidationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValidationEngine")
            .field("state", &self.state)
            .field("errors", &self.errors)
            .field("touched", &self.touched)
            .field("last_submission", &self.last_submission)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl FormValidationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for change notifications
    pub fn subscribe(&mut self, observer: Box<dyn FormObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn last_submission(&self) -> Option<&SubmissionRecord> {
        self.last_submission.as_ref()
    }

    /// Replace a field's value and revalidate
    pub fn update_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.state.get_mut(name).set_text(value.into());
        if rules::is_required(name) {
            self.touched.insert(name);
        }
        self.revalidate();
        self.notify_change();
    }

    /// [`update_field`](Self::update_field) addressed by wire name
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field = name.parse::<FieldName>()?;
        self.update_field(field, value);
        Ok(())
    }

    /// Validate every field and either reject or take a snapshot.
    ///
    /// A rejected submit leaves the values untouched. An accepted one resets the
    /// form to empty and replaces the previous submission.
    pub fn submit(&mut self) -> Result<SubmissionRecord, ErrorSet> {
        self.touched.extend(FieldName::ALL.into_iter().filter(|f| rules::is_required(*f)));
        self.revalidate();

        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "submit rejected");
            self.notify_change();
            return Err(self.errors.clone());
        }

        let record = SubmissionRecord::capture(&self.state);
        self.state.clear();
        self.touched.clear();
        self.revalidate();
        self.last_submission = Some(record.clone());
        tracing::info!(submission_id = %record.submission_id, "submit accepted");

        self.notify_change();
        for observer in &mut self.observers {
            observer.on_submit(&record);
        }
        Ok(record)
    }

    fn revalidate(&mut self) {
        let touched = &self.touched;
        self.errors = rules::validate(&self.state, |field| touched.contains(&field));
    }

    fn notify_change(&mut self) {
        for observer in &mut self.observers {
            observer.on_change(&self.errors);
        }
    }
}
