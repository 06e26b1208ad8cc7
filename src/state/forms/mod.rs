//! Form domain layer
//!
//! This module provides the contact form validation engine and the values it
//! works on. Nothing here performs I/O; any presentation layer can drive it.

mod engine;
mod field;
mod focus;
mod form_state;
pub mod rules;

pub use engine::{FormObserver, FormValidationEngine};
pub use field::{FieldName, FormField};
pub use focus::Focus;
pub use form_state::{ErrorSet, FormState, SubmissionRecord};
