//! Typed errors for the form domain layer

use thiserror::Error;

/// Errors raised by the form layer itself.
///
/// Validation failures are not errors: they are reported through
/// [`ErrorSet`](crate::state::ErrorSet) values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A field name that is not part of the contact form
    #[error("unknown form field: {0}")]
    UnknownField(String),
}
