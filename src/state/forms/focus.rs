//! Focus order for the contact form controls

use super::field::FieldName;

/// The control that currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    FirstName,
    LastName,
    Email,
    Message,
    SubmitButton,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::FirstName,
        Focus::LastName,
        Focus::Email,
        Focus::Message,
        Focus::SubmitButton,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    /// Next control, wrapping back to the first field
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Previous control, wrapping to the submit button
    pub fn prev(self) -> Self {
        let index = self.index();
        if index == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[index - 1]
        }
    }

    /// The field under focus, `None` on the submit button
    pub fn field(self) -> Option<FieldName> {
        match self {
            Focus::FirstName => Some(FieldName::FirstName),
            Focus::LastName => Some(FieldName::LastName),
            Focus::Email => Some(FieldName::Email),
            Focus::Message => Some(FieldName::Message),
            Focus::SubmitButton => None,
        }
    }

    pub fn is_submit_button(self) -> bool {
        matches!(self, Focus::SubmitButton)
    }

    pub fn is_multiline(self) -> bool {
        self.field().is_some_and(|f| f.is_multiline())
    }
}

impl From<FieldName> for Focus {
    fn from(field: FieldName) -> Self {
        match field {
            FieldName::FirstName => Focus::FirstName,
            FieldName::LastName => Focus::LastName,
            FieldName::Email => Focus::Email,
            FieldName::Message => Focus::Message,
        }
    }
}
