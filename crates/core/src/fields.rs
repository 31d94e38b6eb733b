//! Live field state of one contact form.

use serde::{Deserialize, Serialize};

use crate::types::Field;

/// Current values of the four form fields, stored exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl FormFields {
    /// Read a field by identifier.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replace a field's value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// Immutable copy of [`FormFields`] taken at a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmittedSnapshot(FormFields);

impl SubmittedSnapshot {
    pub(crate) fn capture(fields: &FormFields) -> Self {
        Self(fields.clone())
    }

    pub fn fields(&self) -> &FormFields {
        &self.0
    }

    pub fn get(&self, field: Field) -> &str {
        self.0.get(field)
    }

    /// The optional message, or `None` when it was submitted empty.
    pub fn message(&self) -> Option<&str> {
        Some(self.0.message.as_str()).filter(|m| !m.is_empty())
    }
}
