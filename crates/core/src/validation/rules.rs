//! Rule violation and result types.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::types::Field;

/// Minimum trimmed length of the first name.
pub const FIRST_NAME_MIN_LEN: usize = 5;

/// Shape a formatted field is expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    EmailAddress,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailAddress => f.write_str("email address"),
        }
    }
}

/// A single field-level rule violation.
///
/// The `Display` output is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Violation {
    #[error("{0} is a required field")]
    RequiredFieldMissing(Field),

    #[error("{field} must have at least {min} characters")]
    MinLengthViolation { field: Field, min: usize },

    #[error("{field} must be a valid {shape}")]
    InvalidFormat { field: Field, shape: Shape },
}

impl Violation {
    pub fn field(&self) -> Field {
        match self {
            Self::RequiredFieldMissing(field) => *field,
            Self::MinLengthViolation { field, .. } | Self::InvalidFormat { field, .. } => *field,
        }
    }

    /// Stable rule identifier.
    pub fn rule(&self) -> &'static str {
        match self {
            Self::RequiredFieldMissing(_) => "required",
            Self::MinLengthViolation { .. } => "min_length",
            Self::InvalidFormat { .. } => "format",
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Violation", 3)?;
        s.serialize_field("field", &self.field())?;
        s.serialize_field("rule", self.rule())?;
        s.serialize_field("message", &self.message())?;
        s.end()
    }
}

/// The set of rules currently violated by a [`FormFields`] value, in field
/// display order. Holds at most one violation per field.
///
/// [`FormFields`]: crate::fields::FormFields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<Violation>);

impl ValidationErrors {
    pub(crate) fn from_violations(mut violations: Vec<Violation>) -> Self {
        violations.sort_by_key(Violation::field);
        violations.dedup_by_key(|v| v.field());
        Self(violations)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// The violation reported for `field`, if any.
    pub fn for_field(&self, field: Field) -> Option<&Violation> {
        self.0.iter().find(|v| v.field() == field)
    }

    /// Keep only the violations whose field satisfies `keep`.
    pub fn filtered(&self, mut keep: impl FnMut(Field) -> bool) -> Self {
        Self(self.0.iter().filter(|v| keep(v.field())).cloned().collect())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
