//! Field identifiers shared by the validation engine, the form instance and
//! the presentation layer.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the four fixed contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Parse a field from its wire name (`firstName`, `lastName`, ...).
    pub fn from_name(s: &str) -> Result<Self, CoreError> {
        match s {
            "firstName" => Ok(Self::FirstName),
            "lastName" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            _ => Err(CoreError::Validation(format!(
                "Invalid field '{s}'. Must be one of: firstName, lastName, email, message"
            ))),
        }
    }

    /// Stable wire name, also used in violation messages and input ids.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Human-readable label for the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Whether the field must be filled in before submitting.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
