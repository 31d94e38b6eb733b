use serde::Deserialize;

use crate::error::CoreError;

/// When rule violations become visible to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// A field's violation shows as soon as the field is edited.
    #[default]
    OnChange,
    /// Nothing shows until the first submit attempt; afterwards violations
    /// track edits live.
    OnSubmit,
}

/// Per-instance form configuration.
///
/// All fields have defaults matching the stock contact form; a host may
/// deserialize overrides from its own settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Header text identifying the form (default: `Contact Form`).
    pub header: String,
    /// Error visibility policy (default: [`ValidationMode::OnChange`]).
    pub validation_mode: ValidationMode,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            header: "Contact Form".to_string(),
            validation_mode: ValidationMode::default(),
        }
    }
}

impl FormConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.header.trim().is_empty() {
            return Err(CoreError::Validation(
                "Form header must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
