//! A single contact form instance.
//!
//! Owns the field state, the derived validation errors and the submission
//! state. Every mutation goes through an explicit setter which recomputes
//! the derived errors before returning, so readers always observe a
//! consistent `{fields, errors, snapshot}` triple.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::config::{FormConfig, ValidationMode};
use crate::error::CoreError;
use crate::fields::{FormFields, SubmittedSnapshot};
use crate::submission::SubmissionState;
use crate::types::Field;
use crate::validation::{evaluate, ValidationErrors, Violation};

/// Input event delivered by the rendering environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    Change { field: Field, value: String },
    Submit,
    Reset,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome<'a> {
    Accepted(&'a SubmittedSnapshot),
    Rejected(&'a ValidationErrors),
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    config: FormConfig,
    fields: FormFields,
    errors: ValidationErrors,
    touched: BTreeSet<Field>,
    submit_attempted: bool,
    submission: SubmissionState,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::from_parts(FormConfig::default())
    }
}

impl ContactForm {
    /// A fresh form with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh form with a custom configuration.
    pub fn with_config(config: FormConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self::from_parts(config))
    }

    fn from_parts(config: FormConfig) -> Self {
        let fields = FormFields::default();
        let errors = evaluate(&fields);
        Self {
            config,
            fields,
            errors,
            touched: BTreeSet::new(),
            submit_attempted: false,
            submission: SubmissionState::default(),
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Every rule currently violated by the fields, whether shown or not.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The violations the user should currently see.
    pub fn visible_errors(&self) -> ValidationErrors {
        if self.config.validation_mode == ValidationMode::OnSubmit && !self.submit_attempted {
            return ValidationErrors::default();
        }
        self.errors.filtered(|field| self.touched.contains(&field))
    }

    pub fn snapshot(&self) -> Option<&SubmittedSnapshot> {
        self.submission.snapshot()
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Set one field's value and recompute the derived errors.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        self.touched.insert(field);
        self.recompute();
        tracing::debug!(
            field = %field,
            len = self.fields.get(field).chars().count(),
            violations = self.errors.len(),
            "Field changed"
        );
    }

    /// Set a field identified by its wire name (`firstName`, `email`, ...).
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), CoreError> {
        let field = Field::from_name(name)?;
        self.set_field(field, value);
        Ok(())
    }

    /// Attempt a submission.
    ///
    /// All fields are marked touched so every violation becomes visible.
    /// With no violations the current fields replace any earlier snapshot;
    /// otherwise the submission state is left untouched.
    pub fn submit(&mut self) -> SubmitOutcome<'_> {
        self.submit_attempted = true;
        self.touched.extend(Field::ALL);
        self.recompute();

        let accepted = self.submission.apply_submit(&self.fields, &self.errors);
        match self.submission.snapshot() {
            Some(snapshot) if accepted => {
                tracing::info!(
                    has_message = snapshot.message().is_some(),
                    "Contact form submitted"
                );
                SubmitOutcome::Accepted(snapshot)
            }
            _ => {
                let rules: Vec<&str> = self.errors.iter().map(Violation::rule).collect();
                tracing::warn!(
                    violations = self.errors.len(),
                    rules = ?rules,
                    "Contact form submission rejected"
                );
                SubmitOutcome::Rejected(&self.errors)
            }
        }
    }

    /// Return to the freshly constructed state, keeping the configuration.
    pub fn reset(&mut self) {
        *self = Self::from_parts(self.config.clone());
        tracing::debug!("Contact form reset");
    }

    /// Dispatch an input event.
    pub fn handle(&mut self, event: FormEvent) {
        match event {
            FormEvent::Change { field, value } => self.set_field(field, value),
            FormEvent::Submit => {
                self.submit();
            }
            FormEvent::Reset => self.reset(),
        }
    }

    fn recompute(&mut self) {
        self.errors = evaluate(&self.fields);
    }
}
