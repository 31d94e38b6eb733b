//! Contact form domain logic: field state, validation, submission.
//!
//! Everything here is synchronous and presentation-agnostic. A rendering
//! layer reads a [`ContactForm`] and feeds it [`FormEvent`]s.

pub mod config;
pub mod error;
pub mod fields;
pub mod form;
pub mod submission;
pub mod types;
pub mod validation;

pub use config::{FormConfig, ValidationMode};
pub use error::CoreError;
pub use fields::{FormFields, SubmittedSnapshot};
pub use form::{ContactForm, FormEvent, SubmitOutcome};
pub use types::Field;
