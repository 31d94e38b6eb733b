//! Field validation engine.
//!
//! Provides the violation types and a pure evaluator mapping
//! [`crate::fields::FormFields`] to the set of currently violated rules.

pub mod evaluator;
pub mod rules;

pub use evaluator::{evaluate, evaluate_field};
pub use rules::{Shape, ValidationErrors, Violation, FIRST_NAME_MIN_LEN};
