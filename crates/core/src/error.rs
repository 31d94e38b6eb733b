/// Errors raised by the few fallible operations on a form instance.
///
/// Rule violations are not errors in this sense; they are ordinary data
/// (see [`crate::validation::rules::Violation`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}
