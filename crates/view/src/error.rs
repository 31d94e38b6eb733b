use contact_form_core::CoreError;

/// Failures of view queries and of the events they drive.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Unable to find an element {0}")]
    NotFound(String),

    #[error("Found {count} elements {query}, expected exactly one")]
    Multiple { query: String, count: usize },

    #[error(transparent)]
    Core(#[from] CoreError),
}
