//! Submission state machine.
//!
//! `Unsubmitted` moves to `Submitted(snapshot)` on the first submit whose
//! validation reports no violations. Later valid submits replace the snapshot
//! wholesale. A rejected submit never transitions, so a previous snapshot
//! stays visible until the next accepted one.

use crate::fields::{FormFields, SubmittedSnapshot};
use crate::validation::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Unsubmitted,
    Submitted(SubmittedSnapshot),
}

impl SubmissionState {
    pub fn snapshot(&self) -> Option<&SubmittedSnapshot> {
        match self {
            Self::Unsubmitted => None,
            Self::Submitted(snapshot) => Some(snapshot),
        }
    }

    /// Apply a submit attempt given the fields and their current errors.
    ///
    /// Returns `true` when the submit was accepted.
    pub fn apply_submit(&mut self, fields: &FormFields, errors: &ValidationErrors) -> bool {
        if !errors.is_empty() {
            return false;
        }
        *self = Self::Submitted(SubmittedSnapshot::capture(fields));
        true
    }
}
