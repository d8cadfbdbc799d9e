//! Shared error types for the services crate.

use thiserror::Error;

use coach_core::model::{ParseSectionError, QuestionError};

/// Errors emitted while assembling coach services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoachServiceError {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Section(#[from] ParseSectionError),
}
