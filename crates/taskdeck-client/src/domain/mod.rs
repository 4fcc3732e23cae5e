//! Domain Layer
//!
//! Client-side entities mirrored from the backend, plus the input drafts the
//! forms build up before a request is sent.

mod credentials;
mod pagination;
mod task;
mod user;

pub use credentials::Credentials;
pub use pagination::PageCursor;
pub use task::{Task, TaskDraft, TaskPage, TaskStatus};
pub use user::UserRef;

use thiserror::Error;

/// A required input field was left empty.
///
/// Raised before any request is issued and never shown to the user; the
/// form simply does not submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Reject empty or whitespace-only required input.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}
