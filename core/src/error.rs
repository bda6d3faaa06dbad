//! Error types for the todo core.
//!
//! # Design
//! Only faults get a variant here. A lookup that finds nothing is not a
//! fault: `load_todo_list`, `load_todo` and `find_index_of` return `None`
//! and leave the "not found" policy to the caller.

use thiserror::Error;

/// Errors returned by constructors, mutators and reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A title was empty or too long, or a record failed validation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `remove_at` was called with a position outside `[0, len)`.
    #[error("index {index} out of range for ledger of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl CoreError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CoreError::InvalidArgument(msg.into())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
