//! Error types for to-do domain validation and parsing.

use super::{TodoId, TodoStatus};
use thiserror::Error;

/// Errors returned while validating untrusted item fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The task text is absent or blank after trimming and sanitisation.
    #[error("missing or empty task")]
    EmptyTask,

    /// The status value is not one of the four known statuses.
    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    /// The due date is absent or blank in a schema that requires it.
    #[error("missing or empty due date")]
    MissingDueDate,

    /// The due date does not parse as a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),
}

/// Error returned when a status has no forward transition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("status of todo {id} cannot move up from '{from}'")]
pub struct StatusTransitionError {
    /// Item whose status could not advance.
    pub id: TodoId,
    /// Status the item was in when the advance was attempted.
    pub from: TodoStatus,
}

/// Error returned while parsing statuses from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown todo status: {0}")]
pub struct ParseTodoStatusError(pub String);

/// Error returned while parsing an item identifier from a string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid todo identifier: {0}")]
pub struct ParseTodoIdError(pub String);
