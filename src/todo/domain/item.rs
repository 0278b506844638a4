//! To-do item entity and its write payload.

use super::{DueDate, StatusTransitionError, TaskText, TodoId, TodoStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated fields written by create and update operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPayload {
    task: TaskText,
    status: TodoStatus,
    due: Option<DueDate>,
}

impl TodoPayload {
    /// Creates a payload with the given task text and status.
    #[must_use]
    pub const fn new(task: TaskText, status: TodoStatus) -> Self {
        Self {
            task,
            status,
            due: None,
        }
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due(mut self, due: DueDate) -> Self {
        self.due = Some(due);
        self
    }

    /// Returns the task text.
    #[must_use]
    pub const fn task(&self) -> &TaskText {
        &self.task
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TodoStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due(&self) -> Option<DueDate> {
        self.due
    }
}

/// A tracked to-do item.
///
/// Callers always receive owned copies; mutation happens inside the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    id: TodoId,
    task: TaskText,
    status: TodoStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due: Option<DueDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted identifier.
    pub id: TodoId,
    /// Persisted task text.
    pub task: TaskText,
    /// Persisted status.
    pub status: TodoStatus,
    /// Persisted due date, if any.
    pub due: Option<DueDate>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a new item from a payload under a store-assigned identifier.
    #[must_use]
    pub fn new(id: TodoId, payload: TodoPayload, at: DateTime<Utc>) -> Self {
        let TodoPayload { task, status, due } = payload;
        Self {
            id,
            task,
            status,
            due,
            created_at: at,
            updated_at: at,
        }
    }

    /// Reconstructs an item from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            task: data.task,
            status: data.status,
            due: data.due,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub const fn task(&self) -> &TaskText {
        &self.task
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TodoStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due(&self) -> Option<DueDate> {
        self.due
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces task text, status and due date wholesale.
    pub fn replace_content(&mut self, payload: TodoPayload, at: DateTime<Utc>) {
        let TodoPayload { task, status, due } = payload;
        self.task = task;
        self.status = status;
        self.due = due;
        self.touch(at);
    }

    /// Moves the status one step forward.
    ///
    /// # Errors
    ///
    /// Returns [`StatusTransitionError`] when the current status is
    /// terminal. The item is left unchanged.
    pub fn advance_status(
        &mut self,
        at: DateTime<Utc>,
    ) -> Result<TodoStatus, StatusTransitionError> {
        let next = self.status.next().ok_or(StatusTransitionError {
            id: self.id,
            from: self.status,
        })?;
        self.status = next;
        self.touch(at);
        Ok(next)
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}
