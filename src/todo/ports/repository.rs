//! Repository port for to-do item storage and the status state machine.

use crate::todo::domain::{StatusTransitionError, TodoId, TodoItem, TodoPayload};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for to-do repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// To-do storage contract.
///
/// Every backend must give each operation all-or-nothing semantics: no
/// caller may observe a partially applied mutation.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Stores a new item under a freshly assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the backend is
    /// unavailable.
    async fn add(&self, payload: &TodoPayload, at: DateTime<Utc>)
    -> TodoRepositoryResult<TodoItem>;

    /// Finds an item by identifier.
    ///
    /// Returns `None` when the item does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>>;

    /// Returns every item in ascending identifier order.
    async fn list_all(&self) -> TodoRepositoryResult<Vec<TodoItem>>;

    /// Replaces task text, status and due date of an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the item does not
    /// exist.
    async fn change_task(
        &self,
        id: TodoId,
        payload: &TodoPayload,
        at: DateTime<Utc>,
    ) -> TodoRepositoryResult<TodoItem>;

    /// Atomically advances the item status one step.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the item does not exist
    /// or [`TodoRepositoryError::Transition`] when its status is terminal.
    async fn advance_status(&self, id: TodoId, at: DateTime<Utc>)
    -> TodoRepositoryResult<TodoItem>;

    /// Deletes an item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the item does not
    /// exist.
    async fn remove(&self, id: TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by to-do repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The item was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// The item status has no forward transition.
    #[error(transparent)]
    Transition(#[from] StatusTransitionError),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
