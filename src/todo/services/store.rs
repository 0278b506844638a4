//! Service layer exposing the task store operations.

use crate::todo::{
    domain::{
        DueDate, ItemSchema, ListOrder, ListQuery, TaskText, TodoId, TodoItem, TodoPage,
        TodoPayload, TodoStatus, ValidationError, listing,
    },
    ports::{TodoRepository, TodoRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for to-do operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TodoRepositoryError),
}

/// Coarse classification of service errors for callers mapping them onto a
/// transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoErrorKind {
    /// Malformed or missing input.
    Validation,
    /// The referenced item does not exist.
    NotFound,
    /// The item status has no forward transition.
    Transition,
    /// The backend failed for infrastructure reasons.
    Store,
}

impl TodoServiceError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> TodoErrorKind {
        match self {
            Self::Validation(_) => TodoErrorKind::Validation,
            Self::Repository(TodoRepositoryError::NotFound(_)) => TodoErrorKind::NotFound,
            Self::Repository(TodoRepositoryError::Transition(_)) => TodoErrorKind::Transition,
            Self::Repository(
                TodoRepositoryError::InvalidPersistedData(_) | TodoRepositoryError::Persistence(_),
            ) => TodoErrorKind::Store,
        }
    }
}

/// Result type for to-do service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Task store orchestration service.
///
/// The service is an explicit handle over a shared repository; cloning it
/// yields another handle onto the same collection.
pub struct TodoService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    schema: ItemSchema,
}

impl<R, C> Clone for TodoService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            schema: self.schema,
        }
    }
}

impl<R, C> TodoService<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new service for the dated item schema.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            schema: ItemSchema::default(),
        }
    }

    /// Sets the item schema, which decides listing order.
    #[must_use]
    pub const fn with_schema(mut self, schema: ItemSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Returns the item schema.
    #[must_use]
    pub const fn schema(&self) -> ItemSchema {
        self.schema
    }

    /// Returns the listing order implied by the item schema.
    #[must_use]
    pub const fn list_order(&self) -> ListOrder {
        match self.schema {
            ItemSchema::Minimal => ListOrder::Insertion,
            ItemSchema::Dated => ListOrder::CompletedLastByDueDate,
        }
    }

    /// Creates an item and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the backend fails.
    pub async fn add(&self, payload: TodoPayload) -> TodoServiceResult<TodoItem> {
        let item = self
            .repository
            .add(&payload, self.clock.utc())
            .await
            .inspect_err(report_store_fault)?;
        info!(todo_id = %item.id(), status = %item.status(), "todo created");
        Ok(item)
    }

    /// Returns one item.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] (wrapped) when the item does
    /// not exist, or a repository error when the backend fails.
    pub async fn get_one(&self, id: TodoId) -> TodoServiceResult<TodoItem> {
        self.repository
            .find_by_id(id)
            .await
            .inspect_err(report_store_fault)?
            .ok_or_else(|| TodoRepositoryError::NotFound(id).into())
    }

    /// Returns every item in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the backend fails.
    pub async fn get_all(&self) -> TodoServiceResult<Vec<TodoItem>> {
        Ok(self
            .repository
            .list_all()
            .await
            .inspect_err(report_store_fault)?)
    }

    /// Returns one page of the filtered and ordered listing.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the backend fails.
    pub async fn list(&self, query: &ListQuery) -> TodoServiceResult<TodoPage> {
        let items = self.get_all().await?;
        let page = listing::apply(items, query, self.list_order());
        debug!(
            page = page.page,
            limit = page.limit,
            total = page.total,
            returned = page.items.len(),
            "todos listed"
        );
        Ok(page)
    }

    /// Replaces task text, status and due date of an item.
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`TodoRepositoryError::NotFound`] when the item does
    /// not exist, or a repository error when the backend fails.
    pub async fn change_task(
        &self,
        id: TodoId,
        payload: TodoPayload,
    ) -> TodoServiceResult<TodoItem> {
        let item = self
            .repository
            .change_task(id, &payload, self.clock.utc())
            .await
            .inspect_err(report_store_fault)?;
        info!(todo_id = %id, status = %item.status(), "todo updated");
        Ok(item)
    }

    /// Advances the item status one step and returns the new status.
    ///
    /// Walking a canceled item to completion takes three calls.
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`TodoRepositoryError::Transition`] when the status
    /// is terminal, [`TodoRepositoryError::NotFound`] when the item does not
    /// exist, or a repository error when the backend fails.
    pub async fn move_status_up(&self, id: TodoId) -> TodoServiceResult<TodoStatus> {
        let item = self
            .repository
            .advance_status(id, self.clock.utc())
            .await
            .inspect_err(report_store_fault)?;
        info!(todo_id = %id, status = %item.status(), "todo status moved up");
        Ok(item.status())
    }

    /// Deletes an item. Identifiers are never reused.
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`TodoRepositoryError::NotFound`] when the item does
    /// not exist, or a repository error when the backend fails.
    pub async fn remove(&self, id: TodoId) -> TodoServiceResult<()> {
        self.repository
            .remove(id)
            .await
            .inspect_err(report_store_fault)?;
        info!(todo_id = %id, "todo removed");
        Ok(())
    }

    /// Inserts the demonstration items and returns them.
    ///
    /// The minimal schema stores them without due dates.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError`] when an item cannot be built or stored.
    pub async fn seed_sample_data(&self) -> TodoServiceResult<Vec<TodoItem>> {
        let mut seeded = Vec::with_capacity(SAMPLE_DATA.len());
        for (task, status, due) in SAMPLE_DATA {
            let mut payload = TodoPayload::new(TaskText::new(task)?, status);
            if self.schema.has_due_date() {
                payload = payload.with_due(DueDate::parse(due)?);
            }
            seeded.push(self.add(payload).await?);
        }
        info!(count = seeded.len(), "sample todos seeded");
        Ok(seeded)
    }
}

const SAMPLE_DATA: [(&str, TodoStatus, &str); 3] = [
    ("Buy groceries", TodoStatus::Pending, "2025-06-10"),
    ("Clean the house", TodoStatus::Pending, "2025-06-11"),
    ("Finish project report", TodoStatus::Completed, "2025-06-09"),
];

fn report_store_fault(err: &TodoRepositoryError) {
    if matches!(
        err,
        TodoRepositoryError::Persistence(_) | TodoRepositoryError::InvalidPersistedData(_)
    ) {
        warn!(error = %err, "todo store backend fault");
    }
}
