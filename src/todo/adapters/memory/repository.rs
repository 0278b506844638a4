//! In-memory to-do repository guarded by a single mutex.
//!
//! Every operation, reads included, holds the one lock for its whole
//! duration, so no caller can observe a half-applied mutation. Items leave
//! the critical section only as clones.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::todo::{
    domain::{TodoId, TodoItem, TodoPayload},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory to-do repository.
///
/// Cloning the repository yields another handle onto the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<Mutex<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    items: BTreeMap<TodoId, TodoItem>,
    last_id: i64,
}

impl InMemoryTodoState {
    fn next_id(&mut self) -> TodoRepositoryResult<TodoId> {
        let next = self.last_id.checked_add(1).ok_or_else(|| {
            TodoRepositoryError::persistence(std::io::Error::other(
                "todo identifier space exhausted",
            ))
        })?;
        self.last_id = next;
        Ok(TodoId::new(next))
    }

    fn item_mut(&mut self, id: TodoId) -> TodoRepositoryResult<&mut TodoItem> {
        self.items
            .get_mut(&id)
            .ok_or(TodoRepositoryError::NotFound(id))
    }
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> TodoRepositoryResult<MutexGuard<'_, InMemoryTodoState>> {
        self.state.lock().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn add(
        &self,
        payload: &TodoPayload,
        at: DateTime<Utc>,
    ) -> TodoRepositoryResult<TodoItem> {
        let mut state = self.lock()?;
        let id = state.next_id()?;
        let item = TodoItem::new(id, payload.clone(), at);
        state.items.insert(id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>> {
        let state = self.lock()?;
        Ok(state.items.get(&id).cloned())
    }

    async fn list_all(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        let state = self.lock()?;
        Ok(state.items.values().cloned().collect())
    }

    async fn change_task(
        &self,
        id: TodoId,
        payload: &TodoPayload,
        at: DateTime<Utc>,
    ) -> TodoRepositoryResult<TodoItem> {
        let mut state = self.lock()?;
        let item = state.item_mut(id)?;
        item.replace_content(payload.clone(), at);
        Ok(item.clone())
    }

    async fn advance_status(
        &self,
        id: TodoId,
        at: DateTime<Utc>,
    ) -> TodoRepositoryResult<TodoItem> {
        let mut state = self.lock()?;
        let item = state.item_mut(id)?;
        item.advance_status(at)?;
        Ok(item.clone())
    }

    async fn remove(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut state = self.lock()?;
        state
            .items
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoRepositoryError::NotFound(id))
    }
}
