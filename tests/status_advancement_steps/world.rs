//! Shared world state for status advancement BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todo_store::todo::{
    adapters::memory::InMemoryTodoRepository,
    api::{ApiResponse, TodoApi},
    domain::{TodoItem, TodoStatus},
    services::{TodoService, TodoServiceError},
};

/// Service type used by the BDD world.
pub type TestTodoService = TodoService<InMemoryTodoRepository, DefaultClock>;

/// Scenario world for status advancement behaviour tests.
pub struct StatusWorld {
    pub service: TestTodoService,
    pub last_created: Option<TodoItem>,
    pub last_move: Option<Result<TodoStatus, TodoServiceError>>,
    pub last_response: Option<ApiResponse>,
}

impl StatusWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let service = TodoService::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            last_created: None,
            last_move: None,
            last_response: None,
        }
    }

    /// Returns a request adapter sharing the world's store.
    #[must_use]
    pub fn api(&self) -> TodoApi<InMemoryTodoRepository, DefaultClock> {
        TodoApi::new(self.service.clone())
    }
}

impl Default for StatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StatusWorld {
    StatusWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
