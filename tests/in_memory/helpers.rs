//! Shared test helpers for in-memory store integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todo_store::todo::{
    adapters::memory::InMemoryTodoRepository,
    api::TodoApi,
    domain::{DueDate, TaskText, TodoItem, TodoPayload, TodoStatus},
    services::TodoService,
};

/// Service type exercised by the integration tests.
pub type TestService = TodoService<InMemoryTodoRepository, DefaultClock>;

/// Request adapter type exercised by the integration tests.
pub type TestApi = TodoApi<InMemoryTodoRepository, DefaultClock>;

/// Provides a fresh service over an empty in-memory store.
#[fixture]
pub fn service() -> TestService {
    TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides a request adapter over an empty in-memory store.
#[fixture]
pub fn api(service: TestService) -> TestApi {
    TodoApi::new(service)
}

/// Builds a payload with an optional due date.
///
/// # Errors
///
/// Returns an error if the task text or date is invalid.
pub fn payload(
    task: &str,
    status: TodoStatus,
    due: Option<&str>,
) -> Result<TodoPayload, eyre::Report> {
    let mut payload = TodoPayload::new(TaskText::new(task)?, status);
    if let Some(raw) = due {
        payload = payload.with_due(DueDate::parse(raw)?);
    }
    Ok(payload)
}

/// Adds `count` pending items named `item 1`..`item count`.
///
/// # Errors
///
/// Returns an error if any insertion fails.
pub async fn add_numbered(
    service: &TestService,
    count: usize,
) -> Result<Vec<TodoItem>, eyre::Report> {
    let mut items = Vec::with_capacity(count);
    for n in 1..=count {
        let item = service
            .add(payload(&format!("item {n}"), TodoStatus::Pending, Some("2025-06-10"))?)
            .await?;
        items.push(item);
    }
    Ok(items)
}
