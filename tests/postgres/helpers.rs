//! Shared test helpers for `PostgreSQL` integration tests.
//!
//! The tests need a reachable database named by `TODO_TEST_DATABASE_URL`
//! and are skipped when it is unset. Every test runs on a single pooled
//! connection inside a transaction that is never committed.

use std::sync::Arc;

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, TestCustomizer};
use mockable::DefaultClock;
use todo_store::todo::{
    adapters::postgres::PostgresTodoRepository,
    domain::{DueDate, TaskText, TodoPayload, TodoStatus},
    services::TodoService,
};

/// Variable naming the test database.
pub const DATABASE_URL_VAR: &str = "TODO_TEST_DATABASE_URL";

/// Service type exercised by the `PostgreSQL` tests.
pub type PgService = TodoService<PostgresTodoRepository, DefaultClock>;

/// Builds a service over an isolated test transaction, or `None` when no
/// test database is configured.
///
/// # Errors
///
/// Returns an error if the pool cannot be opened or the schema cannot be
/// created.
pub async fn setup_service() -> Result<Option<PgService>, eyre::Report> {
    let Ok(database_url) = std::env::var(DATABASE_URL_VAR) else {
        return Ok(None);
    };
    let pool = tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(1)
            .connection_customizer(Box::new(TestCustomizer))
            .build(ConnectionManager::<PgConnection>::new(database_url))
    })
    .await??;
    let repository = PostgresTodoRepository::new(pool);
    repository.ensure_schema().await?;
    Ok(Some(TodoService::new(
        Arc::new(repository),
        Arc::new(DefaultClock),
    )))
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
