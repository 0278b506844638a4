//! Wiring of configured stores.
//!
//! [`build_store`] turns a [`StoreConfig`] into a ready service: it opens the
//! connection pool, creates the `todos` table when needed and inserts the
//! sample items on request.

use crate::config::{BackendKind, StoreConfig};
use crate::todo::{
    adapters::{
        memory::InMemoryTodoRepository,
        postgres::{PostgresTodoRepository, TodoPgPool},
    },
    api::TodoApi,
    ports::{TodoRepository, TodoRepositoryError},
    services::{TodoService, TodoServiceError},
};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service over whichever backend the configuration selected.
pub type SharedTodoService = TodoService<dyn TodoRepository, DefaultClock>;

/// Request adapter over a [`SharedTodoService`].
pub type SharedTodoApi = TodoApi<dyn TodoRepository, DefaultClock>;

/// Errors raised while building a store.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The connection pool could not be opened.
    #[error("failed to open connection pool: {0}")]
    Pool(#[from] PoolError),

    /// The blocking pool task did not complete.
    #[error("connection pool task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// The `todos` table could not be created.
    #[error("failed to prepare todo schema: {0}")]
    Schema(#[source] TodoRepositoryError),

    /// The sample items could not be inserted.
    #[error("failed to seed sample todos: {0}")]
    Seed(#[source] TodoServiceError),
}

/// Builds the service described by `config`.
///
/// # Errors
///
/// Returns [`BootstrapError`] when the database is unreachable, the schema
/// cannot be created or seeding fails.
pub async fn build_store(config: &StoreConfig) -> Result<SharedTodoService, BootstrapError> {
    let repository: Arc<dyn TodoRepository> = match &config.backend {
        BackendKind::Memory => Arc::new(InMemoryTodoRepository::new()),
        BackendKind::Postgres {
            database_url,
            pool_size,
        } => {
            let pool = open_pool(database_url.clone(), *pool_size).await?;
            let repository = PostgresTodoRepository::new(pool);
            repository
                .ensure_schema()
                .await
                .map_err(BootstrapError::Schema)?;
            Arc::new(repository)
        }
    };
    info!(
        backend = backend_name(&config.backend),
        schema = %config.schema,
        "todo store ready"
    );

    let service = TodoService::new(repository, Arc::new(DefaultClock)).with_schema(config.schema);
    if config.seed_sample_data {
        service
            .seed_sample_data()
            .await
            .map_err(BootstrapError::Seed)?;
    }
    Ok(service)
}

/// Builds the request adapter described by `config`.
///
/// # Errors
///
/// See [`build_store`].
pub async fn build_api(config: &StoreConfig) -> Result<SharedTodoApi, BootstrapError> {
    build_store(config).await.map(TodoApi::new)
}

async fn open_pool(database_url: String, pool_size: u32) -> Result<TodoPgPool, BootstrapError> {
    let pool = tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(pool_size)
            .build(ConnectionManager::<PgConnection>::new(database_url))
    })
    .await??;
    info!(pool_size, "postgres connection pool opened");
    Ok(pool)
}

const fn backend_name(backend: &BackendKind) -> &'static str {
    match backend {
        BackendKind::Memory => "memory",
        BackendKind::Postgres { .. } => "postgres",
    }
}
