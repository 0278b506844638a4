//! `PostgreSQL` repository implementation for to-do storage.
//!
//! Each operation is a single statement relying on the database's per-row
//! atomicity, except [`TodoRepository::advance_status`], which locks the row
//! with `SELECT ... FOR UPDATE` so concurrent advances of the same item
//! serialise instead of racing on a stale status.

use super::{
    CREATE_TODOS_SQL,
    models::{NewTodoRow, TodoChangeset, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{DueDate, PersistedTodoData, TaskText, TodoId, TodoItem, TodoPayload, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;

/// `PostgreSQL` connection pool type used by to-do adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed to-do repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `todos` table when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the DDL fails.
    pub async fn ensure_schema(&self) -> TodoRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_TODOS_SQL)
                .map_err(TodoRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

impl From<DieselError> for TodoRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn add(
        &self,
        payload: &TodoPayload,
        at: DateTime<Utc>,
    ) -> TodoRepositoryResult<TodoItem> {
        let new_row = to_new_row(payload, at);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todos::table)
                .values(&new_row)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)?;
            row_to_item(row)
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<TodoItem>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .find(id.value())
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()?;
            row.map(row_to_item).transpose()
        })
        .await
    }

    async fn list_all(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        self.run_blocking(move |connection| {
            let rows = todos::table
                .order(todos::id.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)?;
            rows.into_iter().map(row_to_item).collect()
        })
        .await
    }

    async fn change_task(
        &self,
        id: TodoId,
        payload: &TodoPayload,
        at: DateTime<Utc>,
    ) -> TodoRepositoryResult<TodoItem> {
        let changeset = to_changeset(payload, at);
        self.run_blocking(move |connection| {
            let row = diesel::update(todos::table.find(id.value()))
                .set(&changeset)
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .optional()?
                .ok_or(TodoRepositoryError::NotFound(id))?;
            row_to_item(row)
        })
        .await
    }

    async fn advance_status(
        &self,
        id: TodoId,
        at: DateTime<Utc>,
    ) -> TodoRepositoryResult<TodoItem> {
        self.run_blocking(move |connection| {
            connection.transaction::<_, TodoRepositoryError, _>(|tx| {
                let row = todos::table
                    .find(id.value())
                    .select(TodoRow::as_select())
                    .for_update()
                    .first::<TodoRow>(tx)
                    .optional()?
                    .ok_or(TodoRepositoryError::NotFound(id))?;
                let mut item = row_to_item(row)?;
                let next = item.advance_status(at)?;

                let updated = diesel::update(todos::table.find(id.value()))
                    .set((todos::status.eq(next.as_str()), todos::updated_at.eq(at)))
                    .returning(TodoRow::as_returning())
                    .get_result::<TodoRow>(tx)?;
                row_to_item(updated)
            })
        })
        .await
    }

    async fn remove(&self, id: TodoId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(todos::table.find(id.value())).execute(connection)?;
            if deleted == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(payload: &TodoPayload, at: DateTime<Utc>) -> NewTodoRow {
    NewTodoRow {
        task: payload.task().as_str().to_owned(),
        status: payload.status().as_str().to_owned(),
        due: payload.due().map(DueDate::date),
        created_at: at,
        updated_at: at,
    }
}

fn to_changeset(payload: &TodoPayload, at: DateTime<Utc>) -> TodoChangeset {
    TodoChangeset {
        task: payload.task().as_str().to_owned(),
        status: payload.status().as_str().to_owned(),
        due: payload.due().map(DueDate::date),
        updated_at: at,
    }
}

fn row_to_item(row: TodoRow) -> TodoRepositoryResult<TodoItem> {
    let TodoRow {
        id,
        task: persisted_task,
        status: persisted_status,
        due,
        created_at,
        updated_at,
    } = row;

    let task =
        TaskText::new(persisted_task).map_err(TodoRepositoryError::invalid_persisted_data)?;
    let status = TodoStatus::try_from(persisted_status.as_str())
        .map_err(TodoRepositoryError::invalid_persisted_data)?;

    Ok(TodoItem::from_persisted(PersistedTodoData {
        id: TodoId::new(id),
        task,
        status,
        due: due.map(DueDate::from),
        created_at,
        updated_at,
    }))
}
