//! `PostgreSQL` adapters for to-do persistence.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresTodoRepository, TodoPgPool};

/// Idempotent DDL creating the `todos` table.
pub const CREATE_TODOS_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_todos/up.sql");
