//! Diesel row models for to-do persistence.

use super::schema::todos;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for to-do records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Sequence-assigned identifier.
    pub id: i64,
    /// Task text.
    pub task: String,
    /// Status string.
    pub status: String,
    /// Optional due date.
    pub due: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for to-do records; the identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Task text.
    pub task: String,
    /// Status string.
    pub status: String,
    /// Optional due date.
    pub due: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Wholesale replacement of an item's content.
///
/// A `None` due date clears the column rather than leaving it untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
#[diesel(treat_none_as_null = true)]
pub struct TodoChangeset {
    /// Task text.
    pub task: String,
    /// Status string.
    pub status: String,
    /// Optional due date.
    pub due: Option<NaiveDate>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
