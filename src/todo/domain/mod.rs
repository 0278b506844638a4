//! Domain model for to-do items.
//!
//! The domain covers the item entity, its closed status vocabulary and the
//! pure listing rules, keeping every infrastructure concern outside the
//! domain boundary.

mod error;
mod ids;
mod item;
pub mod listing;
mod status;
mod values;

pub use error::{ParseTodoIdError, ParseTodoStatusError, StatusTransitionError, ValidationError};
pub use ids::TodoId;
pub use item::{PersistedTodoData, TodoItem, TodoPayload};
pub use listing::{ListOrder, ListQuery, TodoPage};
pub use status::{TodoStatus, is_valid_status};
pub use values::{DueDate, ItemSchema, TaskText};
