//! Application services for to-do tracking.

mod store;

pub use store::{TodoErrorKind, TodoService, TodoServiceError, TodoServiceResult};
