//! Port contracts for to-do item tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by the store
//! service and the validator.

pub mod repository;
pub mod sanitizer;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult};
pub use sanitizer::TextSanitizer;
