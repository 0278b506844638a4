//! In-memory adapters for to-do storage.

mod repository;

pub use repository::InMemoryTodoRepository;
