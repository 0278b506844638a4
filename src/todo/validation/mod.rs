//! Validation of untrusted item fields.
//!
//! Raw field maps decoded from a request body are sanitised and checked
//! here before anything reaches the store. Validation is all-or-nothing: the
//! first failing field aborts it with a single descriptive error.

pub mod rules;
mod service;

pub use service::{TodoValidator, ValidationResult};

/// Field holding the task text.
pub const TASK_FIELD: &str = "task";
/// Field holding the optional status.
pub const STATUS_FIELD: &str = "status";
/// Field holding the due date.
pub const DUE_FIELD: &str = "due";
