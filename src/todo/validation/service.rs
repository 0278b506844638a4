//! Field-map validator combining the individual rules.

use super::{DUE_FIELD, STATUS_FIELD, TASK_FIELD, rules};
use crate::todo::{
    adapters::HtmlSanitizer,
    domain::{ItemSchema, TodoPayload, ValidationError},
    ports::TextSanitizer,
};
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Turns untrusted field maps into validated payloads.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use todo_store::todo::{domain::TodoStatus, validation::TodoValidator};
///
/// let fields = HashMap::from([
///     ("task".to_owned(), "  Water the plants ".to_owned()),
///     ("due".to_owned(), "2025-06-10".to_owned()),
/// ]);
///
/// let payload = TodoValidator::new().validate(&fields).expect("valid fields");
/// assert_eq!(payload.task().as_str(), "Water the plants");
/// assert_eq!(payload.status(), TodoStatus::Pending);
/// ```
#[derive(Clone)]
pub struct TodoValidator {
    sanitizer: Arc<dyn TextSanitizer>,
    schema: ItemSchema,
}

impl TodoValidator {
    /// Creates a validator for the dated schema using [`HtmlSanitizer`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            sanitizer: Arc::new(HtmlSanitizer::new()),
            schema: ItemSchema::default(),
        }
    }

    /// Sets the item schema, which decides whether a due date is required.
    #[must_use]
    pub const fn with_schema(mut self, schema: ItemSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Replaces the sanitiser.
    #[must_use]
    pub fn with_sanitizer(mut self, sanitizer: Arc<dyn TextSanitizer>) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    /// Returns the item schema.
    #[must_use]
    pub const fn schema(&self) -> ItemSchema {
        self.schema
    }

    /// Validates a field map into a payload.
    ///
    /// Fields are checked in the order task, status, due. In the minimal
    /// schema the due field is ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first failing field.
    pub fn validate<S: BuildHasher>(
        &self,
        fields: &HashMap<String, String, S>,
    ) -> ValidationResult<TodoPayload> {
        let sanitizer = self.sanitizer.as_ref();

        let task = rules::validate_task(field(fields, TASK_FIELD), sanitizer)?;
        let status = rules::validate_status(field(fields, STATUS_FIELD), sanitizer)?;
        let payload = TodoPayload::new(task, status);

        if !self.schema.has_due_date() {
            return Ok(payload);
        }
        let due = rules::validate_due(field(fields, DUE_FIELD), sanitizer)?;
        Ok(payload.with_due(due))
    }
}

fn field<'a, S: BuildHasher>(
    fields: &'a HashMap<String, String, S>,
    name: &str,
) -> Option<&'a str> {
    fields.get(name).map(String::as_str)
}

impl Default for TodoValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TodoValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoValidator")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}
