//! Individual field rules.
//!
//! Each rule trims its raw input, sanitises it and converts it into a domain
//! value, or fails with a specific [`ValidationError`].

use crate::todo::{
    domain::{DueDate, TaskText, TodoStatus, ValidationError},
    ports::TextSanitizer,
};

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Validates the required task text.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyTask`] when the field is absent, blank,
/// or consists solely of markup the sanitiser removes.
pub fn validate_task(
    raw: Option<&str>,
    sanitizer: &dyn TextSanitizer,
) -> Result<TaskText, ValidationError> {
    let trimmed = non_blank(raw).ok_or(ValidationError::EmptyTask)?;
    TaskText::new(sanitizer.sanitize(trimmed))
}

/// Returns `true` when no status was supplied: the field is absent or the
/// empty string. Whitespace counts as a supplied value.
#[must_use]
pub fn status_omitted(raw: Option<&str>) -> bool {
    raw.is_none_or(str::is_empty)
}

/// Validates the optional status, defaulting to `Pending` when omitted.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidStatus`] when a value is supplied that
/// is not one of the known statuses, including a whitespace-only value.
pub fn validate_status(
    raw: Option<&str>,
    sanitizer: &dyn TextSanitizer,
) -> Result<TodoStatus, ValidationError> {
    let Some(supplied) = raw.filter(|value| !value.is_empty()) else {
        return Ok(TodoStatus::default());
    };
    let cleaned = sanitizer.sanitize(supplied.trim());
    TodoStatus::try_from(cleaned.as_str()).map_err(|_| ValidationError::InvalidStatus(cleaned))
}

/// Validates the required due date.
///
/// # Errors
///
/// Returns [`ValidationError::MissingDueDate`] when the field is absent or
/// blank, or [`ValidationError::InvalidDueDate`] when it is not a
/// `YYYY-MM-DD` calendar date.
pub fn validate_due(
    raw: Option<&str>,
    sanitizer: &dyn TextSanitizer,
) -> Result<DueDate, ValidationError> {
    let trimmed = non_blank(raw).ok_or(ValidationError::MissingDueDate)?;
    let cleaned = sanitizer.sanitize(trimmed);
    DueDate::parse(cleaned.trim())
}
