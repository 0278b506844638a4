//! Response values produced by the request adapter.

use crate::todo::services::{TodoErrorKind, TodoServiceError};
use http::StatusCode;
use serde_json::{Value, json};

/// Message reported for unknown identifiers.
pub(crate) const NOT_FOUND_MESSAGE: &str = "The task with this ID has not been found";

/// Status code and JSON body of a handled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: StatusCode,
    body: Value,
}

impl ApiResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// Creates an error response with body `{"error": message}`.
    #[must_use]
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "error": message.into() }))
    }

    /// Creates a `404 Not Found` response for an unknown identifier.
    #[must_use]
    pub fn not_found() -> Self {
        Self::error(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    /// Maps a service error onto a status code and error body.
    ///
    /// `context` prefixes the description of backend faults.
    #[must_use]
    pub fn from_service_error(err: &TodoServiceError, context: &str) -> Self {
        match err.kind() {
            TodoErrorKind::Validation => Self::error(StatusCode::BAD_REQUEST, err.to_string()),
            TodoErrorKind::NotFound => Self::not_found(),
            TodoErrorKind::Transition => Self::error(StatusCode::CONFLICT, err.to_string()),
            TodoErrorKind::Store => Self::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{context}: {err}"),
            ),
        }
    }

    /// Returns the status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the JSON body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Splits the response into status code and body.
    #[must_use]
    pub fn into_parts(self) -> (StatusCode, Value) {
        (self.status, self.body)
    }
}
