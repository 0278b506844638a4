//! Request handlers for the to-do collection.

use super::response::ApiResponse;
use crate::todo::{
    domain::{ListQuery, TodoId},
    ports::TodoRepository,
    services::{TodoErrorKind, TodoService},
    validation::{STATUS_FIELD, TodoValidator, rules},
};
use http::StatusCode;
use mockable::Clock;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::hash::BuildHasher;
use tracing::debug;

/// Body field that routes an update to the status advance.
pub const CHANGE_UP_FIELD: &str = "changeUp";

const STATUS_PARAM: &str = "status";
const PAGE_PARAM: &str = "page";
const LIMIT_PARAM: &str = "limit";

/// Request adapter over a [`TodoService`].
pub struct TodoApi<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    service: TodoService<R, C>,
    validator: TodoValidator,
}

impl<R, C> Clone for TodoApi<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            validator: self.validator.clone(),
        }
    }
}

impl<R, C> TodoApi<R, C>
where
    R: TodoRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates an adapter whose validator follows the service's schema.
    #[must_use]
    pub fn new(service: TodoService<R, C>) -> Self {
        let validator = TodoValidator::new().with_schema(service.schema());
        Self { service, validator }
    }

    /// Replaces the validator.
    #[must_use]
    pub fn with_validator(mut self, validator: TodoValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Returns the underlying service.
    #[must_use]
    pub const fn service(&self) -> &TodoService<R, C> {
        &self.service
    }

    /// Handles `POST /todos`.
    pub async fn create(&self, body: &[u8]) -> ApiResponse {
        let Some(fields) = decode_fields(body) else {
            return invalid_body();
        };
        let payload = match self.validator.validate(&fields) {
            Ok(payload) => payload,
            Err(err) => {
                debug!(error = %err, "rejected todo creation");
                return ApiResponse::error(StatusCode::BAD_REQUEST, err.to_string());
            }
        };

        match self.service.add(payload).await {
            Ok(item) => {
                let mut reply = json!({
                    "message": "Task added successfully",
                    "id": item.id().to_string(),
                });
                if rules::status_omitted(fields.get(STATUS_FIELD).map(String::as_str)) {
                    reply["note"] = Value::from("Status not provided, defaulted to 'Pending'");
                }
                ApiResponse::new(StatusCode::CREATED, reply)
            }
            Err(err) => ApiResponse::from_service_error(&err, "Failed to add task"),
        }
    }

    /// Handles `GET /todos/{id}`.
    pub async fn get(&self, id: &str) -> ApiResponse {
        let Ok(todo_id) = id.parse::<TodoId>() else {
            return ApiResponse::not_found();
        };
        match self.service.get_one(todo_id).await {
            Ok(item) => ok_json(&item),
            Err(err) => ApiResponse::from_service_error(&err, "Failed to fetch task"),
        }
    }

    /// Handles `GET /todos` with optional `status`, `page` and `limit`
    /// query parameters.
    pub async fn list<S: BuildHasher>(&self, params: &HashMap<String, String, S>) -> ApiResponse {
        let param = |name: &str| params.get(name).map(String::as_str);
        let query =
            ListQuery::from_params(param(STATUS_PARAM), param(PAGE_PARAM), param(LIMIT_PARAM));
        match self.service.list(&query).await {
            Ok(page) => ok_json(&page),
            Err(err) => ApiResponse::from_service_error(&err, "Failed to fetch tasks"),
        }
    }

    /// Handles `PUT /todos/{id}`.
    ///
    /// A truthy `changeUp` field advances the status one step and ignores
    /// every other field; otherwise the body must be a complete item.
    pub async fn update(&self, id: &str, body: &[u8]) -> ApiResponse {
        if id.is_empty() {
            return missing_id();
        }
        let Some(fields) = decode_fields(body) else {
            return invalid_body();
        };

        if let Some(raw) = fields.get(CHANGE_UP_FIELD) {
            let Some(change_up) = parse_bool(raw) else {
                return ApiResponse::error(
                    StatusCode::BAD_REQUEST,
                    "Invalid 'changeUp' value; expected 'true' or 'false'",
                );
            };
            if change_up {
                return self.move_status_up(id).await;
            }
        }

        let payload = match self.validator.validate(&fields) {
            Ok(payload) => payload,
            Err(err) => {
                debug!(todo_id = id, error = %err, "rejected todo update");
                return ApiResponse::error(StatusCode::BAD_REQUEST, err.to_string());
            }
        };
        let Ok(todo_id) = id.parse::<TodoId>() else {
            return ApiResponse::not_found();
        };

        match self.service.change_task(todo_id, payload).await {
            Ok(item) => ApiResponse::new(
                StatusCode::OK,
                json!({
                    "message": "Task updated successfully",
                    "id": item.id().to_string(),
                }),
            ),
            Err(err) => ApiResponse::from_service_error(&err, "Failed to update task"),
        }
    }

    /// Handles `DELETE /todos/{id}`.
    pub async fn remove(&self, id: &str) -> ApiResponse {
        if id.is_empty() {
            return missing_id();
        }
        let Ok(todo_id) = id.parse::<TodoId>() else {
            return ApiResponse::not_found();
        };
        match self.service.remove(todo_id).await {
            Ok(()) => ApiResponse::new(
                StatusCode::OK,
                json!({ "message": "Task removed", "id": todo_id.to_string() }),
            ),
            Err(err) => ApiResponse::from_service_error(&err, "Failed to remove task"),
        }
    }

    async fn move_status_up(&self, id: &str) -> ApiResponse {
        let result = match id.parse::<TodoId>() {
            Ok(todo_id) => self.service.move_status_up(todo_id).await,
            Err(_) => return cannot_move_up(id),
        };
        match result {
            Ok(status) => ApiResponse::new(
                StatusCode::OK,
                json!({
                    "message": "Status moved up",
                    "id": id,
                    "newStatus": status.as_str(),
                }),
            ),
            Err(err) => match err.kind() {
                TodoErrorKind::NotFound | TodoErrorKind::Transition => cannot_move_up(id),
                TodoErrorKind::Validation | TodoErrorKind::Store => {
                    ApiResponse::from_service_error(&err, "Failed to move status up")
                }
            },
        }
    }
}

fn decode_fields(body: &[u8]) -> Option<HashMap<String, String>> {
    serde_json::from_slice(body).ok()
}

/// Parses the boolean spellings accepted for `changeUp`.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn ok_json(value: &impl Serialize) -> ApiResponse {
    match serde_json::to_value(value) {
        Ok(body) => ApiResponse::new(StatusCode::OK, body),
        Err(err) => ApiResponse::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode response: {err}"),
        ),
    }
}

fn invalid_body() -> ApiResponse {
    ApiResponse::error(StatusCode::BAD_REQUEST, "Invalid request body")
}

fn missing_id() -> ApiResponse {
    ApiResponse::error(StatusCode::BAD_REQUEST, "Missing id in URL path")
}

fn cannot_move_up(id: &str) -> ApiResponse {
    ApiResponse::new(
        StatusCode::CONFLICT,
        json!({ "message": "Status of this task can't be moved up", "id": id }),
    )
}
