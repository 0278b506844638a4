//! Transport-neutral request adapter.
//!
//! [`TodoApi`] accepts request parts a transport has already taken apart
//! (path identifier, raw JSON body, query parameters), runs validation and
//! the store, and renders an [`ApiResponse`] carrying an HTTP status code
//! and a JSON body. Binding it to a concrete server is left to the caller.

mod handlers;
mod response;

pub use handlers::{CHANGE_UP_FIELD, TodoApi};
pub use response::ApiResponse;
