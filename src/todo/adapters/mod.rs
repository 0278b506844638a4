//! Adapter implementations for the to-do ports.

pub mod memory;
pub mod postgres;

mod sanitizer;

pub use sanitizer::HtmlSanitizer;
