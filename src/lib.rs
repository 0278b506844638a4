//! Todo store: task tracking with a forward-only status workflow.
//!
//! This crate stores to-do items, validates untrusted input, answers
//! filtered and paginated listing queries and advances item status through
//! the `Pending`, `In Progress`, `Completed` workflow.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and sanitising
//! - **Adapters**: In-memory and `PostgreSQL` repositories
//!
//! # Modules
//!
//! - [`todo`]: Item model, validation, store and request adapter
//! - [`config`]: Environment-driven settings
//! - [`bootstrap`]: Construction of configured stores

pub mod bootstrap;
pub mod config;
pub mod todo;
