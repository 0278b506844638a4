//! To-do item tracking: the task store and status-transition engine.
//!
//! The module owns item identity, concurrency-safe mutation, listing queries
//! (filter, sort, paginate) and the forward-only status state machine. It
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Input validation in [`validation`]
//! - Orchestration services in [`services`]
//! - A transport-neutral request adapter in [`api`]

pub mod adapters;
pub mod api;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;
