//! Shared types and models for the FieldSight platform
//!
//! This crate contains the domain types shared between the backend and any
//! other components of the system, plus the field geometry math the backend
//! builds on. It performs no I/O.

pub mod geometry;
pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
