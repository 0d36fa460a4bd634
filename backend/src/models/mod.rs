//! Models for the FieldSight backend
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
