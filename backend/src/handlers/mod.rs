//! HTTP handlers for the FieldSight API

pub mod event;
pub mod field;
pub mod health;
pub mod news;
pub mod recommendation;
pub mod soil;
pub mod weather;

pub use event::*;
pub use field::*;
pub use health::*;
pub use news::*;
pub use recommendation::*;
pub use soil::*;
pub use weather::*;
