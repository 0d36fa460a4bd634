//! Domain models for the FieldSight platform

mod event;
mod field;
mod news;
mod soil;
mod weather;

pub use event::*;
pub use field::*;
pub use news::*;
pub use soil::*;
pub use weather::*;
