//! Core types and error definitions

pub mod error;
pub mod types;

pub use error::{Result, SimError};
pub use types::{PlayerId, TerritoryId};
