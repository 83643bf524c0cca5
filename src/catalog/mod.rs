//! Static stat tables: races, difficulty levels, unit kinds
//!
//! Every table is an enum tag plus a pure accessor returning an immutable
//! value record. No table is mutated at runtime.

pub mod difficulty;
pub mod race;
pub mod unit;

pub use difficulty::{Difficulty, DifficultyParams};
pub use race::{Race, RaceModifiers};
pub use unit::{UnitKind, UnitStats};
