//! Core identifier types used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for the player faction
///
/// Territory ownership is compared through this opaque id, never through
/// the player's mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Unique identifier for territories (stable, 1-based, row-major)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TerritoryId(pub u32);

impl TerritoryId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
