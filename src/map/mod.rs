//! Territories, the world grid and frontier targeting

pub mod grid;
pub mod targeting;
pub mod territory;

pub use grid::WorldMap;
pub use targeting::maybe_trigger_enemy_attack;
pub use territory::{GarrisonStrength, Territory};
