//! Combat: unit stacks and battle resolution

pub mod resolution;
pub mod stack;

pub use resolution::{
    attack_strength, defense_strength, resolve_attack, win_probability, CombatOutcome,
};
pub use stack::UnitStack;
