//! Unit stacks: kind -> count maps with casualty arithmetic

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::UnitKind;

/// A stack of units keyed by kind
///
/// Counts are always positive: writing a zero count removes the entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitStack {
    counts: AHashMap<UnitKind, u32>,
}

impl UnitStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from (kind, count) pairs; zero counts are dropped
    pub fn of(entries: &[(UnitKind, u32)]) -> Self {
        let mut stack = Self::new();
        for &(kind, count) in entries {
            stack.add(kind, count);
        }
        stack
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total unit count across all kinds
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn count(&self, kind: UnitKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Set the count for a kind, removing the entry at zero
    pub fn set(&mut self, kind: UnitKind, count: u32) {
        if count == 0 {
            self.counts.remove(&kind);
        } else {
            self.counts.insert(kind, count);
        }
    }

    pub fn add(&mut self, kind: UnitKind, count: u32) {
        let current = self.count(kind);
        self.set(kind, current + count);
    }

    /// Add every entry of another stack into this one
    pub fn absorb(&mut self, other: &UnitStack) {
        for (kind, count) in other.iter() {
            self.add(kind, count);
        }
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (UnitKind, u32)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }

    /// Snapshot of the kinds present, for loops that mutate the stack
    pub fn kinds(&self) -> Vec<UnitKind> {
        self.counts.keys().copied().collect()
    }

    /// Derive the survivors after applying a loss fraction per kind
    ///
    /// Each kind loses trunc(count * loss_fraction); kinds with no survivors
    /// are absent from the result.
    pub fn surviving(&self, loss_fraction: f64) -> UnitStack {
        let mut survivors = UnitStack::new();
        for (kind, count) in self.iter() {
            let lost = ((count as f64 * loss_fraction) as u32).min(count);
            survivors.set(kind, count - lost);
        }
        survivors
    }

    /// Remove an absolute number of units, spread proportionally across kinds
    ///
    /// The fraction removed per kind is losses / total, truncated per kind;
    /// emptied kinds are removed. No-op on an empty stack.
    pub fn apply_attrition(&mut self, losses: u32) {
        let total = self.total();
        if total == 0 {
            return;
        }

        let loss_fraction = losses as f64 / total as f64;
        for kind in self.kinds() {
            let count = self.count(kind);
            let lost = ((count as f64 * loss_fraction) as u32).min(count);
            self.set(kind, count - lost);
        }
    }
}
