//! Territory: one grid cell with an owner, a garrison and stored resources

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Difficulty, Race, UnitKind};
use crate::combat::UnitStack;
use crate::core::types::{PlayerId, TerritoryId};
use crate::player::Stockpile;

/// Coarse garrison strength classification shown to would-be attackers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GarrisonStrength {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl std::fmt::Display for GarrisonStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GarrisonStrength::Weak => "Weak",
            GarrisonStrength::Moderate => "Moderate",
            GarrisonStrength::Strong => "Strong",
            GarrisonStrength::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// A strategic territory on the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Territory {
    pub id: TerritoryId,
    pub name: String,
    /// None means neutral/hostile ground
    pub owner: Option<PlayerId>,
    adjacent: Vec<TerritoryId>,
    pub stockpile: Stockpile,
    pub base_defense: i64,
    pub garrison: UnitStack,
}

impl Territory {
    /// Create a territory with randomized stores and fortification
    ///
    /// The adjacency list is fixed for the territory's lifetime.
    pub fn new(
        id: TerritoryId,
        name: String,
        adjacent: Vec<TerritoryId>,
        rng: &mut ChaCha8Rng,
    ) -> Self {
        let stockpile = Stockpile::open(
            20 + rng.gen_range(0..100),
            20 + rng.gen_range(0..100),
            10 + rng.gen_range(0..50),
        );

        Self {
            id,
            name,
            owner: None,
            adjacent,
            stockpile,
            base_defense: 10 + rng.gen_range(0..20i64),
            garrison: UnitStack::new(),
        }
    }

    /// Populate the garrison from one random race's roster
    ///
    /// Garrison size grows with distance from the player start, scaled by
    /// difficulty; the composition shifts from the basic tier toward the
    /// advanced tiers as distance increases. The basic tier never drops
    /// below one unit.
    pub fn setup_garrison(&mut self, difficulty: Difficulty, distance: u32, rng: &mut ChaCha8Rng) {
        let base_units = (5 + 2 * distance) as f64;
        let multiplier = difficulty.params().enemy_strength_multiplier;

        let race = match rng.gen_range(0..3u32) {
            0 => Race::Human,
            1 => Race::Elf,
            _ => Race::Orc,
        };
        let roster = UnitKind::roster(race);

        let d = distance as f64;
        let basic = ((base_units * multiplier * (0.7 - 0.1 * d)) as i64).max(1);
        let medium = ((base_units * multiplier * (0.2 + 0.05 * d)) as i64).max(0);
        let advanced = ((base_units * multiplier * (0.1 + 0.05 * d)) as i64).max(0);

        self.garrison.set(roster[0], basic as u32);
        self.garrison.set(roster[1], medium as u32);
        self.garrison.set(roster[2], advanced as u32);
    }

    /// Transfer ownership, unconditionally disbanding the garrison
    pub fn capture(&mut self, owner: Option<PlayerId>) {
        self.owner = owner;
        self.garrison.clear();
    }

    pub fn adjacent(&self) -> &[TerritoryId] {
        &self.adjacent
    }

    pub fn is_adjacent_to(&self, id: TerritoryId) -> bool {
        self.adjacent.contains(&id)
    }

    /// Classify the garrison by total headcount
    pub fn garrison_estimate(&self) -> GarrisonStrength {
        match self.garrison.total() {
            0..=9 => GarrisonStrength::Weak,
            10..=19 => GarrisonStrength::Moderate,
            20..=39 => GarrisonStrength::Strong,
            _ => GarrisonStrength::VeryStrong,
        }
    }
}
