//! Player combat state: unit pools, resources and home territory

pub mod stockpile;

pub use stockpile::Stockpile;

use serde::{Deserialize, Serialize};

use crate::catalog::{Difficulty, Race, RaceModifiers, UnitKind};
use crate::combat::UnitStack;
use crate::core::types::{PlayerId, TerritoryId};

/// The player faction's mutable simulation state
///
/// The home pool and the committed-attack stack are disjoint: committing
/// withdraws units from the pool, and they come back exactly once, as the
/// survivors of the resolved attack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub race: Race,
    pub stockpile: Stockpile,
    units: UnitStack,
    units_in_attack: UnitStack,
    current_territory: Option<TerritoryId>,
}

impl Player {
    pub fn new(id: PlayerId, race: Race, difficulty: Difficulty) -> Self {
        Self {
            id,
            name: "Player".to_string(),
            race,
            stockpile: Stockpile::starting(difficulty),
            units: UnitStack::new(),
            units_in_attack: UnitStack::new(),
            current_territory: None,
        }
    }

    /// Home unit pool
    pub fn units(&self) -> &UnitStack {
        &self.units
    }

    /// Mutable home unit pool (mustering, event effects)
    pub fn units_mut(&mut self) -> &mut UnitStack {
        &mut self.units
    }

    /// Units currently committed to an attack
    pub fn attacking_units(&self) -> &UnitStack {
        &self.units_in_attack
    }

    pub fn has_units(&self) -> bool {
        !self.units.is_empty()
    }

    /// Move units from the home pool into the attack force
    ///
    /// Capped at what the pool holds; returns the count actually committed.
    pub fn commit_to_attack(&mut self, kind: UnitKind, count: u32) -> u32 {
        let available = self.units.count(kind);
        let committed = count.min(available);
        if committed == 0 {
            return 0;
        }

        self.units.set(kind, available - committed);
        self.units_in_attack.add(kind, committed);
        committed
    }

    /// Return the survivors of a resolved attack to the home pool
    ///
    /// Clears the committed stack: the fallen do not come back.
    pub fn return_survivors(&mut self, survivors: &UnitStack) {
        self.units.absorb(survivors);
        self.units_in_attack.clear();
    }

    pub fn current_territory(&self) -> Option<TerritoryId> {
        self.current_territory
    }

    pub fn set_current_territory(&mut self, territory: Option<TerritoryId>) {
        self.current_territory = territory;
    }

    pub fn race_modifiers(&self) -> RaceModifiers {
        self.race.modifiers()
    }

    /// Credit conquest spoils, ignoring storage caps
    pub fn award_spoils(&mut self, spoils: &Stockpile) {
        self.stockpile.add(spoils);
    }
}
