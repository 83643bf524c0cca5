//! Simulation session: one world, one player, one rng
//!
//! The session owns all mutated state and exposes the entry points the turn
//! loop drives. Resolution is transactional: each call validates its input,
//! resolves, and applies the ownership and unit-pool consequences before
//! returning the outcome.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::{Difficulty, Race};
use crate::combat::{self, CombatOutcome};
use crate::core::error::{Result, SimError};
use crate::core::types::{PlayerId, TerritoryId};
use crate::events::{Event, EventDeck};
use crate::map::{targeting, WorldMap};
use crate::player::Player;

/// How chatty the session is about combat internals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Quiet,
    Verbose,
}

/// Session construction parameters
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub race: Race,
    pub difficulty: Difficulty,
    pub seed: u64,
    pub verbosity: Verbosity,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            race: Race::Human,
            difficulty: Difficulty::Normal,
            seed: 12345,
            verbosity: Verbosity::Quiet,
        }
    }
}

/// A running simulation
pub struct Session {
    map: WorldMap,
    player: Player,
    events: EventDeck,
    difficulty: Difficulty,
    verbosity: Verbosity,
    rng: ChaCha8Rng,
}

impl Session {
    /// Start a session with the standard event deck
    pub fn new(config: SessionConfig) -> Self {
        Self::with_deck(config, EventDeck::standard())
    }

    /// Start a session with a custom event deck
    pub fn with_deck(config: SessionConfig, events: EventDeck) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut map = WorldMap::generate(config.difficulty, &mut rng);
        let mut player = Player::new(PlayerId(1), config.race, config.difficulty);
        map.place_player(&mut player);

        Self {
            map,
            player,
            events,
            difficulty: config.difficulty,
            verbosity: config.verbosity,
            rng,
        }
    }

    pub fn map(&self) -> &WorldMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut WorldMap {
        &mut self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn debug_enabled(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Resolve the player's committed attack against a neutral neighbor
    ///
    /// Survivors return to the home pool either way. Victory captures the
    /// territory and awards its stores; defeat grinds the garrison down by
    /// the defender's losses.
    pub fn resolve_player_attack(&mut self, target: TerritoryId) -> Result<CombatOutcome> {
        let territory = self
            .map
            .get(target)
            .ok_or(SimError::UnknownTerritory(target))?;
        if territory.owner.is_some() {
            return Err(SimError::TerritoryNotNeutral(target));
        }
        if !self.map.borders_player_land(target, self.player.id) {
            return Err(SimError::TargetNotAdjacent(target));
        }
        if self.player.attacking_units().is_empty() {
            return Err(SimError::EmptyAttackForce);
        }

        let mods = self.player.race_modifiers();
        if self.debug_enabled() {
            let att = combat::attack_strength(self.player.attacking_units(), Some(&mods));
            let def = combat::defense_strength(&territory.garrison, territory.base_defense);
            tracing::debug!(territory = target.0, att, def, "resolving player attack");
        }

        let outcome = combat::resolve_attack(
            self.player.attacking_units(),
            Some(&mods),
            &territory.garrison,
            territory.base_defense,
            None,
            Some(&territory.stockpile),
            &mut self.rng,
        );

        self.player.return_survivors(&outcome.survivors);

        if outcome.victory {
            self.map.capture(target, self.player.id);
            if let Some(spoils) = &outcome.captured {
                self.player.award_spoils(spoils);
            }
        } else if let Some(territory) = self.map.get_mut(target) {
            territory.garrison.apply_attrition(outcome.enemy_losses);
        }

        if self.debug_enabled() {
            tracing::debug!(
                victory = outcome.victory,
                player_losses = outcome.player_losses,
                enemy_losses = outcome.enemy_losses,
                "player attack resolved"
            );
        }

        Ok(outcome)
    }

    /// Resolve a neutral territory's assault on the player's home ground
    ///
    /// The home pool becomes the surviving stack. A successful defense
    /// grinds the attacker's garrison down; a failed one costs the player
    /// the home territory, falling back to the next held one.
    pub fn resolve_autonomous_attack(&mut self, attacker: TerritoryId) -> Result<CombatOutcome> {
        let territory = self
            .map
            .get(attacker)
            .ok_or(SimError::UnknownTerritory(attacker))?;
        if territory.owner.is_some() {
            return Err(SimError::TerritoryNotNeutral(attacker));
        }
        let home_id = self
            .player
            .current_territory()
            .ok_or(SimError::NoHomeTerritory)?;
        let home = self
            .map
            .get(home_id)
            .ok_or(SimError::UnknownTerritory(home_id))?;

        let mods = self.player.race_modifiers();
        if self.debug_enabled() {
            let att = combat::attack_strength(&territory.garrison, None);
            let def = combat::defense_strength(self.player.units(), home.base_defense);
            tracing::debug!(attacker = attacker.0, att, def, "resolving enemy attack");
        }

        let outcome = combat::resolve_attack(
            &territory.garrison,
            None,
            self.player.units(),
            home.base_defense,
            Some(&mods),
            None,
            &mut self.rng,
        );

        *self.player.units_mut() = outcome.survivors.clone();

        if outcome.victory {
            if let Some(territory) = self.map.get_mut(attacker) {
                territory.garrison.apply_attrition(outcome.enemy_losses);
            }
        } else {
            self.map.lose(home_id);
            self.player
                .set_current_territory(self.map.first_player_territory(self.player.id));
        }

        if self.debug_enabled() {
            tracing::debug!(
                held = outcome.victory,
                player_losses = outcome.player_losses,
                enemy_losses = outcome.enemy_losses,
                "enemy attack resolved"
            );
        }

        Ok(outcome)
    }

    /// Roll for today's autonomous attack
    pub fn maybe_trigger_enemy_attack(&mut self) -> Option<TerritoryId> {
        targeting::maybe_trigger_enemy_attack(
            &self.map,
            self.player.id,
            self.difficulty,
            &mut self.rng,
        )
    }

    /// Draw a random event without applying it
    pub fn draw_random_event(&mut self) -> &Event {
        self.events.draw(self.difficulty, &mut self.rng)
    }

    /// Draw a random event and invoke its effect on the player
    pub fn apply_random_event(&mut self) -> &Event {
        let event = self.events.draw(self.difficulty, &mut self.rng);
        event.apply(&mut self.player);

        if self.verbosity == Verbosity::Verbose {
            tracing::debug!(event = %event.name, "event applied");
        }

        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UnitKind;

    fn session() -> Session {
        Session::new(SessionConfig {
            race: Race::Human,
            difficulty: Difficulty::Easy,
            seed: 42,
            verbosity: Verbosity::Quiet,
        })
    }

    #[test]
    fn test_new_session_seats_the_player() {
        let s = session();
        let start = s.map().start();
        assert_eq!(s.map().get(start).unwrap().owner, Some(s.player().id));
        assert_eq!(s.player().current_territory(), Some(start));
    }

    #[test]
    fn test_attack_unknown_territory_rejected() {
        let mut s = session();
        s.player_mut().units_mut().add(UnitKind::HumanSoldier, 5);
        s.player_mut().commit_to_attack(UnitKind::HumanSoldier, 5);
        let err = s.resolve_player_attack(TerritoryId(999)).unwrap_err();
        assert!(matches!(err, SimError::UnknownTerritory(TerritoryId(999))));
    }

    #[test]
    fn test_attack_owned_territory_rejected() {
        let mut s = session();
        let start = s.map().start();
        let err = s.resolve_player_attack(start).unwrap_err();
        assert!(matches!(err, SimError::TerritoryNotNeutral(_)));
    }

    #[test]
    fn test_attack_distant_territory_rejected() {
        let mut s = session();
        s.player_mut().units_mut().add(UnitKind::HumanSoldier, 5);
        s.player_mut().commit_to_attack(UnitKind::HumanSoldier, 5);
        // Territory 25 is the far corner of the easy map.
        let err = s.resolve_player_attack(TerritoryId(25)).unwrap_err();
        assert!(matches!(err, SimError::TargetNotAdjacent(_)));
    }

    #[test]
    fn test_attack_without_committed_units_rejected() {
        let mut s = session();
        let err = s.resolve_player_attack(TerritoryId(2)).unwrap_err();
        assert!(matches!(err, SimError::EmptyAttackForce));
    }

    #[test]
    fn test_autonomous_attack_from_owned_territory_rejected() {
        let mut s = session();
        let start = s.map().start();
        let err = s.resolve_autonomous_attack(start).unwrap_err();
        assert!(matches!(err, SimError::TerritoryNotNeutral(_)));
    }

    #[test]
    fn test_autonomous_attack_without_home_rejected() {
        let mut s = session();
        s.player_mut().set_current_territory(None);
        let err = s.resolve_autonomous_attack(TerritoryId(2)).unwrap_err();
        assert!(matches!(err, SimError::NoHomeTerritory));
    }

    #[test]
    fn test_draw_and_apply_events_are_deterministic_per_seed() {
        let names: Vec<String> = {
            let mut s = session();
            (0..10)
                .map(|_| s.apply_random_event().name.clone())
                .collect()
        };
        let replay: Vec<String> = {
            let mut s = session();
            (0..10)
                .map(|_| s.apply_random_event().name.clone())
                .collect()
        };
        assert_eq!(names, replay);
    }
}
