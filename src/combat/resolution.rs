//! Combat resolution
//!
//! One uniform draw decides the battle; everything else is deterministic
//! given the two sides' strengths. Casualty fractions are asymmetric per
//! branch and the constants are part of the balance - do not retune them.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::RaceModifiers;
use crate::combat::stack::UnitStack;
use crate::player::Stockpile;

/// Result of a resolved battle, seen from the player's side
#[derive(Debug, Clone)]
pub struct CombatOutcome {
    /// Did the player's side prevail?
    pub victory: bool,
    /// Units lost on the player's side
    pub player_losses: u32,
    /// Units lost on the opposing side
    pub enemy_losses: u32,
    /// Surviving units on the player's side
    pub survivors: UnitStack,
    /// Spoils taken from the defender, present only on a conquering victory
    pub captured: Option<Stockpile>,
}

/// Offensive strength of a stack
///
/// Each kind contributes (attack + magic) * count, scaled by the race's
/// strength multiplier for martial kinds and its magic multiplier for
/// caster kinds, truncated per kind. No modifiers means a bare sum.
pub fn attack_strength(units: &UnitStack, mods: Option<&RaceModifiers>) -> i64 {
    let mut strength = 0i64;

    for (kind, count) in units.iter() {
        let stats = kind.stats();
        let base = (stats.attack_power + stats.magic_power) * count as i64;

        let scaled = match mods {
            Some(m) => {
                let multiplier = if stats.attack_power > stats.magic_power {
                    m.strength
                } else {
                    m.magic
                };
                (base as f64 * multiplier) as i64
            }
            None => base,
        };

        strength += scaled;
    }

    strength
}

/// Defensive strength of a stack holding a position
pub fn defense_strength(units: &UnitStack, base_defense: i64) -> i64 {
    let mut strength = base_defense;

    for (kind, count) in units.iter() {
        strength += kind.stats().defense * count as i64;
    }

    strength
}

/// Probability that the side with `for_strength` prevails
///
/// Strictly increasing in `for_strength`, strictly decreasing in
/// `against_strength`. Callers guarantee a positive total.
pub fn win_probability(for_strength: i64, against_strength: i64) -> f64 {
    for_strength as f64 / (for_strength + against_strength) as f64
}

/// Resolve an attack
///
/// `defender_mods` present means the player is the one defending (an
/// autonomous attack on the player's home ground): the defense total is
/// scaled by the race's defense multiplier and the roll is taken from the
/// defender's perspective. `spoils` is the defending territory's stockpile,
/// cloned into the outcome only when the player conquers.
///
/// When both strengths are zero the attack fizzles: the defending side
/// holds, nobody falls, and the player-side stack is returned unchanged.
pub fn resolve_attack(
    attacker_units: &UnitStack,
    attacker_mods: Option<&RaceModifiers>,
    defender_units: &UnitStack,
    defender_base_defense: i64,
    defender_mods: Option<&RaceModifiers>,
    spoils: Option<&Stockpile>,
    rng: &mut ChaCha8Rng,
) -> CombatOutcome {
    let att = attack_strength(attacker_units, attacker_mods);
    let def = match defender_mods {
        Some(m) => (defense_strength(defender_units, defender_base_defense) as f64 * m.defense) as i64,
        None => defense_strength(defender_units, defender_base_defense),
    };

    let player_defends = defender_mods.is_some();

    if att + def == 0 {
        let standing = if player_defends {
            defender_units.clone()
        } else {
            attacker_units.clone()
        };
        return CombatOutcome {
            victory: player_defends,
            player_losses: 0,
            enemy_losses: 0,
            survivors: standing,
            captured: None,
        };
    }

    let total = (att + def) as f64;
    let roll: f64 = rng.gen();

    if player_defends {
        // Territory assaults the player's home ground.
        let victory = roll < win_probability(def, att);

        let (player_fraction, enemy_losses) = if victory {
            let enemy_fraction = 0.7 + (0.2 * def as f64 / total);
            (
                0.2 + (0.3 * att as f64 / total),
                (attacker_units.total() as f64 * enemy_fraction) as u32,
            )
        } else {
            (
                0.5 + (0.3 * att as f64 / total),
                (attacker_units.total() as f64 * 0.4) as u32,
            )
        };

        CombatOutcome {
            victory,
            player_losses: (defender_units.total() as f64 * player_fraction) as u32,
            enemy_losses,
            survivors: defender_units.surviving(player_fraction),
            captured: None,
        }
    } else {
        // Player assaults a territory.
        let victory = roll < win_probability(att, def);

        let (player_fraction, enemy_losses, captured) = if victory {
            // All defenders are lost.
            (
                0.3 + (0.4 * def as f64 / total),
                defender_units.total(),
                spoils.cloned(),
            )
        } else {
            (
                0.6 + (0.2 * def as f64 / total),
                (defender_units.total() as f64 * 0.3) as u32,
                None,
            )
        };

        CombatOutcome {
            victory,
            player_losses: (attacker_units.total() as f64 * player_fraction) as u32,
            enemy_losses,
            survivors: attacker_units.surviving(player_fraction),
            captured,
        }
    }
}
