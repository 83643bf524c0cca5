//! Autonomous enemy targeting
//!
//! Once per simulated day the frontier may strike back: the chance scales
//! with how many distinct neutral territories touch player land, and the
//! attacker is drawn from the raw adjacency edge list, so neutrals pressed
//! against more player territory attack more often.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::Difficulty;
use crate::core::types::{PlayerId, TerritoryId};
use crate::map::grid::WorldMap;

/// Roll for today's autonomous attack and pick the attacker, if any
pub fn maybe_trigger_enemy_attack(
    map: &WorldMap,
    player: PlayerId,
    difficulty: Difficulty,
    rng: &mut ChaCha8Rng,
) -> Option<TerritoryId> {
    let frontier = map.frontier_neutrals(player);
    let attack_chance = difficulty.params().enemy_attack_chance * frontier.len() as f64;

    if rng.gen::<f64>() >= attack_chance {
        return None;
    }

    let edges = map.frontier_edges(player);
    if edges.is_empty() {
        return None;
    }

    let attacker = edges[rng.gen_range(0..edges.len())];
    tracing::debug!(attacker = attacker.0, "frontier territory attacks");
    Some(attacker)
}
