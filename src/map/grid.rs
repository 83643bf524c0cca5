//! World map: grid construction, adjacency and ownership queries

use std::collections::{BTreeMap, BTreeSet};

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Difficulty;
use crate::core::types::{PlayerId, TerritoryId};
use crate::map::territory::Territory;
use crate::player::Player;

/// The territory registry: a rectangular grid with von Neumann adjacency
///
/// Ids are 1-based and row-major; the player start is always id 1 in the
/// top-left corner. The registry is ordered so iteration - and therefore
/// the rng draw sequence during generation - is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldMap {
    territories: BTreeMap<TerritoryId, Territory>,
    width: u32,
    height: u32,
    start: TerritoryId,
}

impl WorldMap {
    /// Build the grid for a difficulty and garrison every non-start cell
    pub fn generate(difficulty: Difficulty, rng: &mut ChaCha8Rng) -> Self {
        let (width, height) = difficulty.grid_size();
        let start = TerritoryId(1);

        let mut territories = BTreeMap::new();
        for y in 0..height {
            for x in 0..width {
                let id = TerritoryId(y * width + x + 1);
                let territory = Territory::new(
                    id,
                    format!("Territory {}", id),
                    neighbor_ids(x, y, width, height),
                    rng,
                );
                territories.insert(id, territory);
            }
        }

        // Garrisons scale with graph distance from the start cell.
        for (id, territory) in territories.iter_mut() {
            if *id != start {
                let distance = manhattan(start, *id, width);
                territory.setup_garrison(difficulty, distance, rng);
            }
        }

        tracing::debug!(width, height, "world map generated");

        Self {
            territories,
            width,
            height,
            start,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn start(&self) -> TerritoryId {
        self.start
    }

    pub fn territory_count(&self) -> usize {
        self.territories.len()
    }

    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(&id)
    }

    pub fn get_mut(&mut self, id: TerritoryId) -> Option<&mut Territory> {
        self.territories.get_mut(&id)
    }

    pub fn territories(&self) -> impl Iterator<Item = &Territory> {
        self.territories.values()
    }

    /// Manhattan distance between two territories
    pub fn distance(&self, a: TerritoryId, b: TerritoryId) -> u32 {
        manhattan(a, b, self.width)
    }

    /// Hand a territory to the player, disbanding its garrison
    pub fn capture(&mut self, id: TerritoryId, player: PlayerId) {
        if let Some(territory) = self.territories.get_mut(&id) {
            territory.capture(Some(player));
        }
    }

    /// Return a territory to neutral hands, disbanding its garrison
    pub fn lose(&mut self, id: TerritoryId) {
        if let Some(territory) = self.territories.get_mut(&id) {
            territory.capture(None);
        }
    }

    /// Seat the player on the start territory
    pub fn place_player(&mut self, player: &mut Player) {
        self.capture(self.start, player.id);
        player.set_current_territory(Some(self.start));
    }

    pub fn player_territory_count(&self, player: PlayerId) -> usize {
        self.territories
            .values()
            .filter(|t| t.owner == Some(player))
            .count()
    }

    pub fn is_conquered(&self, player: PlayerId) -> bool {
        self.player_territory_count(player) == self.territories.len()
    }

    /// Lowest-id territory the player still holds, if any
    pub fn first_player_territory(&self, player: PlayerId) -> Option<TerritoryId> {
        self.territories
            .values()
            .find(|t| t.owner == Some(player))
            .map(|t| t.id)
    }

    /// Does this territory border any player-owned land?
    pub fn borders_player_land(&self, id: TerritoryId, player: PlayerId) -> bool {
        let Some(territory) = self.territories.get(&id) else {
            return false;
        };
        territory.adjacent().iter().any(|adj| {
            self.territories
                .get(adj)
                .is_some_and(|t| t.owner == Some(player))
        })
    }

    /// Distinct neutral territories adjacent to player land
    ///
    /// Computed live from the registry on every call.
    pub fn frontier_neutrals(&self, player: PlayerId) -> BTreeSet<TerritoryId> {
        let mut frontier = BTreeSet::new();
        for territory in self.territories.values() {
            if territory.owner != Some(player) {
                continue;
            }
            for adj in territory.adjacent() {
                if let Some(neighbor) = self.territories.get(adj) {
                    if neighbor.owner.is_none() {
                        frontier.insert(neighbor.id);
                    }
                }
            }
        }
        frontier
    }

    /// Every (player territory -> neutral neighbor) adjacency edge
    ///
    /// Deliberately not deduplicated: a neutral territory touching more
    /// player land appears more often, and random selection over this list
    /// is weighted accordingly.
    pub fn frontier_edges(&self, player: PlayerId) -> Vec<TerritoryId> {
        let mut edges = Vec::new();
        for territory in self.territories.values() {
            if territory.owner != Some(player) {
                continue;
            }
            for adj in territory.adjacent() {
                if let Some(neighbor) = self.territories.get(adj) {
                    if neighbor.owner.is_none() {
                        edges.push(neighbor.id);
                    }
                }
            }
        }
        edges
    }
}

/// Orthogonal neighbors that exist, in up/right/down/left order
fn neighbor_ids(x: u32, y: u32, width: u32, height: u32) -> Vec<TerritoryId> {
    let mut adjacent = Vec::new();
    if y > 0 {
        adjacent.push(TerritoryId((y - 1) * width + x + 1));
    }
    if x < width - 1 {
        adjacent.push(TerritoryId(y * width + x + 2));
    }
    if y < height - 1 {
        adjacent.push(TerritoryId((y + 1) * width + x + 1));
    }
    if x > 0 {
        adjacent.push(TerritoryId(y * width + x));
    }
    adjacent
}

fn manhattan(a: TerritoryId, b: TerritoryId, width: u32) -> u32 {
    let (x1, y1) = ((a.0 - 1) % width, (a.0 - 1) / width);
    let (x2, y2) = ((b.0 - 1) % width, (b.0 - 1) / width);
    x1.abs_diff(x2) + y1.abs_diff(y2)
}
