//! Resource ledger: stone, wood and gold with storage caps

use serde::{Deserialize, Serialize};

use crate::catalog::Difficulty;

/// Three independent resource counters plus their storage caps
///
/// Caps only constrain `add_with_limit`; conquest spoils bypass them. Open
/// ledgers (territory stores, loot) carry zero caps and are used as raw
/// tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stockpile {
    pub stone: u32,
    pub wood: u32,
    pub gold: u32,
    pub max_stone: u32,
    pub max_wood: u32,
    pub max_gold: u32,
}

impl Stockpile {
    /// Uncapped ledger
    pub fn open(stone: u32, wood: u32, gold: u32) -> Self {
        Self {
            stone,
            wood,
            gold,
            max_stone: 0,
            max_wood: 0,
            max_gold: 0,
        }
    }

    pub fn capped(stone: u32, wood: u32, gold: u32, max_stone: u32, max_wood: u32, max_gold: u32) -> Self {
        Self {
            stone,
            wood,
            gold,
            max_stone,
            max_wood,
            max_gold,
        }
    }

    /// Starting ledger for a new player
    pub fn starting(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::capped(300, 300, 200, 1000, 1000, 1000),
            Difficulty::Normal => Self::capped(200, 200, 150, 500, 500, 500),
            Difficulty::Hard => Self::capped(150, 150, 100, 300, 300, 300),
        }
    }

    /// Add without cap checks; conquest spoils may overflow storage
    pub fn add(&mut self, other: &Stockpile) {
        self.stone += other.stone;
        self.wood += other.wood;
        self.gold += other.gold;
    }

    /// Add, clamping each counter to its cap
    pub fn add_with_limit(&mut self, stone: u32, wood: u32, gold: u32) {
        self.stone = (self.stone + stone).min(self.max_stone);
        self.wood = (self.wood + wood).min(self.max_wood);
        self.gold = (self.gold + gold).min(self.max_gold);
    }

    /// Subtract, saturating at zero
    pub fn subtract(&mut self, stone: u32, wood: u32, gold: u32) {
        self.stone = self.stone.saturating_sub(stone);
        self.wood = self.wood.saturating_sub(wood);
        self.gold = self.gold.saturating_sub(gold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_values_by_difficulty() {
        let easy = Stockpile::starting(Difficulty::Easy);
        assert_eq!((easy.stone, easy.wood, easy.gold), (300, 300, 200));
        assert_eq!(easy.max_gold, 1000);

        let hard = Stockpile::starting(Difficulty::Hard);
        assert_eq!((hard.stone, hard.wood, hard.gold), (150, 150, 100));
        assert_eq!(hard.max_stone, 300);
    }

    #[test]
    fn test_add_with_limit_clamps_to_caps() {
        let mut pile = Stockpile::capped(450, 0, 0, 500, 500, 500);
        pile.add_with_limit(100, 0, 0);
        assert_eq!(pile.stone, 500);
    }

    #[test]
    fn test_spoils_bypass_caps() {
        let mut pile = Stockpile::capped(450, 0, 0, 500, 500, 500);
        pile.add(&Stockpile::open(100, 0, 0));
        assert_eq!(pile.stone, 550);
    }

    #[test]
    fn test_subtract_saturates() {
        let mut pile = Stockpile::open(10, 10, 10);
        pile.subtract(30, 5, 10);
        assert_eq!((pile.stone, pile.wood, pile.gold), (0, 5, 0));
    }
}
