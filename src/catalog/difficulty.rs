//! Difficulty levels and their tuning parameters

use serde::{Deserialize, Serialize};

/// Difficulty enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

/// Tuning parameters for a difficulty level
#[derive(Debug, Clone, Copy)]
pub struct DifficultyParams {
    /// Scales resource income for the player
    pub resource_multiplier: f64,
    /// Scales auto-generated garrison sizes
    pub enemy_strength_multiplier: f64,
    /// Per-day base chance that one frontier territory attacks
    pub enemy_attack_chance: f64,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Bambik",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Realism",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "More resources, weaker enemies",
            Difficulty::Normal => "Balanced gameplay",
            Difficulty::Hard => "Limited resources, stronger enemies",
        }
    }

    /// Tuning parameters for this difficulty
    pub fn params(&self) -> DifficultyParams {
        match self {
            Difficulty::Easy => DifficultyParams {
                resource_multiplier: 1.5,
                enemy_strength_multiplier: 0.7,
                enemy_attack_chance: 0.1,
            },
            Difficulty::Normal => DifficultyParams {
                resource_multiplier: 1.0,
                enemy_strength_multiplier: 1.0,
                enemy_attack_chance: 0.15,
            },
            Difficulty::Hard => DifficultyParams {
                resource_multiplier: 0.7,
                enemy_strength_multiplier: 1.3,
                enemy_attack_chance: 0.2,
            },
        }
    }

    /// Map dimensions (width, height) for this difficulty
    pub fn grid_size(&self) -> (u32, u32) {
        match self {
            Difficulty::Easy => (5, 5),
            Difficulty::Normal => (6, 6),
            Difficulty::Hard => (7, 7),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_is_harder() {
        let easy = Difficulty::Easy.params();
        let hard = Difficulty::Hard.params();
        assert!(hard.enemy_strength_multiplier > easy.enemy_strength_multiplier);
        assert!(hard.enemy_attack_chance > easy.enemy_attack_chance);
        assert!(hard.resource_multiplier < easy.resource_multiplier);
    }

    #[test]
    fn test_grid_grows_with_difficulty() {
        assert_eq!(Difficulty::Easy.grid_size(), (5, 5));
        assert_eq!(Difficulty::Normal.grid_size(), (6, 6));
        assert_eq!(Difficulty::Hard.grid_size(), (7, 7));
    }
}
