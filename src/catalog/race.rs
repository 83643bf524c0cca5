//! Playable races and their combat modifiers

use serde::{Deserialize, Serialize};

/// Race enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Human,
    Elf,
    Orc,
}

/// Combat multipliers for a race
#[derive(Debug, Clone, Copy)]
pub struct RaceModifiers {
    pub strength: f64,
    pub magic: f64,
    pub defense: f64,
}

impl Race {
    pub const ALL: [Race; 3] = [Race::Human, Race::Elf, Race::Orc];

    pub fn name(&self) -> &'static str {
        match self {
            Race::Human => "Human",
            Race::Elf => "Elf",
            Race::Orc => "Orc",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Race::Human => "Balanced units and buildings",
            Race::Elf => "Advanced archers and magic, weaker defenses",
            Race::Orc => "Strong warriors, but slower development",
        }
    }

    /// Combat modifiers for this race
    pub fn modifiers(&self) -> RaceModifiers {
        match self {
            Race::Human => RaceModifiers {
                strength: 1.0,
                magic: 1.0,
                defense: 1.0,
            },
            Race::Elf => RaceModifiers {
                strength: 0.8,
                magic: 1.5,
                defense: 0.9,
            },
            Race::Orc => RaceModifiers {
                strength: 1.3,
                magic: 0.7,
                defense: 1.2,
            },
        }
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_is_baseline() {
        let mods = Race::Human.modifiers();
        assert_eq!(mods.strength, 1.0);
        assert_eq!(mods.magic, 1.0);
        assert_eq!(mods.defense, 1.0);
    }

    #[test]
    fn test_elf_favors_magic() {
        let mods = Race::Elf.modifiers();
        assert!(mods.magic > mods.strength);
        assert!(mods.defense < 1.0);
    }

    #[test]
    fn test_orc_favors_strength() {
        let mods = Race::Orc.modifiers();
        assert!(mods.strength > mods.magic);
        assert!(mods.defense > 1.0);
    }
}
