//! Unit kinds and their combat statistics
//!
//! Three kinds per race, ordered by tier: the roster index is the tier used
//! when garrisons are auto-generated.

use serde::{Deserialize, Serialize};

use crate::catalog::race::Race;

/// Kind of combat unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    // Human units
    HumanSoldier,
    HumanArcher,
    HumanKnight,

    // Elf units
    ElfScout,
    ElfArcher,
    ElfMage,

    // Orc units
    OrcGrunt,
    OrcRaider,
    OrcShaman,
}

/// Combat statistics for a unit kind
#[derive(Debug, Clone, Copy)]
pub struct UnitStats {
    pub attack_power: i64,
    pub magic_power: i64,
    pub defense: i64,
    pub race: Race,
}

impl UnitKind {
    pub fn name(&self) -> &'static str {
        match self {
            UnitKind::HumanSoldier => "Soldier",
            UnitKind::HumanArcher => "Archer",
            UnitKind::HumanKnight => "Knight",
            UnitKind::ElfScout => "Scout",
            UnitKind::ElfArcher => "Archer",
            UnitKind::ElfMage => "Mage",
            UnitKind::OrcGrunt => "Grunt",
            UnitKind::OrcRaider => "Raider",
            UnitKind::OrcShaman => "Shaman",
        }
    }

    /// Combat statistics for this kind
    pub fn stats(&self) -> UnitStats {
        match self {
            UnitKind::HumanSoldier => UnitStats {
                attack_power: 10,
                magic_power: 2,
                defense: 5,
                race: Race::Human,
            },
            UnitKind::HumanArcher => UnitStats {
                attack_power: 7,
                magic_power: 7,
                defense: 3,
                race: Race::Human,
            },
            UnitKind::HumanKnight => UnitStats {
                attack_power: 20,
                magic_power: 5,
                defense: 15,
                race: Race::Human,
            },
            UnitKind::ElfScout => UnitStats {
                attack_power: 5,
                magic_power: 5,
                defense: 7,
                race: Race::Elf,
            },
            UnitKind::ElfArcher => UnitStats {
                attack_power: 5,
                magic_power: 15,
                defense: 3,
                race: Race::Elf,
            },
            UnitKind::ElfMage => UnitStats {
                attack_power: 3,
                magic_power: 25,
                defense: 5,
                race: Race::Elf,
            },
            UnitKind::OrcGrunt => UnitStats {
                attack_power: 15,
                magic_power: 0,
                defense: 10,
                race: Race::Orc,
            },
            UnitKind::OrcRaider => UnitStats {
                attack_power: 20,
                magic_power: 0,
                defense: 5,
                race: Race::Orc,
            },
            UnitKind::OrcShaman => UnitStats {
                attack_power: 10,
                magic_power: 15,
                defense: 5,
                race: Race::Orc,
            },
        }
    }

    pub fn race(&self) -> Race {
        self.stats().race
    }

    /// The three kinds fielded by a race, ordered basic to advanced
    pub fn roster(race: Race) -> [UnitKind; 3] {
        match race {
            Race::Human => [
                UnitKind::HumanSoldier,
                UnitKind::HumanArcher,
                UnitKind::HumanKnight,
            ],
            Race::Elf => [UnitKind::ElfScout, UnitKind::ElfArcher, UnitKind::ElfMage],
            Race::Orc => [UnitKind::OrcGrunt, UnitKind::OrcRaider, UnitKind::OrcShaman],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_matches_race() {
        for race in Race::ALL {
            for kind in UnitKind::roster(race) {
                assert_eq!(kind.race(), race);
            }
        }
    }

    #[test]
    fn test_roster_tiers_escalate() {
        // The advanced kind always outclasses the basic kind in total output.
        for race in Race::ALL {
            let [basic, _, advanced] = UnitKind::roster(race);
            let b = basic.stats();
            let a = advanced.stats();
            assert!(a.attack_power + a.magic_power > b.attack_power + b.magic_power);
        }
    }

    #[test]
    fn test_mage_is_caster() {
        let stats = UnitKind::ElfMage.stats();
        assert!(stats.magic_power > stats.attack_power);
    }

    #[test]
    fn test_grunt_has_no_magic() {
        assert_eq!(UnitKind::OrcGrunt.stats().magic_power, 0);
    }
}
