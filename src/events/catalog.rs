//! The standard event catalog
//!
//! One concrete effect type per behavior; narrative-only events share the
//! inert effect.

use crate::events::{Event, EventDeck, EventEffect};
use crate::player::Player;

/// Cap-clamped resource windfall
pub struct GrantResources {
    pub stone: u32,
    pub wood: u32,
    pub gold: u32,
}

impl EventEffect for GrantResources {
    fn apply(&self, player: &mut Player) {
        player
            .stockpile
            .add_with_limit(self.stone, self.wood, self.gold);
    }
}

/// Resource theft, saturating at empty stores
pub struct PlunderResources {
    pub stone: u32,
    pub wood: u32,
    pub gold: u32,
}

impl EventEffect for PlunderResources {
    fn apply(&self, player: &mut Player) {
        player.stockpile.subtract(self.stone, self.wood, self.gold);
    }
}

/// Every kind in the home pool loses a tenth, at least one unit
pub struct Epidemic;

impl EventEffect for Epidemic {
    fn apply(&self, player: &mut Player) {
        let pool = player.units_mut();
        for kind in pool.kinds() {
            let count = pool.count(kind);
            let losses = (count / 10).max(1);
            pool.set(kind, count.saturating_sub(losses));
        }
    }
}

/// Narrative-only event, no mechanical effect
pub struct NoEffect;

impl EventEffect for NoEffect {
    fn apply(&self, _player: &mut Player) {}
}

/// The eight stock events, three beneficial, two neutral, three harmful
pub fn standard_deck() -> EventDeck {
    let beneficial = vec![
        Event::new(
            "Gold Discovery",
            "Your miners have discovered a rich gold vein!",
            "You gained 100 gold.",
            Box::new(GrantResources {
                stone: 0,
                wood: 0,
                gold: 100,
            }),
        ),
        Event::new(
            "Wandering Merchant",
            "A merchant caravan visits your village offering rare goods at discount prices.",
            "Your next building upgrade will be 20% cheaper.",
            Box::new(NoEffect),
        ),
        Event::new(
            "Skilled Craftsmen",
            "A group of skilled craftsmen joins your village.",
            "You gained 50 stone, 50 wood, and 30 gold.",
            Box::new(GrantResources {
                stone: 50,
                wood: 50,
                gold: 30,
            }),
        ),
    ];

    let neutral = vec![
        Event::new(
            "Traveling Bard",
            "A bard visits your village, sharing tales of distant lands.",
            "Your villagers' morale improves, but there's no tangible benefit.",
            Box::new(NoEffect),
        ),
        Event::new(
            "Strange Weather",
            "Unusual weather patterns have been observed lately.",
            "The weather eventually returns to normal with no lasting consequences.",
            Box::new(NoEffect),
        ),
    ];

    let harmful = vec![
        Event::new(
            "Bandit Raid",
            "A small group of bandits has raided your supply stores!",
            "You lost some resources to the bandits.",
            Box::new(PlunderResources {
                stone: 30,
                wood: 30,
                gold: 20,
            }),
        ),
        Event::new(
            "Disease Outbreak",
            "A disease has spread among your village!",
            "Some of your units have fallen ill and died.",
            Box::new(Epidemic),
        ),
        Event::new(
            "Supply Shortage",
            "A supply chain disruption has affected your resource production!",
            "Your resource production will be reduced today.",
            Box::new(NoEffect),
        ),
    ];

    EventDeck {
        beneficial,
        neutral,
        harmful,
    }
}
