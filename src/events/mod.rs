//! Random events that perturb player state
//!
//! The deck only selects and invokes: event contents, including their
//! effects, are supplied by the catalog (or by the caller, for custom
//! decks).

pub mod catalog;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::Difficulty;
use crate::core::error::{Result, SimError};
use crate::player::Player;

/// An injected event behavior, applied to mutable player state
pub trait EventEffect: Send + Sync {
    fn apply(&self, player: &mut Player);
}

/// Event tier, from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTier {
    Beneficial,
    Neutral,
    Harmful,
}

/// A single random event
pub struct Event {
    pub name: String,
    pub description: String,
    pub effect_description: String,
    effect: Box<dyn EventEffect>,
}

impl Event {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        effect_description: impl Into<String>,
        effect: Box<dyn EventEffect>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            effect_description: effect_description.into(),
            effect,
        }
    }

    /// Invoke the event's effect capability
    pub fn apply(&self, player: &mut Player) {
        self.effect.apply(player);
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("effect", &self.effect_description)
            .finish()
    }
}

/// Three fixed tiers of events, drawn with difficulty-dependent odds
pub struct EventDeck {
    beneficial: Vec<Event>,
    neutral: Vec<Event>,
    harmful: Vec<Event>,
}

impl EventDeck {
    /// Build a deck; every tier must hold at least one event
    pub fn new(beneficial: Vec<Event>, neutral: Vec<Event>, harmful: Vec<Event>) -> Result<Self> {
        if beneficial.is_empty() {
            return Err(SimError::EmptyEventTier("beneficial"));
        }
        if neutral.is_empty() {
            return Err(SimError::EmptyEventTier("neutral"));
        }
        if harmful.is_empty() {
            return Err(SimError::EmptyEventTier("harmful"));
        }
        Ok(Self {
            beneficial,
            neutral,
            harmful,
        })
    }

    /// The standard deck shipped with the simulation
    pub fn standard() -> Self {
        catalog::standard_deck()
    }

    fn tier(&self, tier: EventTier) -> &[Event] {
        match tier {
            EventTier::Beneficial => &self.beneficial,
            EventTier::Neutral => &self.neutral,
            EventTier::Harmful => &self.harmful,
        }
    }

    /// Draw one event: a tier roll, then a uniform pick within the tier
    pub fn draw(&self, difficulty: Difficulty, rng: &mut ChaCha8Rng) -> &Event {
        let tier = self.tier(tier_for_roll(difficulty, rng.gen()));
        &tier[rng.gen_range(0..tier.len())]
    }
}

/// Map a uniform roll onto a tier via the difficulty's cumulative odds
fn tier_for_roll(difficulty: Difficulty, roll: f64) -> EventTier {
    let (beneficial, neutral) = match difficulty {
        Difficulty::Easy => (0.6, 0.3),
        Difficulty::Normal => (0.4, 0.3),
        Difficulty::Hard => (0.2, 0.3),
    };

    if roll < beneficial {
        EventTier::Beneficial
    } else if roll < beneficial + neutral {
        EventTier::Neutral
    } else {
        EventTier::Harmful
    }
}
