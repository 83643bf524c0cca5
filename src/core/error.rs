use thiserror::Error;

use crate::core::types::TerritoryId;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("unknown territory id: {0}")]
    UnknownTerritory(TerritoryId),

    #[error("territory {0} is not neutral")]
    TerritoryNotNeutral(TerritoryId),

    #[error("territory {0} does not border player land")]
    TargetNotAdjacent(TerritoryId),

    #[error("no units committed to the attack")]
    EmptyAttackForce,

    #[error("player has no home territory")]
    NoHomeTerritory,

    #[error("event deck has an empty {0} tier")]
    EmptyEventTier(&'static str),
}

pub type Result<T> = std::result::Result<T, SimError>;
