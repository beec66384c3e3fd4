//! Error types for store operations

use fantasy_core::{CompetitionId, OutcomeId, OwnerId, PlayerId, RosterId};
use thiserror::Error;

/// Errors that can occur in a store implementation
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("owner not found: {0}")]
    OwnerNotFound(OwnerId),

    #[error("roster not found: {0}")]
    RosterNotFound(RosterId),

    #[error("outcome not found: {0}")]
    OutcomeNotFound(OutcomeId),

    #[error("competition not found: {0}")]
    CompetitionNotFound(CompetitionId),

    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: i64, available: i64 },

    #[error("roster is full (cap {cap})")]
    RosterFull { cap: usize },

    #[error("player {0} already held by roster")]
    DuplicateHolding(PlayerId),

    #[error("player {0} not held by roster")]
    NotHeld(PlayerId),

    #[error("invalid captain: player {0} not held by roster")]
    InvalidCaptain(PlayerId),
}
