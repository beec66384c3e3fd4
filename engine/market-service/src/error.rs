//! Error types for market operations

use fantasy_core::PlayerId;
use fantasy_store::StoreError;
use thiserror::Error;

/// Typed failures returned to market callers
///
/// Trading failures are never partially applied: the store commits the
/// roster change and the budget change together or not at all.
#[derive(Error, Debug)]
pub enum MarketError {
    #[error("insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: i64, available: i64 },

    #[error("roster is full (max {cap} players)")]
    RosterFull { cap: usize },

    #[error("player {0} is already in the roster")]
    DuplicateHolding(PlayerId),

    #[error("player {0} is not in the roster")]
    NotHeld(PlayerId),

    #[error("invalid captain: player {0} is not in the roster")]
    InvalidCaptain(PlayerId),

    #[error("not found: {0}")]
    NotFound(String),
}

impl From<StoreError> for MarketError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InsufficientFunds { required, available } => {
                MarketError::InsufficientFunds { required, available }
            }
            StoreError::RosterFull { cap } => MarketError::RosterFull { cap },
            StoreError::DuplicateHolding(id) => MarketError::DuplicateHolding(id),
            StoreError::NotHeld(id) => MarketError::NotHeld(id),
            StoreError::InvalidCaptain(id) => MarketError::InvalidCaptain(id),
            e @ (StoreError::PlayerNotFound(_)
            | StoreError::OwnerNotFound(_)
            | StoreError::RosterNotFound(_)
            | StoreError::OutcomeNotFound(_)
            | StoreError::CompetitionNotFound(_)) => MarketError::NotFound(e.to_string()),
        }
    }
}
