//! fantasy-core - Shared domain types for the gambit-exchange engine
//!
//! This crate defines the entities every service crate operates on: real
//! players, match outcomes, fantasy rosters, owners, and competitions,
//! together with the market constants the pricing and trading rules share.

pub mod types;

pub use types::{
    Competition, CompetitionStatus, GameResult, MatchOutcome, Owner, Player, Roster, Side,
};

pub use types::{CompetitionId, OutcomeId, OwnerId, PlayerId, RosterId};

pub use types::{
    HYPE_MULTIPLIER, MAX_PRICE, MIN_PRICE, ROSTER_CAP, SELL_REFUND_PERCENT, STARTING_BUDGET,
};
