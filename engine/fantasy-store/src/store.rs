//! The `FantasyStore` trait - query shapes the engine requires from storage

use crate::Result;
use chrono::{DateTime, Utc};
use fantasy_core::{
    Competition, CompetitionId, GameResult, MatchOutcome, OutcomeId, Owner, OwnerId, Player,
    PlayerId, Roster, RosterId,
};
use serde::{Deserialize, Serialize};

/// A parsed outcome record not yet assigned a store identity
///
/// This is the shape the outcome feed hands over after parsing; the store
/// allocates the id and the `processed` flag starts false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOutcome {
    pub competition_id: CompetitionId,
    pub white_id: PlayerId,
    pub black_id: PlayerId,
    pub result: GameResult,
    pub occurred_at: DateTime<Utc>,
}

/// Abstract repository surface for the fantasy engine
///
/// Implementations must make the market operations (`acquire_player`,
/// `dispose_player`, `set_captain`) transactional: precondition checks and
/// both effects commit as one atomic unit or not at all.
#[async_trait::async_trait]
pub trait FantasyStore: Send + Sync {
    // -- players --

    /// Fetch a player by id
    async fn player(&self, id: PlayerId) -> Result<Player>;

    /// Fetch every player in the pool
    async fn players(&self) -> Result<Vec<Player>>;

    /// Insert a player into the pool
    async fn insert_player(&self, player: Player) -> Result<()>;

    /// Persist a recomputed current price
    async fn set_player_price(&self, id: PlayerId, price: i64) -> Result<()>;

    /// Persist a recomputed average fantasy points value
    async fn set_player_average(&self, id: PlayerId, average: f64) -> Result<()>;

    // -- outcomes --

    /// Insert a new unprocessed outcome, returning its allocated id
    async fn insert_outcome(&self, outcome: NewOutcome) -> Result<OutcomeId>;

    /// Whether an identical outcome already exists (feed de-duplication)
    async fn outcome_exists(
        &self,
        competition_id: CompetitionId,
        white_id: PlayerId,
        black_id: PlayerId,
        result: GameResult,
    ) -> Result<bool>;

    /// Unprocessed outcomes for a competition, in insertion order
    async fn unprocessed_outcomes(
        &self,
        competition_id: CompetitionId,
    ) -> Result<Vec<MatchOutcome>>;

    /// Up to `limit` processed outcomes involving a player, most recent
    /// first (occurrence time descending, outcome id descending)
    async fn recent_processed(&self, player_id: PlayerId, limit: usize)
        -> Result<Vec<MatchOutcome>>;

    /// Every processed outcome involving a player, oldest first
    /// (occurrence time ascending, outcome id ascending)
    async fn processed_history(&self, player_id: PlayerId) -> Result<Vec<MatchOutcome>>;

    /// Mark an outcome processed; the flag transitions one way only and
    /// re-marking is a no-op
    async fn mark_processed(&self, outcome_id: OutcomeId) -> Result<()>;

    // -- rosters --

    /// Fetch a roster by id
    async fn roster(&self, id: RosterId) -> Result<Roster>;

    /// Create an empty roster, returning its allocated id
    async fn insert_roster(
        &self,
        owner_id: OwnerId,
        competition_id: CompetitionId,
    ) -> Result<RosterId>;

    /// Rosters in a competition currently holding the given player
    async fn rosters_holding(
        &self,
        competition_id: CompetitionId,
        player_id: PlayerId,
    ) -> Result<Vec<Roster>>;

    /// All rosters belonging to an owner
    async fn rosters_for_owner(&self, owner_id: OwnerId) -> Result<Vec<Roster>>;

    /// Atomically add a (possibly negative) point delta to a roster total
    async fn add_roster_points(&self, roster_id: RosterId, delta: i64) -> Result<()>;

    // -- owners --

    /// Fetch an owner by id
    async fn owner(&self, id: OwnerId) -> Result<Owner>;

    /// Fetch every owner
    async fn owners(&self) -> Result<Vec<Owner>>;

    /// Insert an owner
    async fn insert_owner(&self, owner: Owner) -> Result<()>;

    /// Persist a recomputed aggregate point total
    async fn set_owner_total(&self, owner_id: OwnerId, total: i64) -> Result<()>;

    // -- competitions --

    /// Insert a competition
    async fn insert_competition(&self, competition: Competition) -> Result<()>;

    /// Competitions currently active (the scheduler's work list)
    async fn active_competitions(&self) -> Result<Vec<Competition>>;

    // -- transactional market operations --

    /// Atomically add a player to a roster and debit the owner's budget by
    /// the player's current price, returning the amount debited
    ///
    /// Fails with `InsufficientFunds`, `RosterFull`, or `DuplicateHolding`
    /// (or a not-found variant) with neither effect applied.
    async fn acquire_player(
        &self,
        owner_id: OwnerId,
        roster_id: RosterId,
        player_id: PlayerId,
    ) -> Result<i64>;

    /// Atomically remove a player from a roster and credit the owner's
    /// budget with the refund (80% of current price, floored), returning
    /// the amount credited
    ///
    /// Fails with `NotHeld` if the roster does not hold the player. Clears
    /// the captain designation when the disposed player was captain.
    async fn dispose_player(
        &self,
        owner_id: OwnerId,
        roster_id: RosterId,
        player_id: PlayerId,
    ) -> Result<i64>;

    /// Set or clear a roster's captain; fails with `InvalidCaptain` when
    /// the player is not currently held
    async fn set_captain(&self, roster_id: RosterId, captain: Option<PlayerId>) -> Result<()>;
}
