//! In-memory reference implementation of `FantasyStore`
//!
//! All state lives behind a single `tokio::sync::RwLock`, so the market
//! operations naturally execute as one atomic unit: precondition checks and
//! mutations happen under the same write guard.

use crate::error::StoreError;
use crate::store::{FantasyStore, NewOutcome};
use crate::Result;
use fantasy_core::{
    Competition, CompetitionId, CompetitionStatus, GameResult, MatchOutcome, OutcomeId, Owner,
    OwnerId, Player, PlayerId, Roster, RosterId, ROSTER_CAP, SELL_REFUND_PERCENT,
};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct StoreState {
    players: HashMap<PlayerId, Player>,
    // BTreeMap keyed on monotonically allocated ids keeps insertion order
    outcomes: BTreeMap<OutcomeId, MatchOutcome>,
    rosters: HashMap<RosterId, Roster>,
    owners: HashMap<OwnerId, Owner>,
    competitions: HashMap<CompetitionId, Competition>,
    next_outcome_id: OutcomeId,
    next_roster_id: RosterId,
}

impl StoreState {
    fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players.get(&id).ok_or(StoreError::PlayerNotFound(id))
    }

    fn roster_mut(&mut self, id: RosterId) -> Result<&mut Roster> {
        self.rosters.get_mut(&id).ok_or(StoreError::RosterNotFound(id))
    }

    fn owner_mut(&mut self, id: OwnerId) -> Result<&mut Owner> {
        self.owners.get_mut(&id).ok_or(StoreError::OwnerNotFound(id))
    }

    /// Processed outcomes involving a player, sorted oldest first with the
    /// outcome id as stable secondary key
    fn processed_involving(&self, player_id: PlayerId) -> Vec<MatchOutcome> {
        let mut outcomes: Vec<MatchOutcome> = self
            .outcomes
            .values()
            .filter(|o| o.processed && (o.white_id == player_id || o.black_id == player_id))
            .cloned()
            .collect();
        outcomes.sort_by(|a, b| a.occurred_at.cmp(&b.occurred_at).then(a.id.cmp(&b.id)));
        outcomes
    }
}

/// In-memory store backing the engine in tests and the practice deployment
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl FantasyStore for MemoryStore {
    async fn player(&self, id: PlayerId) -> Result<Player> {
        let state = self.state.read().await;
        state.player(id).cloned()
    }

    async fn players(&self) -> Result<Vec<Player>> {
        let state = self.state.read().await;
        let mut players: Vec<Player> = state.players.values().cloned().collect();
        players.sort_by_key(|p| p.id);
        Ok(players)
    }

    async fn insert_player(&self, player: Player) -> Result<()> {
        let mut state = self.state.write().await;
        state.players.insert(player.id, player);
        Ok(())
    }

    async fn set_player_price(&self, id: PlayerId, price: i64) -> Result<()> {
        let mut state = self.state.write().await;
        let player = state.players.get_mut(&id).ok_or(StoreError::PlayerNotFound(id))?;
        player.current_price = price;
        Ok(())
    }

    async fn set_player_average(&self, id: PlayerId, average: f64) -> Result<()> {
        let mut state = self.state.write().await;
        let player = state.players.get_mut(&id).ok_or(StoreError::PlayerNotFound(id))?;
        player.average_points = average;
        Ok(())
    }

    async fn insert_outcome(&self, outcome: NewOutcome) -> Result<OutcomeId> {
        let mut state = self.state.write().await;
        state.next_outcome_id += 1;
        let id = state.next_outcome_id;
        state.outcomes.insert(
            id,
            MatchOutcome {
                id,
                competition_id: outcome.competition_id,
                white_id: outcome.white_id,
                black_id: outcome.black_id,
                result: outcome.result,
                occurred_at: outcome.occurred_at,
                processed: false,
            },
        );
        Ok(id)
    }

    async fn outcome_exists(
        &self,
        competition_id: CompetitionId,
        white_id: PlayerId,
        black_id: PlayerId,
        result: GameResult,
    ) -> Result<bool> {
        let state = self.state.read().await;
        Ok(state.outcomes.values().any(|o| {
            o.competition_id == competition_id
                && o.white_id == white_id
                && o.black_id == black_id
                && o.result == result
        }))
    }

    async fn unprocessed_outcomes(
        &self,
        competition_id: CompetitionId,
    ) -> Result<Vec<MatchOutcome>> {
        let state = self.state.read().await;
        Ok(state
            .outcomes
            .values()
            .filter(|o| o.competition_id == competition_id && !o.processed)
            .cloned()
            .collect())
    }

    async fn recent_processed(
        &self,
        player_id: PlayerId,
        limit: usize,
    ) -> Result<Vec<MatchOutcome>> {
        let state = self.state.read().await;
        let mut outcomes = state.processed_involving(player_id);
        outcomes.reverse();
        outcomes.truncate(limit);
        Ok(outcomes)
    }

    async fn processed_history(&self, player_id: PlayerId) -> Result<Vec<MatchOutcome>> {
        let state = self.state.read().await;
        Ok(state.processed_involving(player_id))
    }

    async fn mark_processed(&self, outcome_id: OutcomeId) -> Result<()> {
        let mut state = self.state.write().await;
        let outcome =
            state.outcomes.get_mut(&outcome_id).ok_or(StoreError::OutcomeNotFound(outcome_id))?;
        outcome.processed = true;
        Ok(())
    }

    async fn roster(&self, id: RosterId) -> Result<Roster> {
        let state = self.state.read().await;
        state.rosters.get(&id).cloned().ok_or(StoreError::RosterNotFound(id))
    }

    async fn insert_roster(
        &self,
        owner_id: OwnerId,
        competition_id: CompetitionId,
    ) -> Result<RosterId> {
        let mut state = self.state.write().await;
        if !state.owners.contains_key(&owner_id) {
            return Err(StoreError::OwnerNotFound(owner_id));
        }
        state.next_roster_id += 1;
        let id = state.next_roster_id;
        state.rosters.insert(id, Roster::new(id, owner_id, competition_id));
        Ok(id)
    }

    async fn rosters_holding(
        &self,
        competition_id: CompetitionId,
        player_id: PlayerId,
    ) -> Result<Vec<Roster>> {
        let state = self.state.read().await;
        let mut rosters: Vec<Roster> = state
            .rosters
            .values()
            .filter(|r| r.competition_id == competition_id && r.holds(player_id))
            .cloned()
            .collect();
        rosters.sort_by_key(|r| r.id);
        Ok(rosters)
    }

    async fn rosters_for_owner(&self, owner_id: OwnerId) -> Result<Vec<Roster>> {
        let state = self.state.read().await;
        let mut rosters: Vec<Roster> =
            state.rosters.values().filter(|r| r.owner_id == owner_id).cloned().collect();
        rosters.sort_by_key(|r| r.id);
        Ok(rosters)
    }

    async fn add_roster_points(&self, roster_id: RosterId, delta: i64) -> Result<()> {
        let mut state = self.state.write().await;
        let roster = state.roster_mut(roster_id)?;
        roster.total_points += delta;
        Ok(())
    }

    async fn owner(&self, id: OwnerId) -> Result<Owner> {
        let state = self.state.read().await;
        state.owners.get(&id).cloned().ok_or(StoreError::OwnerNotFound(id))
    }

    async fn owners(&self) -> Result<Vec<Owner>> {
        let state = self.state.read().await;
        let mut owners: Vec<Owner> = state.owners.values().cloned().collect();
        owners.sort_by_key(|o| o.id);
        Ok(owners)
    }

    async fn insert_owner(&self, owner: Owner) -> Result<()> {
        let mut state = self.state.write().await;
        state.owners.insert(owner.id, owner);
        Ok(())
    }

    async fn set_owner_total(&self, owner_id: OwnerId, total: i64) -> Result<()> {
        let mut state = self.state.write().await;
        let owner = state.owner_mut(owner_id)?;
        owner.total_points = total;
        Ok(())
    }

    async fn insert_competition(&self, competition: Competition) -> Result<()> {
        let mut state = self.state.write().await;
        state.competitions.insert(competition.id, competition);
        Ok(())
    }

    async fn active_competitions(&self) -> Result<Vec<Competition>> {
        let state = self.state.read().await;
        let mut competitions: Vec<Competition> = state
            .competitions
            .values()
            .filter(|c| c.status == CompetitionStatus::Active)
            .cloned()
            .collect();
        competitions.sort_by_key(|c| c.id);
        Ok(competitions)
    }

    async fn acquire_player(
        &self,
        owner_id: OwnerId,
        roster_id: RosterId,
        player_id: PlayerId,
    ) -> Result<i64> {
        let mut state = self.state.write().await;

        // All checks before any mutation, under the one write guard
        let price = state.player(player_id)?.current_price;
        let owner = state.owners.get(&owner_id).ok_or(StoreError::OwnerNotFound(owner_id))?;
        let roster =
            state.rosters.get(&roster_id).ok_or(StoreError::RosterNotFound(roster_id))?;

        if owner.budget < price {
            return Err(StoreError::InsufficientFunds {
                required: price,
                available: owner.budget,
            });
        }
        if roster.is_full() {
            return Err(StoreError::RosterFull { cap: ROSTER_CAP });
        }
        if roster.holds(player_id) {
            return Err(StoreError::DuplicateHolding(player_id));
        }

        state.roster_mut(roster_id)?.player_ids.push(player_id);
        state.owner_mut(owner_id)?.budget -= price;
        Ok(price)
    }

    async fn dispose_player(
        &self,
        owner_id: OwnerId,
        roster_id: RosterId,
        player_id: PlayerId,
    ) -> Result<i64> {
        let mut state = self.state.write().await;

        let price = state.player(player_id)?.current_price;
        if !state.owners.contains_key(&owner_id) {
            return Err(StoreError::OwnerNotFound(owner_id));
        }
        let roster =
            state.rosters.get(&roster_id).ok_or(StoreError::RosterNotFound(roster_id))?;
        if !roster.holds(player_id) {
            return Err(StoreError::NotHeld(player_id));
        }

        let refund = price * SELL_REFUND_PERCENT / 100;

        let roster = state.roster_mut(roster_id)?;
        roster.player_ids.retain(|&id| id != player_id);
        if roster.captain_id == Some(player_id) {
            roster.captain_id = None;
        }
        state.owner_mut(owner_id)?.budget += refund;
        Ok(refund)
    }

    async fn set_captain(&self, roster_id: RosterId, captain: Option<PlayerId>) -> Result<()> {
        let mut state = self.state.write().await;
        let roster = state.roster_mut(roster_id)?;
        if let Some(player_id) = captain {
            if !roster.holds(player_id) {
                return Err(StoreError::InvalidCaptain(player_id));
            }
        }
        roster.captain_id = captain;
        Ok(())
    }
}
