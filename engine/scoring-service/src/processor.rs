//! Result processing - folds unprocessed outcomes into fantasy totals

use crate::scoring::{form_for, match_points, CAPTAIN_MULTIPLIER, STREAK_LENGTH};
use crate::Result;
use fantasy_core::{CompetitionId, MatchOutcome, Side};
use fantasy_store::FantasyStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Batch processor for match outcomes
///
/// Intended to run as a periodic exclusive job per competition: two
/// concurrent invocations for the same competition would race on the same
/// unprocessed-outcome set, so the scheduler must not overlap them.
pub struct ResultProcessor {
    store: Arc<dyn FantasyStore>,
}

impl ResultProcessor {
    /// Create a processor over a store
    pub fn new(store: Arc<dyn FantasyStore>) -> Self {
        Self { store }
    }

    /// Process every unprocessed outcome for a competition
    ///
    /// Idempotent with respect to already-processed outcomes. A failure on
    /// one outcome leaves it unprocessed for the next run and does not
    /// abort the rest of the batch.
    pub async fn process(&self, competition_id: CompetitionId) -> Result<()> {
        let unprocessed = self.store.unprocessed_outcomes(competition_id).await?;
        if unprocessed.is_empty() {
            debug!("no unprocessed outcomes for competition {competition_id}");
        } else {
            info!(
                "processing {} outcomes for competition {competition_id}",
                unprocessed.len()
            );
        }

        for outcome in &unprocessed {
            if let Err(e) = self.apply_outcome(outcome).await {
                warn!(
                    outcome_id = outcome.id,
                    "outcome left unprocessed, will retry next run: {e}"
                );
            }
        }

        self.recompute_owner_totals().await?;
        Ok(())
    }

    /// Fold one outcome into every roster holding either participant, then
    /// mark it processed
    async fn apply_outcome(&self, outcome: &MatchOutcome) -> Result<()> {
        for side in [Side::White, Side::Black] {
            let player_id = outcome.player_on(side);

            // Form comes from prior processed history only, never from
            // siblings of the current batch
            let recent = self.store.recent_processed(player_id, STREAK_LENGTH).await?;
            let form = form_for(player_id, &recent);
            let points = match_points(outcome.result, side, &form);

            let rosters =
                self.store.rosters_holding(outcome.competition_id, player_id).await?;
            for roster in rosters {
                let delta = if roster.is_captain(player_id) {
                    points * CAPTAIN_MULTIPLIER
                } else {
                    points
                };
                self.store.add_roster_points(roster.id, delta).await?;
                debug!(
                    roster_id = roster.id,
                    player_id, delta, "applied outcome {} to roster", outcome.id
                );
            }
        }

        self.store.mark_processed(outcome.id).await?;
        Ok(())
    }

    /// Recompute every owner's aggregate total as a pure fold over the
    /// totals of the rosters they own
    ///
    /// Full recomputation rather than an incremental update, so partial
    /// failures never leave a drifting aggregate.
    pub async fn recompute_owner_totals(&self) -> Result<()> {
        for owner in self.store.owners().await? {
            let rosters = self.store.rosters_for_owner(owner.id).await?;
            let total: i64 = rosters.iter().map(|r| r.total_points).sum();
            self.store.set_owner_total(owner.id, total).await?;
        }
        Ok(())
    }

    /// Recompute every player's running average fantasy points from their
    /// full processed history
    ///
    /// Each historical outcome is scored with the form the player had at
    /// that point of the walk, so the sweep is deterministic however often
    /// it re-runs. Zero outcomes means an average of zero.
    pub async fn refresh_averages(&self) -> Result<()> {
        let players = self.store.players().await?;
        for player in &players {
            let history = self.store.processed_history(player.id).await?;
            let mut total = 0i64;

            for (index, outcome) in history.iter().enumerate() {
                let Some(side) = outcome.side_of(player.id) else {
                    continue;
                };
                let recent: Vec<MatchOutcome> = history[..index]
                    .iter()
                    .rev()
                    .take(STREAK_LENGTH)
                    .cloned()
                    .collect();
                let form = form_for(player.id, &recent);
                total += match_points(outcome.result, side, &form);
            }

            let average = if history.is_empty() {
                0.0
            } else {
                total as f64 / history.len() as f64
            };
            self.store.set_player_average(player.id, average).await?;
        }

        info!("refreshed average points for {} players", players.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fantasy_core::{Competition, CompetitionStatus, GameResult, Owner, Player};
    use fantasy_store::{MemoryStore, NewOutcome};

    async fn create_test_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        for (id, price) in [(1u32, 1_000_000i64), (2, 1_000_000), (3, 1_000_000)] {
            store
                .insert_player(Player::new(id, format!("GM {id}"), 2700, price))
                .await
                .unwrap();
        }
        store.insert_owner(Owner::new(100, "ChessMaster")).await.unwrap();
        store
            .insert_competition(Competition {
                id: 7,
                name: "Test Open".to_string(),
                status: CompetitionStatus::Active,
            })
            .await
            .unwrap();
        store
    }

    async fn insert_outcome(
        store: &MemoryStore,
        white: u32,
        black: u32,
        result: GameResult,
        secs: i64,
    ) -> u64 {
        store
            .insert_outcome(NewOutcome {
                competition_id: 7,
                white_id: white,
                black_id: black,
                result,
                occurred_at: Utc.timestamp_opt(secs, 0).unwrap(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_black_win_scores_both_sides() {
        let store = create_test_store().await;
        let roster_id = store.insert_roster(100, 7).await.unwrap();
        store.acquire_player(100, roster_id, 1).await.unwrap();
        store.acquire_player(100, roster_id, 2).await.unwrap();

        // {white: 1, black: 2, result: 0-1}: black 12, white -2
        insert_outcome(&store, 1, 2, GameResult::BlackWin, 100).await;

        let processor = ResultProcessor::new(store.clone());
        processor.process(7).await.unwrap();

        let roster = store.roster(roster_id).await.unwrap();
        assert_eq!(roster.total_points, 12 - 2);
    }

    #[tokio::test]
    async fn test_processing_is_idempotent() {
        let store = create_test_store().await;
        let roster_id = store.insert_roster(100, 7).await.unwrap();
        store.acquire_player(100, roster_id, 1).await.unwrap();

        insert_outcome(&store, 1, 2, GameResult::WhiteWin, 100).await;

        let processor = ResultProcessor::new(store.clone());
        processor.process(7).await.unwrap();
        processor.process(7).await.unwrap();

        let roster = store.roster(roster_id).await.unwrap();
        assert_eq!(roster.total_points, 10);
    }

    #[tokio::test]
    async fn test_captain_doubles_points() {
        let store = create_test_store().await;

        let plain = store.insert_roster(100, 7).await.unwrap();
        store.acquire_player(100, plain, 1).await.unwrap();

        store.insert_owner(Owner::new(101, "TacticKing")).await.unwrap();
        let captained = store.insert_roster(101, 7).await.unwrap();
        store.acquire_player(101, captained, 1).await.unwrap();
        store.set_captain(captained, Some(1)).await.unwrap();

        insert_outcome(&store, 1, 2, GameResult::WhiteWin, 100).await;

        let processor = ResultProcessor::new(store.clone());
        processor.process(7).await.unwrap();

        assert_eq!(store.roster(plain).await.unwrap().total_points, 10);
        assert_eq!(store.roster(captained).await.unwrap().total_points, 20);
    }

    #[tokio::test]
    async fn test_streak_bonus_across_batches() {
        let store = create_test_store().await;
        let roster_id = store.insert_roster(100, 7).await.unwrap();
        store.acquire_player(100, roster_id, 1).await.unwrap();

        let processor = ResultProcessor::new(store.clone());

        // Three wins processed in earlier batches
        for secs in [100, 200, 300] {
            insert_outcome(&store, 1, 2, GameResult::WhiteWin, secs).await;
            processor.process(7).await.unwrap();
        }
        // 10 + 10 + 10: the streak bonus needs three prior processed wins
        let after_three = store.roster(roster_id).await.unwrap().total_points;
        assert_eq!(after_three, 30);

        // Fourth win lands on a three-win streak
        insert_outcome(&store, 1, 2, GameResult::WhiteWin, 400).await;
        processor.process(7).await.unwrap();
        let roster = store.roster(roster_id).await.unwrap();
        assert_eq!(roster.total_points, after_three + 15);
    }

    #[tokio::test]
    async fn test_wins_within_one_batch_accumulate_streak() {
        let store = create_test_store().await;
        let roster_id = store.insert_roster(100, 7).await.unwrap();
        store.acquire_player(100, roster_id, 1).await.unwrap();

        // Outcomes are processed sequentially within a batch, so later
        // outcomes see earlier ones as processed history
        for secs in [100, 200, 300, 400] {
            insert_outcome(&store, 1, 2, GameResult::WhiteWin, secs).await;
        }

        let processor = ResultProcessor::new(store.clone());
        processor.process(7).await.unwrap();

        // 10 + 10 + 10 + 15
        assert_eq!(store.roster(roster_id).await.unwrap().total_points, 45);
    }

    #[tokio::test]
    async fn test_owner_totals_recomputed() {
        let store = create_test_store().await;
        let a = store.insert_roster(100, 7).await.unwrap();
        let b = store.insert_roster(100, 7).await.unwrap();
        store.acquire_player(100, a, 1).await.unwrap();
        store.acquire_player(100, b, 2).await.unwrap();

        insert_outcome(&store, 1, 2, GameResult::WhiteWin, 100).await;

        let processor = ResultProcessor::new(store.clone());
        processor.process(7).await.unwrap();

        // Roster a: +10 (white win); roster b: -2 (black loss)
        let owner = store.owner(100).await.unwrap();
        assert_eq!(owner.total_points, 8);
    }

    #[tokio::test]
    async fn test_refresh_averages() {
        let store = create_test_store().await;
        let processor = ResultProcessor::new(store.clone());

        store.insert_player(Player::new(4, "GM 4", 2700, 1_000_000)).await.unwrap();

        // Player 1: win as white (+10), draw (+3) -> average 6.5
        insert_outcome(&store, 1, 2, GameResult::WhiteWin, 100).await;
        insert_outcome(&store, 1, 3, GameResult::Draw, 200).await;
        processor.process(7).await.unwrap();
        processor.refresh_averages().await.unwrap();

        let player = store.player(1).await.unwrap();
        assert!((player.average_points - 6.5).abs() < f64::EPSILON);

        // Single loss averages -2, single draw averages 3
        assert_eq!(store.player(2).await.unwrap().average_points, -2.0);
        assert_eq!(store.player(3).await.unwrap().average_points, 3.0);

        // A player with no processed outcomes averages zero
        assert_eq!(store.player(4).await.unwrap().average_points, 0.0);
    }

    #[tokio::test]
    async fn test_refresh_averages_historical_form() {
        let store = create_test_store().await;
        let processor = ResultProcessor::new(store.clone());

        // Four wins: scored historically the fourth carries the streak
        // bonus, so the sum is 45 and the average 11.25
        for secs in [100, 200, 300, 400] {
            insert_outcome(&store, 1, 2, GameResult::WhiteWin, secs).await;
        }
        processor.process(7).await.unwrap();
        processor.refresh_averages().await.unwrap();

        let player = store.player(1).await.unwrap();
        assert!((player.average_points - 11.25).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_refresh_averages_reruns_identically() {
        let store = create_test_store().await;
        let processor = ResultProcessor::new(store.clone());

        insert_outcome(&store, 1, 2, GameResult::BlackWin, 100).await;
        processor.process(7).await.unwrap();

        processor.refresh_averages().await.unwrap();
        let first = store.player(2).await.unwrap().average_points;
        processor.refresh_averages().await.unwrap();
        let second = store.player(2).await.unwrap().average_points;
        assert_eq!(first, second);
        assert_eq!(first, 12.0);
    }
}
