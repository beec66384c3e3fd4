//! Outcome-feed ingestion
//!
//! The transport behind the feed (HTTP broadcast polling, PGN parsing) is an
//! external collaborator; the engine only sees parsed records and is
//! responsible for de-duplicating them before they enter the store.

use crate::error::FeedError;
use crate::Result;
use chrono::{DateTime, Utc};
use fantasy_core::{Competition, CompetitionId, GameResult, PlayerId};
use fantasy_store::{FantasyStore, NewOutcome};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

/// A parsed game record handed over by the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedGame {
    pub white_id: PlayerId,
    pub black_id: PlayerId,
    pub result: GameResult,
    pub occurred_at: DateTime<Utc>,
}

/// Source of parsed match records for a competition
#[async_trait::async_trait]
pub trait OutcomeFeed: Send + Sync {
    /// Fetch the finished games currently visible for a competition
    async fn fetch_outcomes(
        &self,
        competition: &Competition,
    ) -> std::result::Result<Vec<FeedGame>, FeedError>;
}

/// Pull records for every active competition into the store, skipping any
/// already present
///
/// A feed failure for one competition is logged and skipped; it never
/// aborts ingestion for the others. Returns the number of newly inserted
/// outcomes.
pub async fn sync_outcomes(
    store: &dyn FantasyStore,
    feed: &dyn OutcomeFeed,
) -> Result<usize> {
    let mut inserted = 0;

    for competition in store.active_competitions().await? {
        let games = match feed.fetch_outcomes(&competition).await {
            Ok(games) => games,
            Err(e) => {
                warn!(
                    competition_id = competition.id,
                    "outcome feed unavailable, skipping competition: {e}"
                );
                continue;
            }
        };

        for game in games {
            let exists = store
                .outcome_exists(competition.id, game.white_id, game.black_id, game.result)
                .await?;
            if exists {
                continue;
            }

            store
                .insert_outcome(NewOutcome {
                    competition_id: competition.id,
                    white_id: game.white_id,
                    black_id: game.black_id,
                    result: game.result,
                    occurred_at: game.occurred_at,
                })
                .await?;
            inserted += 1;
            info!(
                competition_id = competition.id,
                white = game.white_id,
                black = game.black_id,
                "new outcome: {}",
                game.result
            );
        }
    }

    Ok(inserted)
}

/// Fixed in-memory feed for tests and the practice deployment
#[derive(Debug, Default)]
pub struct StaticFeed {
    games: HashMap<CompetitionId, Vec<FeedGame>>,
}

impl StaticFeed {
    /// Create an empty feed
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a game to a competition's visible records
    pub fn push(&mut self, competition_id: CompetitionId, game: FeedGame) {
        self.games.entry(competition_id).or_default().push(game);
    }
}

#[async_trait::async_trait]
impl OutcomeFeed for StaticFeed {
    async fn fetch_outcomes(
        &self,
        competition: &Competition,
    ) -> std::result::Result<Vec<FeedGame>, FeedError> {
        Ok(self.games.get(&competition.id).cloned().unwrap_or_default())
    }
}
