//! End-to-end flow over the in-memory store: feed sync, batch processing,
//! average refresh, owner totals.

use chrono::{TimeZone, Utc};
use fantasy_core::GameResult;
use fantasy_store::{seed::seed_demo_data, FantasyStore, MemoryStore};
use scoring_service::{sync_outcomes, FeedGame, ResultProcessor, StaticFeed};
use std::sync::Arc;

fn feed_game(white: u32, black: u32, result: GameResult, secs: i64) -> FeedGame {
    FeedGame {
        white_id: white,
        black_id: black,
        result,
        occurred_at: Utc.timestamp_opt(secs, 0).unwrap(),
    }
}

#[tokio::test]
async fn full_sweep_over_seeded_store() {
    let store = Arc::new(MemoryStore::new());
    let seed = seed_demo_data(store.as_ref()).await.unwrap();
    let competition = seed.competition_id;
    let owner = seed.owner_ids[0];
    let roster = seed.roster_id;

    // Owner drafts Carlsen (id 1) and Caruana (id 2); Carlsen wears the band
    store.acquire_player(owner, roster, 1).await.unwrap();
    store.acquire_player(owner, roster, 2).await.unwrap();
    store.set_captain(roster, Some(1)).await.unwrap();

    // Round 1 arrives on the feed: Carlsen beats Caruana with Black
    let mut feed = StaticFeed::new();
    feed.push(competition, feed_game(2, 1, GameResult::BlackWin, 1_000));

    let inserted = sync_outcomes(store.as_ref(), &feed).await.unwrap();
    assert_eq!(inserted, 1);

    let processor = ResultProcessor::new(store.clone());
    processor.process(competition).await.unwrap();

    // Captained black win doubles to 24; Caruana's loss adds -2
    let roster_state = store.roster(roster).await.unwrap();
    assert_eq!(roster_state.total_points, 24 - 2);

    // Owner aggregate mirrors the single roster
    assert_eq!(store.owner(owner).await.unwrap().total_points, 22);

    // Re-running the whole sweep changes nothing
    sync_outcomes(store.as_ref(), &feed).await.unwrap();
    processor.process(competition).await.unwrap();
    assert_eq!(store.roster(roster).await.unwrap().total_points, 22);

    // Averages feed the market sweep
    processor.refresh_averages().await.unwrap();
    assert_eq!(store.player(1).await.unwrap().average_points, 12.0);
    assert_eq!(store.player(2).await.unwrap().average_points, -2.0);
}

#[tokio::test]
async fn later_rounds_accumulate_on_earlier_state() {
    let store = Arc::new(MemoryStore::new());
    let seed = seed_demo_data(store.as_ref()).await.unwrap();
    let competition = seed.competition_id;
    let owner = seed.owner_ids[0];
    let roster = seed.roster_id;

    store.acquire_player(owner, roster, 3).await.unwrap();

    let processor = ResultProcessor::new(store.clone());
    let mut feed = StaticFeed::new();

    // Three rounds, one win each, synced and processed round by round
    for (secs, opponent) in [(1_000, 4u32), (2_000, 5), (3_000, 6)] {
        feed.push(competition, feed_game(3, opponent, GameResult::WhiteWin, secs));
        sync_outcomes(store.as_ref(), &feed).await.unwrap();
        processor.process(competition).await.unwrap();
    }
    assert_eq!(store.roster(roster).await.unwrap().total_points, 30);

    // Fourth win rides the streak
    feed.push(competition, feed_game(3, 7, GameResult::WhiteWin, 4_000));
    sync_outcomes(store.as_ref(), &feed).await.unwrap();
    processor.process(competition).await.unwrap();
    assert_eq!(store.roster(roster).await.unwrap().total_points, 45);
}
