//! Practice deployment of the engine: in-memory store, demo seed data, a
//! static feed with one scripted round, and both sweeps on their cadences.
//! Also plays a seeded practice-league season to show the simulator.

use fantasy_store::{seed::seed_demo_data, FantasyStore, MemoryStore};
use market_service::MarketConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scoring_service::{FeedGame, StaticFeed};
use season_sim::{init_league, play_matchday, USER_TEAM_ID};
use std::sync::Arc;
use sweep_scheduler::{SweepConfig, SweepScheduler};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());
    let seed = seed_demo_data(store.as_ref()).await?;

    // Draft a demo roster: Carlsen (captain) and Giri
    let owner = seed.owner_ids[0];
    store.acquire_player(owner, seed.roster_id, 1).await?;
    store.acquire_player(owner, seed.roster_id, 9).await?;
    store.set_captain(seed.roster_id, Some(1)).await?;

    // One scripted round on the feed
    let mut feed = StaticFeed::new();
    feed.push(
        seed.competition_id,
        FeedGame {
            white_id: 2,
            black_id: 1,
            result: "0-1".parse()?,
            occurred_at: chrono::Utc::now(),
        },
    );

    // A quick practice-league season before the sweeps start
    let roster = store.roster(seed.roster_id).await?;
    let mut ratings = Vec::new();
    for player_id in &roster.player_ids {
        ratings.push(store.player(*player_id).await?.rating);
    }

    let mut league = init_league("ChessMaster XI")?;
    let mut rng = ChaCha8Rng::from_entropy();
    while !league.is_finished {
        play_matchday(&mut league, &ratings, &mut rng)?;
    }
    let user_position = league
        .teams
        .iter()
        .position(|t| t.id == USER_TEAM_ID)
        .map(|p| p + 1)
        .unwrap_or(0);
    info!("practice season complete, finished in position {user_position}");

    // Sweeps run until ctrl-c
    let scheduler = SweepScheduler::new(
        store.clone(),
        Arc::new(feed),
        SweepConfig::from_env()?,
        MarketConfig::from_env()?,
    );

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    scheduler.run(shutdown_rx).await;
    Ok(())
}
