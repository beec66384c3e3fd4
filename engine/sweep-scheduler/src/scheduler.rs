//! The sweep loop

use crate::config::SweepConfig;
use fantasy_store::FantasyStore;
use market_service::{MarketClearing, MarketConfig};
use scoring_service::{sync_outcomes, OutcomeFeed, ResultProcessor};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

/// Owns the engine services and drives them on their cadences
pub struct SweepScheduler {
    store: Arc<dyn FantasyStore>,
    feed: Arc<dyn OutcomeFeed>,
    processor: ResultProcessor,
    market: MarketClearing,
    config: SweepConfig,
}

impl SweepScheduler {
    /// Wire up the scheduler over a store and a feed
    pub fn new(
        store: Arc<dyn FantasyStore>,
        feed: Arc<dyn OutcomeFeed>,
        config: SweepConfig,
        market_config: MarketConfig,
    ) -> Self {
        let processor = ResultProcessor::new(store.clone());
        let market = MarketClearing::new(store.clone(), market_config);
        Self { store, feed, processor, market, config }
    }

    /// One scoring sweep: pull the feed, process every active competition,
    /// refresh player averages
    pub async fn run_scoring_sweep(&self) -> anyhow::Result<()> {
        let inserted = sync_outcomes(self.store.as_ref(), self.feed.as_ref()).await?;
        if inserted > 0 {
            info!("scoring sweep ingested {inserted} new outcomes");
        }

        for competition in self.store.active_competitions().await? {
            self.processor.process(competition.id).await?;
        }

        self.processor.refresh_averages().await?;
        Ok(())
    }

    /// One price sweep over the full player pool
    pub async fn run_price_sweep(&self) -> anyhow::Result<()> {
        self.market.refresh_all().await?;
        Ok(())
    }

    /// Run both sweeps on their cadences until the shutdown signal flips
    ///
    /// Both cadences tick on the same task, so sweeps never overlap - the
    /// processor's exclusive-job requirement holds by construction. A
    /// failed sweep is logged and retried on the next tick.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut scoring = tokio::time::interval(self.config.scoring_cadence());
        let mut pricing = tokio::time::interval(self.config.price_cadence());

        info!(
            scoring_secs = self.config.scoring_cadence_secs,
            price_secs = self.config.price_cadence_secs,
            "sweep scheduler started"
        );

        loop {
            tokio::select! {
                _ = scoring.tick() => {
                    if let Err(e) = self.run_scoring_sweep().await {
                        error!("scoring sweep failed, will retry next tick: {e:#}");
                    }
                }
                _ = pricing.tick() => {
                    if let Err(e) = self.run_price_sweep().await {
                        error!("price sweep failed, will retry next tick: {e:#}");
                    }
                }
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!("sweep scheduler shutting down");
                        break;
                    }
                }
            }
        }
    }
}
