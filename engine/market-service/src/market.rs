//! MarketClearing - price sweep and transactional trading operations

use crate::config::MarketConfig;
use crate::pricing::price_for;
use crate::Result;
use fantasy_core::{OwnerId, PlayerId, RosterId};
use fantasy_store::FantasyStore;
use std::sync::Arc;
use tracing::info;

/// Market operations over the player pool and the fantasy rosters
pub struct MarketClearing {
    store: Arc<dyn FantasyStore>,
    config: MarketConfig,
}

impl MarketClearing {
    /// Create a market over a store with the given configuration
    pub fn new(store: Arc<dyn FantasyStore>, config: MarketConfig) -> Self {
        Self { store, config }
    }

    /// Recompute and persist the current price of every player from its
    /// running average points
    ///
    /// A pure sweep over current stored state with no ordering dependency
    /// between players; safe to re-run at any time.
    pub async fn refresh_all(&self) -> Result<()> {
        let players = self.store.players().await?;
        for player in &players {
            let price = price_for(player.base_price, player.average_points, &self.config);
            self.store.set_player_price(player.id, price).await?;
        }
        info!("refreshed prices for {} players", players.len());
        Ok(())
    }

    /// Buy a player into a roster, debiting the owner's budget by the
    /// player's current price; returns the amount paid
    pub async fn acquire(
        &self,
        owner_id: OwnerId,
        player_id: PlayerId,
        roster_id: RosterId,
    ) -> Result<i64> {
        let paid = self.store.acquire_player(owner_id, roster_id, player_id).await?;
        info!(owner_id, player_id, roster_id, "player acquired for {paid}");
        Ok(paid)
    }

    /// Sell a player out of a roster, crediting the owner with 80% of the
    /// current price (floored); returns the refund
    pub async fn dispose(
        &self,
        owner_id: OwnerId,
        player_id: PlayerId,
        roster_id: RosterId,
    ) -> Result<i64> {
        let refund = self.store.dispose_player(owner_id, roster_id, player_id).await?;
        info!(owner_id, player_id, roster_id, "player sold for {refund}");
        Ok(refund)
    }

    /// Designate (or clear) a roster's captain; the captain must be a
    /// currently held player
    pub async fn set_captain(
        &self,
        roster_id: RosterId,
        captain: Option<PlayerId>,
    ) -> Result<()> {
        self.store.set_captain(roster_id, captain).await?;
        info!(roster_id, "captain set to {captain:?}");
        Ok(())
    }
}
