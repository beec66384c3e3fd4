//! Configuration for the market service

use fantasy_core::{HYPE_MULTIPLIER, MAX_PRICE, MIN_PRICE};
use serde::{Deserialize, Serialize};

/// Tunables for the pricing model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Price movement per average fantasy point
    pub hype_multiplier: i64,

    /// Lower clamp for every computed price
    pub min_price: i64,

    /// Upper clamp for every computed price
    pub max_price: i64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self { hype_multiplier: HYPE_MULTIPLIER, min_price: MIN_PRICE, max_price: MAX_PRICE }
    }
}

impl MarketConfig {
    /// Create configuration from environment variables, falling back to
    /// the standard constants
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            hype_multiplier: env_i64("MARKET_HYPE_MULTIPLIER", defaults.hype_multiplier)?,
            min_price: env_i64("MARKET_MIN_PRICE", defaults.min_price)?,
            max_price: env_i64("MARKET_MAX_PRICE", defaults.max_price)?,
        })
    }
}

fn env_i64(key: &str, default: i64) -> anyhow::Result<i64> {
    match std::env::var(key) {
        Ok(value) => Ok(value.parse()?),
        Err(_) => Ok(default),
    }
}
