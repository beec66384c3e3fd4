//! Configuration for sweep cadences

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_SCORING_CADENCE_SECS: u64 = 600; // every 10 minutes
pub const DEFAULT_PRICE_CADENCE_SECS: u64 = 86_400; // daily

/// Cadences for the two periodic sweeps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Seconds between scoring sweeps (feed sync + result processing)
    pub scoring_cadence_secs: u64,

    /// Seconds between full price sweeps
    pub price_cadence_secs: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            scoring_cadence_secs: DEFAULT_SCORING_CADENCE_SECS,
            price_cadence_secs: DEFAULT_PRICE_CADENCE_SECS,
        }
    }
}

impl SweepConfig {
    pub fn scoring_cadence(&self) -> Duration {
        Duration::from_secs(self.scoring_cadence_secs)
    }

    pub fn price_cadence(&self) -> Duration {
        Duration::from_secs(self.price_cadence_secs)
    }

    /// Create configuration from environment variables, falling back to
    /// the defaults
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            scoring_cadence_secs: env_u64(
                "SWEEP_SCORING_CADENCE_SECS",
                defaults.scoring_cadence_secs,
            )?,
            price_cadence_secs: env_u64("SWEEP_PRICE_CADENCE_SECS", defaults.price_cadence_secs)?,
        })
    }
}

fn env_u64(key: &str, default: u64) -> anyhow::Result<u64> {
    match std::env::var(key) {
        Ok(value) => Ok(value.parse()?),
        Err(_) => Ok(default),
    }
}
