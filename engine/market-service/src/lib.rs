//! market-service - Market pricing and roster trading
//!
//! `pricing` maps a player's performance history to a current market price;
//! `MarketClearing` runs the full-pool price sweep and exposes the
//! transactional acquire/dispose/set-captain operations with budget and
//! roster-size enforcement.

pub mod config;
pub mod error;
pub mod market;
pub mod pricing;

pub use config::MarketConfig;
pub use error::MarketError;
pub use market::MarketClearing;
pub use pricing::price_for;

/// Result type alias for market operations
pub type Result<T> = std::result::Result<T, MarketError>;
