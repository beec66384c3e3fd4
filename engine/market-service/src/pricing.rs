//! Pure price model
//!
//! `price = clamp(floor(base + average * hype), min, max)` - performance
//! moves a player away from its base price, the band keeps every price
//! inside fixed market limits whatever the inputs.

use crate::config::MarketConfig;

/// Current market price for a player given its base price and running
/// average fantasy points
pub fn price_for(base_price: i64, average_points: f64, config: &MarketConfig) -> i64 {
    let raw = (base_price as f64 + average_points * config.hype_multiplier as f64).floor();
    if raw.is_nan() {
        // clamp passes NaN through and the cast would bottom out at 0,
        // outside the band; a NaN average leaves the price at base
        return base_price.clamp(config.min_price, config.max_price);
    }
    raw.clamp(config.min_price as f64, config.max_price as f64) as i64
}
