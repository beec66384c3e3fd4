//! scoring-service - Converts real match results into fantasy points
//!
//! Three layers live here:
//! - `scoring`: the pure points function (base result points, black-win
//!   bonus, winning-streak bonus),
//! - `processor`: the batch job that folds unprocessed outcomes into roster
//!   and owner totals and recomputes player averages,
//! - `feed`: the ingestion surface that de-duplicates records arriving from
//!   the external outcome feed.

pub mod error;
pub mod feed;
pub mod processor;
pub mod scoring;

pub use error::{FeedError, ScoringError};
pub use feed::{sync_outcomes, FeedGame, OutcomeFeed, StaticFeed};
pub use processor::ResultProcessor;
pub use scoring::{match_points, FormGame};

/// Result type alias for scoring operations
pub type Result<T> = std::result::Result<T, ScoringError>;
