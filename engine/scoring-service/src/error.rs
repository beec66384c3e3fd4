//! Error types for the scoring service

use thiserror::Error;

/// Errors that can occur while scoring and processing outcomes
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("store error: {0}")]
    Store(#[from] fantasy_store::StoreError),
}

/// Errors raised by an outcome feed implementation
///
/// A feed failure is never fatal to a processing batch: the caller logs it
/// and moves on to the next competition.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("upstream feed unavailable: {0}")]
    Unavailable(String),
}
