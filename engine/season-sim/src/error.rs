//! Error types for the season simulator

use crate::types::TeamId;
use thiserror::Error;

/// Errors that can occur while scheduling or playing a season
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SimError {
    #[error("round-robin scheduling requires an even team count, got {0}")]
    OddTeamCount(usize),

    #[error("season is already finished")]
    SeasonFinished,

    #[error("matchday {0} not found")]
    MatchdayNotFound(u32),

    #[error("team {0} not found in league")]
    TeamNotFound(TeamId),
}
