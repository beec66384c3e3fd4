//! season-sim - Synthetic practice league
//!
//! A self-contained round-robin league: the user's fantasy team plus nine
//! fixed bot teams, a Berger-rotation schedule generated once at season
//! start, and an Elo-style stochastic score generator played one matchday
//! at a time. League state is plain serde data a caller can persist
//! anywhere; the random source is injected so seasons replay exactly under
//! a fixed seed.

pub mod error;
pub mod league;
pub mod schedule;
pub mod simulate;
pub mod types;

pub use error::SimError;
pub use league::{
    generate_bots, init_league, play_matchday, user_rating, DEFAULT_USER_RATING, LEAGUE_SIZE,
    USER_TEAM_ID,
};
pub use schedule::round_robin;
pub use simulate::{simulate_score, win_probability};
pub use types::{CompetitionTeam, LeagueState, Matchday, SimMatch, TeamId};

/// Result type alias for simulation operations
pub type Result<T> = std::result::Result<T, SimError>;
