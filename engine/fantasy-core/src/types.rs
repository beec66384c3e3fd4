//! Domain type definitions shared across the engine crates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type PlayerId = u32;
pub type OwnerId = i64;
pub type CompetitionId = u32;
pub type OutcomeId = u64;
pub type RosterId = u64;

/// Maximum number of players a roster may hold
pub const ROSTER_CAP: usize = 5;

/// Price band every player price is clamped to
pub const MIN_PRICE: i64 = 1_000_000;
pub const MAX_PRICE: i64 = 500_000_000;

/// Units of price movement per average fantasy point
pub const HYPE_MULTIPLIER: i64 = 1_000_000;

/// Percentage of the current price refunded on disposal
pub const SELL_REFUND_PERCENT: i64 = 80;

/// Budget a new owner starts with
pub const STARTING_BUDGET: i64 = 100_000_000;

/// Side of the board a participant played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// Result of a completed game, in standard chess notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "1-0")]
    WhiteWin,
    #[serde(rename = "0-1")]
    BlackWin,
    #[serde(rename = "1/2-1/2")]
    Draw,
}

impl GameResult {
    /// The winning side, if the game was decisive
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::WhiteWin => Some(Side::White),
            GameResult::BlackWin => Some(Side::Black),
            GameResult::Draw => None,
        }
    }

    /// Whether the given side won this game
    pub fn is_win_for(&self, side: Side) -> bool {
        self.winner() == Some(side)
    }

    /// Whether the given side lost this game
    pub fn is_loss_for(&self, side: Side) -> bool {
        self.winner() == Some(side.opposite())
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            GameResult::WhiteWin => "1-0",
            GameResult::BlackWin => "0-1",
            GameResult::Draw => "1/2-1/2",
        };
        write!(f, "{tag}")
    }
}

/// Error returned when a result tag cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized result tag: {0}")]
pub struct ParseResultError(pub String);

impl FromStr for GameResult {
    type Err = ParseResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-0" => Ok(GameResult::WhiteWin),
            "0-1" => Ok(GameResult::BlackWin),
            "1/2-1/2" => Ok(GameResult::Draw),
            other => Err(ParseResultError(other.to_string())),
        }
    }
}

/// A real-world player tradable on the fantasy market
///
/// Identity fields are immutable after creation; `current_price` is written
/// only by the market sweep and `average_points` only by the average
/// recomputation sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// External (FIDE-style) rating, used by the season simulator
    pub rating: u32,
    pub base_price: i64,
    pub current_price: i64,
    /// Running average of fantasy points over processed outcomes
    pub average_points: f64,
}

impl Player {
    /// Create a new player priced at its base price with no history
    pub fn new(id: PlayerId, name: impl Into<String>, rating: u32, base_price: i64) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
            base_price,
            current_price: base_price,
            average_points: 0.0,
        }
    }
}

/// A single completed real-world game between two players
///
/// `processed` transitions false to true exactly once when the result is
/// folded into roster totals; it never reverts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub id: OutcomeId,
    pub competition_id: CompetitionId,
    pub white_id: PlayerId,
    pub black_id: PlayerId,
    pub result: GameResult,
    pub occurred_at: DateTime<Utc>,
    pub processed: bool,
}

impl MatchOutcome {
    /// The player occupying the given side
    pub fn player_on(&self, side: Side) -> PlayerId {
        match side {
            Side::White => self.white_id,
            Side::Black => self.black_id,
        }
    }

    /// Which side the given player occupied, if they took part at all
    pub fn side_of(&self, player_id: PlayerId) -> Option<Side> {
        if self.white_id == player_id {
            Some(Side::White)
        } else if self.black_id == player_id {
            Some(Side::Black)
        } else {
            None
        }
    }
}

/// A fantasy team: one owner's player holdings in one competition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub id: RosterId,
    pub owner_id: OwnerId,
    pub competition_id: CompetitionId,
    pub player_ids: Vec<PlayerId>,
    /// Designated captain; validated against membership at read time
    pub captain_id: Option<PlayerId>,
    pub total_points: i64,
}

impl Roster {
    /// Create an empty roster for an owner in a competition
    pub fn new(id: RosterId, owner_id: OwnerId, competition_id: CompetitionId) -> Self {
        Self {
            id,
            owner_id,
            competition_id,
            player_ids: Vec::new(),
            captain_id: None,
            total_points: 0,
        }
    }

    /// Whether the roster currently holds the given player
    pub fn holds(&self, player_id: PlayerId) -> bool {
        self.player_ids.contains(&player_id)
    }

    /// The captain, or None if unset or no longer held
    ///
    /// A captain id pointing at a player that has since been sold reads as
    /// no captain rather than a dangling reference.
    pub fn captain(&self) -> Option<PlayerId> {
        self.captain_id.filter(|id| self.holds(*id))
    }

    /// Whether the given player is the roster's current captain
    pub fn is_captain(&self, player_id: PlayerId) -> bool {
        self.captain() == Some(player_id)
    }

    /// Whether the roster has reached its player cap
    pub fn is_full(&self) -> bool {
        self.player_ids.len() >= ROSTER_CAP
    }
}

/// A user participating in the fantasy market
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub display_name: String,
    /// Remaining transfer budget
    pub budget: i64,
    /// Aggregate points over all owned rosters, recomputed each batch
    pub total_points: i64,
}

impl Owner {
    /// Create an owner with the standard starting budget
    pub fn new(id: OwnerId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            budget: STARTING_BUDGET,
            total_points: 0,
        }
    }
}

/// Lifecycle of a competition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionStatus {
    Active,
    Finished,
}

/// A real-world competition the engine scores outcomes for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    pub id: CompetitionId,
    pub name: String,
    pub status: CompetitionStatus,
}
