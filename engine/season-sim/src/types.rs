//! League state types
//!
//! Everything here is plain serde data: callers persist `LeagueState`
//! wherever they like (the engine treats it as opaque serialized state).

use crate::error::SimError;
use serde::{Deserialize, Serialize};

pub type TeamId = u32;

/// A participant in the synthetic league
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionTeam {
    pub id: TeamId,
    pub name: String,
    /// The human-controlled entry; its rating tracks the fantasy roster
    pub is_user: bool,
    /// Team strength (average Elo)
    pub rating: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl CompetitionTeam {
    /// Create a team with zeroed standings counters
    pub fn new(id: TeamId, name: impl Into<String>, is_user: bool, rating: u32) -> Self {
        Self {
            id,
            name: name.into(),
            is_user,
            rating,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            points: 0,
            goals_for: 0,
            goals_against: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    /// Fold one played match into the standings counters
    pub fn record_result(&mut self, goals_for: u32, goals_against: u32) {
        self.played += 1;
        self.goals_for += goals_for;
        self.goals_against += goals_against;

        if goals_for > goals_against {
            self.won += 1;
            self.points += 3;
        } else if goals_for == goals_against {
            self.drawn += 1;
            self.points += 1;
        } else {
            self.lost += 1;
        }
    }
}

/// One pairing inside a matchday, mutated in place when played
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimMatch {
    pub home_id: TeamId,
    pub away_id: TeamId,
    pub home_score: u32,
    pub away_score: u32,
    pub played: bool,
}

impl SimMatch {
    /// Create an unplayed pairing
    pub fn new(home_id: TeamId, away_id: TeamId) -> Self {
        Self { home_id, away_id, home_score: 0, away_score: 0, played: false }
    }
}

/// One round of the schedule: every team plays exactly once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matchday {
    /// 1-based round number
    pub number: u32,
    pub matches: Vec<SimMatch>,
}

/// Full persisted state of one practice season
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueState {
    /// Kept sorted as the current standings table
    pub teams: Vec<CompetitionTeam>,
    pub matchdays: Vec<Matchday>,
    /// 1-based pointer to the next matchday to play
    pub current_matchday: u32,
    pub is_finished: bool,
}

impl LeagueState {
    /// Look up a team by id
    pub fn team(&self, id: TeamId) -> Result<&CompetitionTeam, SimError> {
        self.teams.iter().find(|t| t.id == id).ok_or(SimError::TeamNotFound(id))
    }

    /// Look up a team mutably by id
    pub fn team_mut(&mut self, id: TeamId) -> Result<&mut CompetitionTeam, SimError> {
        self.teams.iter_mut().find(|t| t.id == id).ok_or(SimError::TeamNotFound(id))
    }

    /// Re-sort the table: points descending, goal difference descending
    pub fn sort_standings(&mut self) {
        self.teams.sort_by(|a, b| {
            b.points.cmp(&a.points).then(b.goal_difference().cmp(&a.goal_difference()))
        });
    }
}
