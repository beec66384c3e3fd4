//! League lifecycle: initialization and matchday play

use crate::error::SimError;
use crate::schedule::round_robin;
use crate::simulate::simulate_score;
use crate::types::{CompetitionTeam, LeagueState, TeamId};
use crate::Result;
use rand::Rng;
use tracing::{debug, info};

/// Teams in a practice league: the user entry plus nine bots
pub const LEAGUE_SIZE: usize = 10;

/// Reserved id of the human-controlled team
pub const USER_TEAM_ID: TeamId = 0;

/// Placeholder rating for the user team until a roster exists
pub const DEFAULT_USER_RATING: u32 = 1500;

/// The nine fixed bot entries, strongest first
pub fn generate_bots() -> Vec<CompetitionTeam> {
    let bots = [
        ("Magnus FC", 2800),
        ("Hikaru Knights", 2750),
        ("Nepo Gambit", 2700),
        ("Ding United", 2650),
        ("Fabi Stars", 2600),
        ("Gukesh Generation", 2550),
        ("Pragg Power", 2500),
        ("Giri Draws", 2450),
        ("Levon Artists", 2400),
    ];

    bots.iter()
        .enumerate()
        .map(|(index, (name, rating))| {
            CompetitionTeam::new(index as TeamId + 1, *name, false, *rating)
        })
        .collect()
}

/// Start a fresh season: user team plus bots, full schedule, matchday 1
pub fn init_league(user_team_name: &str) -> Result<LeagueState> {
    let mut teams =
        vec![CompetitionTeam::new(USER_TEAM_ID, user_team_name, true, DEFAULT_USER_RATING)];
    teams.extend(generate_bots());

    let ids: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
    let matchdays = round_robin(&ids)?;

    info!(
        teams = teams.len(),
        matchdays = matchdays.len(),
        "initialized practice league for {user_team_name}"
    );

    Ok(LeagueState { teams, matchdays, current_matchday: 1, is_finished: false })
}

/// Floor of the mean rating of the user's currently held players, 0 for an
/// empty roster
pub fn user_rating(player_ratings: &[u32]) -> u32 {
    if player_ratings.is_empty() {
        return 0;
    }
    let total: u64 = player_ratings.iter().map(|&r| r as u64).sum();
    (total / player_ratings.len() as u64) as u32
}

/// Play the current matchday and advance the season
///
/// Recomputes the user team's rating from the given roster ratings, then
/// simulates every pairing, folds the scores into the standings, re-sorts
/// the table, and advances the matchday pointer. Replaying a played
/// matchday is not supported: once the season is finished this returns
/// `SeasonFinished`, and callers must check `is_finished` between calls.
pub fn play_matchday<R: Rng>(
    state: &mut LeagueState,
    user_player_ratings: &[u32],
    rng: &mut R,
) -> Result<()> {
    if state.is_finished {
        return Err(SimError::SeasonFinished);
    }

    // The pointer is 1-based; 0 can only arrive via hand-built or corrupted
    // persisted state and is rejected rather than underflowing
    let day_index = (state.current_matchday as usize)
        .checked_sub(1)
        .filter(|&i| i < state.matchdays.len())
        .ok_or(SimError::MatchdayNotFound(state.current_matchday))?;

    // Roster strength feeds the user team's rating before every round
    let rating = user_rating(user_player_ratings);
    state.team_mut(USER_TEAM_ID)?.rating = rating;

    let pairings: Vec<(TeamId, TeamId)> = state.matchdays[day_index]
        .matches
        .iter()
        .map(|m| (m.home_id, m.away_id))
        .collect();

    for (slot, (home_id, away_id)) in pairings.into_iter().enumerate() {
        let home_rating = state.team(home_id)?.rating;
        let away_rating = state.team(away_id)?.rating;
        let (home_score, away_score) = simulate_score(rng, home_rating, away_rating);

        let m = &mut state.matchdays[day_index].matches[slot];
        m.home_score = home_score;
        m.away_score = away_score;
        m.played = true;

        state.team_mut(home_id)?.record_result(home_score, away_score);
        state.team_mut(away_id)?.record_result(away_score, home_score);

        debug!(home_id, away_id, "matchday {} result {home_score}-{away_score}", day_index + 1);
    }

    state.sort_standings();

    state.current_matchday += 1;
    if state.current_matchday as usize > state.matchdays.len() {
        state.is_finished = true;
        info!("season finished after {} matchdays", state.matchdays.len());
    }

    Ok(())
}
