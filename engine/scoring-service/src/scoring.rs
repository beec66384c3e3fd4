//! Pure scoring model
//!
//! Point rules per outcome per participant:
//! - Victory: +10
//! - Draw: +3
//! - Defeat: -2
//! - Black victory bonus: +2
//! - Winning streak bonus: +5 (three most recent processed games all won)
//!
//! Captain doubling is applied by the processor, not here.

use fantasy_core::{GameResult, MatchOutcome, PlayerId, Side};

pub const WIN_POINTS: i64 = 10;
pub const DRAW_POINTS: i64 = 3;
pub const LOSS_POINTS: i64 = -2;
pub const BLACK_WIN_BONUS: i64 = 2;
pub const STREAK_BONUS: i64 = 5;
pub const STREAK_LENGTH: usize = 3;
pub const CAPTAIN_MULTIPLIER: i64 = 2;

/// One prior processed game seen from a participant's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormGame {
    pub side: Side,
    pub result: GameResult,
}

impl FormGame {
    /// Whether the participant won this game
    pub fn won(&self) -> bool {
        self.result.is_win_for(self.side)
    }
}

/// Points for one participant in one outcome
///
/// `recent_form` is the participant's prior processed games, most recent
/// first, excluding the outcome being scored; only the first
/// `STREAK_LENGTH` entries are consulted. Fewer than `STREAK_LENGTH` prior
/// games never earns the streak bonus.
pub fn match_points(result: GameResult, side: Side, recent_form: &[FormGame]) -> i64 {
    let mut points = match result.winner() {
        Some(winner) if winner == side => {
            if side == Side::Black {
                WIN_POINTS + BLACK_WIN_BONUS
            } else {
                WIN_POINTS
            }
        }
        Some(_) => LOSS_POINTS,
        None => DRAW_POINTS,
    };

    if has_winning_streak(recent_form) {
        points += STREAK_BONUS;
    }

    points
}

/// Whether the first `STREAK_LENGTH` form entries are all wins
pub fn has_winning_streak(recent_form: &[FormGame]) -> bool {
    recent_form.len() >= STREAK_LENGTH
        && recent_form[..STREAK_LENGTH].iter().all(FormGame::won)
}

/// Project outcomes onto one participant's form entries, keeping order
pub fn form_for(player_id: PlayerId, outcomes: &[MatchOutcome]) -> Vec<FormGame> {
    outcomes
        .iter()
        .filter_map(|o| o.side_of(player_id).map(|side| FormGame { side, result: o.result }))
        .collect()
}
