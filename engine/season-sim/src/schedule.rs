//! Berger-rotation round-robin scheduling
//!
//! The last team in the list is the fixed anchor: it takes the first slot
//! of every round while the remaining teams rotate by round index. For N
//! teams this yields N-1 matchdays of N/2 pairings covering every
//! unordered pair exactly once.

use crate::error::SimError;
use crate::types::{Matchday, SimMatch, TeamId};
use crate::Result;

/// Generate the full season schedule for an even number of teams
pub fn round_robin(team_ids: &[TeamId]) -> Result<Vec<Matchday>> {
    let n = team_ids.len();
    if n < 2 || n % 2 != 0 {
        return Err(SimError::OddTeamCount(n));
    }

    let rounds = n - 1;
    let per_round = n / 2;
    let mut matchdays = Vec::with_capacity(rounds);

    for round in 0..rounds {
        let mut matches = Vec::with_capacity(per_round);
        for slot in 0..per_round {
            let home = (round + slot) % (n - 1);
            let away = if slot == 0 {
                // Anchor pairing: the fixed last team meets the rotating head
                n - 1
            } else {
                (n - 1 - slot + round) % (n - 1)
            };
            matches.push(SimMatch::new(team_ids[home], team_ids[away]));
        }
        matchdays.push(Matchday { number: round as u32 + 1, matches });
    }

    Ok(matchdays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(n: u32) -> Vec<TeamId> {
        (0..n).collect()
    }

    #[test]
    fn test_rejects_odd_and_trivial_counts() {
        assert_eq!(round_robin(&ids(3)).unwrap_err(), SimError::OddTeamCount(3));
        assert_eq!(round_robin(&ids(0)).unwrap_err(), SimError::OddTeamCount(0));
        assert_eq!(round_robin(&ids(1)).unwrap_err(), SimError::OddTeamCount(1));
    }

    #[test]
    fn test_two_teams() {
        let matchdays = round_robin(&ids(2)).unwrap();
        assert_eq!(matchdays.len(), 1);
        assert_eq!(matchdays[0].matches.len(), 1);
    }

    #[test]
    fn test_schedule_shape_and_coverage() {
        for n in [2u32, 4, 6, 8, 10, 12] {
            let matchdays = round_robin(&ids(n)).unwrap();

            // N-1 matchdays of N/2 fixtures, N(N-1)/2 total
            assert_eq!(matchdays.len(), (n - 1) as usize);
            let total: usize = matchdays.iter().map(|d| d.matches.len()).sum();
            assert_eq!(total, (n * (n - 1) / 2) as usize);

            let mut seen_pairs = HashSet::new();
            for day in &matchdays {
                assert_eq!(day.matches.len(), (n / 2) as usize);

                // Every team appears exactly once per matchday
                let mut seen_teams = HashSet::new();
                for m in &day.matches {
                    assert_ne!(m.home_id, m.away_id);
                    assert!(seen_teams.insert(m.home_id));
                    assert!(seen_teams.insert(m.away_id));

                    // No unordered pair repeats across the season
                    let pair = (m.home_id.min(m.away_id), m.home_id.max(m.away_id));
                    assert!(seen_pairs.insert(pair), "pair {pair:?} repeated");
                }
                assert_eq!(seen_teams.len(), n as usize);
            }
        }
    }

    #[test]
    fn test_anchor_in_first_slot_every_round() {
        let matchdays = round_robin(&ids(10)).unwrap();
        for day in &matchdays {
            assert_eq!(day.matches[0].away_id, 9);
        }
    }

    #[test]
    fn test_matchday_numbers_are_one_based() {
        let matchdays = round_robin(&ids(4)).unwrap();
        let numbers: Vec<u32> = matchdays.iter().map(|d| d.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
