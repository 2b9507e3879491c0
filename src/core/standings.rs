//! Standings aggregation: reduce a match sequence into one ranked
//! record per team. The table is rebuilt from scratch on every call,
//! nothing is carried over between invocations.

use crate::domain::model::{Match, TeamRecord};
use std::cmp::Ordering;
use std::collections::HashMap;

const POINTS_WIN: u32 = 3;
const POINTS_DRAW: u32 = 1;

/// Compute the ranked standings table for a match sequence.
///
/// Aggregation is per-team commutative, so match order does not affect
/// the result. An empty input yields an empty table.
pub fn compute_standings(matches: &[Match]) -> Vec<TeamRecord> {
    let mut table: HashMap<&str, TeamRecord> = HashMap::new();

    for m in matches {
        table
            .entry(&m.home_team)
            .or_insert_with(|| TeamRecord::new(&m.home_team));
        table
            .entry(&m.away_team)
            .or_insert_with(|| TeamRecord::new(&m.away_team));
    }

    for m in matches {
        // Cannot hold both entries at once; update each side separately.
        if let Some(home) = table.get_mut(m.home_team.as_str()) {
            home.played += 1;
            home.goals_for += m.home_goals;
            home.goals_against += m.away_goals;
            match m.home_goals.cmp(&m.away_goals) {
                Ordering::Greater => {
                    home.won += 1;
                    home.points += POINTS_WIN;
                }
                Ordering::Less => home.lost += 1,
                Ordering::Equal => {
                    home.drawn += 1;
                    home.points += POINTS_DRAW;
                }
            }
        }
        if let Some(away) = table.get_mut(m.away_team.as_str()) {
            away.played += 1;
            away.goals_for += m.away_goals;
            away.goals_against += m.home_goals;
            match m.away_goals.cmp(&m.home_goals) {
                Ordering::Greater => {
                    away.won += 1;
                    away.points += POINTS_WIN;
                }
                Ordering::Less => away.lost += 1,
                Ordering::Equal => {
                    away.drawn += 1;
                    away.points += POINTS_DRAW;
                }
            }
        }
    }

    let mut rows: Vec<TeamRecord> = table
        .into_values()
        .map(|mut r| {
            r.goal_difference = r.goals_for as i32 - r.goals_against as i32;
            r
        })
        .collect();

    rows.sort_by(rank_order);
    rows
}

/// Tie-break order: points, goal difference, goals for (all descending),
/// then team name ascending. Names are unique within a table, so this is
/// a strict total order.
fn rank_order(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.points
        .cmp(&a.points)
        .then(b.goal_difference.cmp(&a.goal_difference))
        .then(b.goals_for.cmp(&a.goals_for))
        .then_with(|| team_name_order(&a.team, &b.team))
}

/// Case-insensitive name comparison, raw order as the last resort.
fn team_name_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then(a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(round: u32, home: &str, away: &str, hg: u32, ag: u32) -> Match {
        Match {
            round,
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_goals: hg,
            away_goals: ag,
        }
    }

    fn fixture() -> Vec<Match> {
        vec![
            m(1, "Alpha United", "Beta FC", 2, 1),
            m(1, "Gamma", "Delta", 0, 0),
            m(2, "Beta FC", "Gamma", 3, 1),
            m(2, "Delta", "Alpha United", 1, 4),
        ]
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(compute_standings(&[]).is_empty());
    }

    #[test]
    fn spec_scenario_single_round() {
        let matches = vec![
            m(1, "Alpha United", "Beta FC", 2, 1),
            m(1, "Gamma", "Delta", 0, 0),
        ];
        let table = compute_standings(&matches);
        assert_eq!(table.len(), 4);

        assert_eq!(table[0].team, "Alpha United");
        assert_eq!(table[0].points, 3);
        assert_eq!(table[0].goal_difference, 1);

        // Drawn pair tied on everything, ordered by name.
        assert_eq!(table[1].team, "Delta");
        assert_eq!(table[2].team, "Gamma");
        assert_eq!(table[1].points, 1);
        assert_eq!(table[2].points, 1);

        assert_eq!(table[3].team, "Beta FC");
        assert_eq!(table[3].points, 0);
        assert_eq!(table[3].goal_difference, -1);
    }

    #[test]
    fn wins_losses_and_draws_balance() {
        let table = compute_standings(&fixture());
        let won: u32 = table.iter().map(|r| r.won).sum();
        let lost: u32 = table.iter().map(|r| r.lost).sum();
        let decisive = 3; // one draw in the fixture
        assert_eq!(won, decisive);
        assert_eq!(lost, decisive);
    }

    #[test]
    fn per_team_counts_are_consistent() {
        for r in compute_standings(&fixture()) {
            assert_eq!(r.played, r.won + r.drawn + r.lost, "team {}", r.team);
            assert_eq!(
                r.goal_difference,
                r.goals_for as i32 - r.goals_against as i32,
                "team {}",
                r.team
            );
        }
    }

    #[test]
    fn total_points_match_result_mix() {
        let matches = fixture();
        let table = compute_standings(&matches);
        let decisive = matches
            .iter()
            .filter(|m| m.home_goals != m.away_goals)
            .count() as u32;
        let drawn = matches.len() as u32 - decisive;
        let points: u32 = table.iter().map(|r| r.points).sum();
        assert_eq!(points, 3 * decisive + 2 * drawn);
    }

    #[test]
    fn aggregation_is_order_independent() {
        let mut reversed = fixture();
        reversed.reverse();
        assert_eq!(compute_standings(&fixture()), compute_standings(&reversed));
    }

    #[test]
    fn ranking_is_a_strict_total_order() {
        let table = compute_standings(&fixture());
        for pair in table.windows(2) {
            assert_eq!(rank_order(&pair[0], &pair[1]), Ordering::Less);
        }
    }

    #[test]
    fn goals_for_breaks_equal_difference() {
        // Both teams beat a filler side by the same margin, higher score first.
        let matches = vec![
            m(1, "High Scorers", "Filler", 4, 2),
            m(1, "Low Scorers", "Filler", 2, 0),
        ];
        let table = compute_standings(&matches);
        assert_eq!(table[0].team, "High Scorers");
        assert_eq!(table[1].team, "Low Scorers");
    }

    #[test]
    fn goal_difference_beats_goals_for() {
        let matches = vec![
            m(1, "Narrow", "Filler A", 1, 0),
            m(1, "Filler B", "Wide", 0, 5),
        ];
        let table = compute_standings(&matches);
        assert_eq!(table[0].team, "Wide");
        assert_eq!(table[1].team, "Narrow");
    }

    #[test]
    fn away_win_awards_away_points() {
        let table = compute_standings(&[m(1, "Home Side", "Away Side", 0, 2)]);
        assert_eq!(table[0].team, "Away Side");
        assert_eq!(table[0].points, 3);
        assert_eq!(table[0].won, 1);
        assert_eq!(table[1].team, "Home Side");
        assert_eq!(table[1].points, 0);
        assert_eq!(table[1].lost, 1);
    }
}
