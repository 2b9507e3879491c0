use serde::{Deserialize, Serialize};

/// One played fixture extracted from the league page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub round: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
}

/// Accumulated statistics for one team, one row of the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team: String,
    pub points: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

impl TeamRecord {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            points: 0,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
        }
    }
}

/// Matches of a single round, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundGroup {
    pub round: u32,
    pub matches: Vec<Match>,
}

/// Everything the transform step derives from one fetched page.
#[derive(Debug, Clone)]
pub struct ScrapeResult {
    pub matches: Vec<Match>,
    pub standings: Vec<TeamRecord>,
    pub rounds: Vec<RoundGroup>,
}
