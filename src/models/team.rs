//! Team and TeamAssignment (one generation's worth of teams).

use crate::models::player::Player;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Separator used between team members in the exported text form.
pub const MEMBER_SEPARATOR: &str = " & ";

/// A team: members in display order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub members: Vec<Player>,
}

impl Team {
    pub fn new(members: Vec<Player>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members joined as `A & B & C`.
    pub fn display_line(&self) -> String {
        self.members
            .iter()
            .map(Player::name)
            .collect::<Vec<_>>()
            .join(MEMBER_SEPARATOR)
    }
}

/// Result of one "generate teams" call. Replaced wholesale on the next generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamAssignment {
    pub teams: Vec<Team>,
    /// Team size requested at generation time (teams may be larger after redistribution).
    pub team_size: usize,
    pub generated_at: DateTime<Utc>,
}

impl TeamAssignment {
    pub fn new(teams: Vec<Team>, team_size: usize) -> Self {
        Self {
            teams,
            team_size,
            generated_at: Utc::now(),
        }
    }

    /// Total number of players across all teams.
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }
}
