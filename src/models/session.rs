//! Session: the roster, settings, and latest generated teams for one organizer.

use crate::models::payout::{PayoutBreakdown, MAX_PRIZE_POOL};
use crate::models::player::Player;
use crate::models::team::TeamAssignment;
use serde::Serialize;
use uuid::Uuid;

/// Errors that can occur during session operations. None of them are fatal; the operation is refused.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionError {
    /// A player with this exact name is already in the roster (case-sensitive).
    DuplicatePlayerName,
    /// Name was blank after trimming.
    EmptyPlayerName,
    /// No player at this roster index.
    PlayerIndexOutOfRange(usize),
    /// Team size must be at least 1.
    InvalidTeamSize,
    /// Entry fee must be a finite, non-negative amount no larger than [`MAX_PRIZE_POOL`].
    InvalidEntryFee,
    /// Need at least 2 players to generate teams.
    NotEnoughPlayers,
    /// Fewer players than the requested team size.
    NotEnoughPlayersForTeamSize { team_size: usize },
    /// Export requested before any teams were generated.
    NoTeamsAvailable,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::DuplicatePlayerName => write!(f, "This player has already been added!"),
            SessionError::EmptyPlayerName => write!(f, "Player name cannot be empty"),
            SessionError::PlayerIndexOutOfRange(index) => write!(f, "No player at position {}", index),
            SessionError::InvalidTeamSize => write!(f, "Players per team must be at least 1"),
            SessionError::InvalidEntryFee => write!(f, "Entry fee must be zero or a positive amount"),
            SessionError::NotEnoughPlayers => {
                write!(f, "You need at least 2 players to generate teams!")
            }
            SessionError::NotEnoughPlayersForTeamSize { team_size } => write!(
                f,
                "You need at least {} players to make teams of {}!",
                team_size, team_size
            ),
            SessionError::NoTeamsAvailable => write!(f, "No teams to copy! Generate teams first."),
        }
    }
}

impl std::error::Error for SessionError {}

/// Unique identifier for a session.
pub type SessionId = Uuid;

/// Players per team when the organizer does not choose.
pub const DEFAULT_TEAM_SIZE: usize = 2;

/// Full session state: roster, settings, and the output of the last generation.
#[derive(Clone, Debug, Serialize)]
pub struct Session {
    pub id: SessionId,
    /// Roster in insertion order.
    pub players: Vec<Player>,
    pub team_size: usize,
    /// Per-player entry fee in dollars; 0 means no payouts.
    pub entry_fee: f64,
    /// Teams from the last generation. Roster edits do not clear it; only regeneration replaces it.
    pub assignment: Option<TeamAssignment>,
    /// Payouts computed at the last generation (None when below threshold or no fee).
    pub payouts: Option<PayoutBreakdown>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an empty session with default settings.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            players: Vec::new(),
            team_size: DEFAULT_TEAM_SIZE,
            entry_fee: 0.0,
            assignment: None,
            payouts: None,
        }
    }

    /// Create a session with the given settings, validated the same way as the setters.
    pub fn with_settings(team_size: usize, entry_fee: f64) -> Result<Self, SessionError> {
        let mut session = Self::new();
        session.set_team_size(team_size)?;
        session.set_entry_fee(entry_fee)?;
        Ok(session)
    }

    /// Add a player to the end of the roster. Duplicate (exact match) and blank names are rejected.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), SessionError> {
        let player = Player::new(name)?;
        if self.players.contains(&player) {
            return Err(SessionError::DuplicatePlayerName);
        }
        self.players.push(player);
        Ok(())
    }

    /// Remove the player at `index` and return it.
    pub fn remove_player(&mut self, index: usize) -> Result<Player, SessionError> {
        if index >= self.players.len() {
            return Err(SessionError::PlayerIndexOutOfRange(index));
        }
        Ok(self.players.remove(index))
    }

    /// Remove every player from the roster.
    pub fn clear_players(&mut self) {
        self.players.clear();
    }

    pub fn set_team_size(&mut self, team_size: usize) -> Result<(), SessionError> {
        if team_size == 0 {
            return Err(SessionError::InvalidTeamSize);
        }
        self.team_size = team_size;
        Ok(())
    }

    pub fn set_entry_fee(&mut self, entry_fee: f64) -> Result<(), SessionError> {
        if !entry_fee.is_finite() || !(0.0..=MAX_PRIZE_POOL).contains(&entry_fee) {
            return Err(SessionError::InvalidEntryFee);
        }
        self.entry_fee = entry_fee;
        Ok(())
    }

    /// Number of teams in the current assignment (0 before the first generation).
    pub fn team_count(&self) -> usize {
        self.assignment.as_ref().map_or(0, |a| a.teams.len())
    }
}
