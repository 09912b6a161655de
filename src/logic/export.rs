//! Plain-text export of the current teams (the "copy teams" clipboard format).

use crate::models::{Session, SessionError, Team};

/// One line per team, members joined by ` & `.
pub fn format_teams(teams: &[Team]) -> String {
    teams
        .iter()
        .map(Team::display_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Export the session's current teams. Fails if no teams have been generated yet.
pub fn export_teams(session: &Session) -> Result<String, SessionError> {
    match &session.assignment {
        Some(assignment) if !assignment.teams.is_empty() => Ok(format_teams(&assignment.teams)),
        _ => Err(SessionError::NoTeamsAvailable),
    }
}
