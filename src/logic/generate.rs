//! Generate teams for a session and recompute payouts for the new roster size.

use crate::logic::partition::partition;
use crate::logic::payout::compute_payouts;
use crate::models::{Session, SessionError, TeamAssignment};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Fewest players that can be split into teams.
pub const MIN_PLAYERS_FOR_TEAMS: usize = 2;

/// Generate random teams using the thread RNG. Replaces any previous assignment and payouts.
pub fn generate_teams(session: &mut Session) -> Result<(), SessionError> {
    generate_teams_with_rng(session, &mut rand::thread_rng())
}

/// Generate teams reproducibly: the same seed and roster always give the same teams.
pub fn generate_teams_with_seed(session: &mut Session, seed: u64) -> Result<(), SessionError> {
    generate_teams_with_rng(session, &mut ChaCha8Rng::seed_from_u64(seed))
}

/// Validate the roster against the team size, partition it, and compute payouts.
///
/// On error the session is left unchanged.
pub fn generate_teams_with_rng<R: Rng + ?Sized>(
    session: &mut Session,
    rng: &mut R,
) -> Result<(), SessionError> {
    let player_count = session.players.len();
    if player_count < MIN_PLAYERS_FOR_TEAMS {
        return Err(SessionError::NotEnoughPlayers);
    }
    let team_size = session.team_size;
    if team_size == 0 {
        return Err(SessionError::InvalidTeamSize);
    }
    if player_count < team_size {
        return Err(SessionError::NotEnoughPlayersForTeamSize { team_size });
    }

    let teams = partition(&session.players, team_size, rng);
    session.assignment = Some(TeamAssignment::new(teams, team_size));
    session.payouts = compute_payouts(player_count, session.entry_fee);
    Ok(())
}
