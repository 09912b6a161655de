//! Team partitioning: shuffle the roster, chunk it, fold an undersized last team into the others.

use crate::models::{Player, Team};
use rand::seq::SliceRandom;
use rand::Rng;

/// Split `players` into random teams of `team_size` using the thread RNG.
///
/// See [`partition`] for the rules.
pub fn partition_players(players: &[Player], team_size: usize) -> Vec<Team> {
    partition(players, team_size, &mut rand::thread_rng())
}

/// Split `players` into random teams of `team_size`.
///
/// 1. Fisher–Yates shuffle of a copy of the roster.
/// 2. Consecutive chunks of `team_size`; the last chunk may be short.
/// 3. If there is more than one team and the last one is short, remove it and hand its members
///    out round-robin (member `i` joins team `i % remaining`).
///
/// A single team is returned as-is, even when it is smaller than `team_size`.
/// Callers validate `team_size >= 1` and `players.len() >= team_size` beforehand.
pub fn partition<R: Rng + ?Sized>(players: &[Player], team_size: usize, rng: &mut R) -> Vec<Team> {
    debug_assert!(team_size > 0, "team size must be positive");
    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);

    let mut teams: Vec<Team> = shuffled
        .chunks(team_size.max(1))
        .map(|chunk| Team::new(chunk.to_vec()))
        .collect();

    let redistributed = redistribute_short_team(&mut teams, team_size);
    log::debug!(
        "Partitioned {} players into {} team(s) of {} (redistributed: {})",
        players.len(),
        teams.len(),
        team_size,
        redistributed
    );
    teams
}

/// Fold an undersized trailing team into the remaining teams. Returns whether anything moved.
fn redistribute_short_team(teams: &mut Vec<Team>, team_size: usize) -> bool {
    let short = teams.len() > 1 && teams.last().is_some_and(|t| t.len() < team_size);
    if !short {
        return false;
    }
    let Some(last) = teams.pop() else {
        return false;
    };
    let remaining = teams.len();
    for (i, player) in last.members.into_iter().enumerate() {
        teams[i % remaining].members.push(player);
    }
    true
}
