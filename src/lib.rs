//! Team randomizer web app: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    compute_payouts, export_teams, format_teams, generate_teams, generate_teams_with_rng,
    generate_teams_with_seed, partition, partition_players, MIN_PLAYERS_FOR_PAYOUT,
    MIN_PLAYERS_FOR_TEAMS,
};
pub use models::{
    PayoutBreakdown, PayoutEntry, PayoutPlace, Player, Session, SessionError, SessionId, Team,
    TeamAssignment, DEFAULT_TEAM_SIZE, MAX_PRIZE_POOL, MEMBER_SEPARATOR,
};
