//! Team randomizer logic: partitioning, payouts, generation, export.

mod export;
mod generate;
mod partition;
mod payout;

pub use export::{export_teams, format_teams};
pub use generate::{
    generate_teams, generate_teams_with_rng, generate_teams_with_seed, MIN_PLAYERS_FOR_TEAMS,
};
pub use partition::{partition, partition_players};
pub use payout::{compute_payouts, MIN_PLAYERS_FOR_PAYOUT};
