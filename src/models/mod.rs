//! Data structures for the team randomizer: players, teams, payouts, session state.

mod payout;
mod player;
mod session;
mod team;

pub use payout::{PayoutBreakdown, PayoutEntry, PayoutPlace, MAX_PRIZE_POOL};
pub use player::Player;
pub use session::{Session, SessionError, SessionId, DEFAULT_TEAM_SIZE};
pub use team::{Team, TeamAssignment, MEMBER_SEPARATOR};
