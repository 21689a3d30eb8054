//! Match orchestration: setup, rounds, potion selection, victory.
//!
//! A match is best of three by default. Each round both sides field freshly
//! generated fighters; the side with initiative moves first and the sides
//! alternate until one fighter falls. Initiative is random in round 1,
//! passes to the other side in round 2, and is random again in round 3.

mod phase;
mod state;
#[allow(clippy::module_inception)]
mod duel;
mod snapshot;

pub use phase::Phase;
pub use state::{FighterSetup, MatchState};
pub use duel::{ActionOutcome, Duel, TurnOutcome};
pub use snapshot::DuelSnapshot;
