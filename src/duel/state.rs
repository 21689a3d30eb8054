//! Match bookkeeping.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::combat::{FighterId, PotionKind, Species};
use crate::core::{Side, SideMap};

/// Round and initiative bookkeeping for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Current phase.
    pub phase: Phase,

    /// Rounds started so far (0 during setup).
    pub round_number: u32,

    /// Round victories per side.
    pub rounds_won: SideMap<u8>,

    /// Side that moves first in the current (or upcoming) round.
    pub initiative: Side,

    /// Side whose input is expected next, in setup, potion selection and combat.
    pub acting: Side,

    /// Match winner once the match is over.
    pub winner: Option<Side>,

    /// Next fighter ID to allocate. Survives rematches.
    next_fighter_id: u64,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            phase: Phase::NewGame,
            round_number: 0,
            rounds_won: SideMap::with_value(0),
            initiative: Side::Left,
            acting: Side::Left,
            winner: None,
            next_fighter_id: 1,
        }
    }
}

impl MatchState {
    /// Fresh state for a new match, with the given side up first.
    ///
    /// Fighter IDs keep counting from where `self` left off.
    #[must_use]
    pub fn for_new_match(&self, initiative: Side) -> Self {
        Self {
            phase: Phase::Setup,
            initiative,
            acting: initiative,
            next_fighter_id: self.next_fighter_id,
            ..Self::default()
        }
    }

    /// Allocate a new fighter ID.
    pub fn alloc_fighter_id(&mut self) -> FighterId {
        let id = FighterId(self.next_fighter_id);
        self.next_fighter_id += 1;
        id
    }

    /// Hand the turn to the other side.
    pub fn pass_turn(&mut self) {
        self.acting = self.acting.opponent();
    }
}

/// A side's choices for building its fighter.
///
/// Name and species are fixed for the match; the potion is chosen again
/// before every round after the first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterSetup {
    pub name: String,
    pub species: Species,
    /// `None` until this side has picked for the upcoming round.
    pub potion: Option<PotionKind>,
}
