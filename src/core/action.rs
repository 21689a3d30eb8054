//! Actions and the duel's narrative history.
//!
//! During combat the acting side either attacks or drinks its potion.
//! Everything that happens is appended to the history as a `DuelEvent` so
//! the presentation layer can narrate it ("FIGHT!", "Grok missed!",
//! "Ada is victorious!") without re-deriving anything.

use serde::{Deserialize, Serialize};

use super::player::Side;
use crate::combat::{PotionEffect, PotionKind, Species};

/// A combat-turn choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DuelAction {
    /// Attack the opposing fighter.
    Attack,
    /// Drink the held potion instead of attacking.
    DrinkPotion,
}

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelEvent {
    MatchStarted {
        initiative: Side,
    },
    FighterReady {
        side: Side,
        name: String,
        species: Species,
        potion: PotionKind,
    },
    RoundStarted {
        round: u32,
        initiative: Side,
    },
    AttackMissed {
        side: Side,
        roll: i32,
    },
    /// The attack connected but armor soaked all of it.
    AttackAbsorbed {
        side: Side,
    },
    AttackHit {
        side: Side,
        damage: i32,
        remaining: i32,
    },
    PotionConsumed {
        side: Side,
        effect: PotionEffect,
    },
    RoundWon {
        side: Side,
        round: u32,
    },
    MatchWon {
        side: Side,
    },
}

/// A recorded event with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// The event.
    pub event: DuelEvent,

    /// Round number when the event happened (0 before the first round).
    pub round: u32,

    /// Position in the match history.
    pub sequence: u32,
}

impl EventRecord {
    /// Create a new event record.
    #[must_use]
    pub fn new(event: DuelEvent, round: u32, sequence: u32) -> Self {
        Self {
            event,
            round,
            sequence,
        }
    }
}
