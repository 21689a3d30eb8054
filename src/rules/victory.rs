//! Defeat, round and match victory, and initiative.
//!
//! Nothing here mutates state; the orchestrator polls these after every
//! action and decides what to do with the answers.

use crate::combat::Fighter;
use crate::core::{DuelConfig, RandomSource, Side, SideMap};

/// True once the fighter's hit points are at or below zero.
#[must_use]
pub fn is_defeated(fighter: &Fighter) -> bool {
    fighter.is_defeated()
}

/// The side whose opponent has been defeated, if any.
///
/// Only one fighter can fall per action, so at most one side wins. If both
/// are somehow down, `None` is returned and the caller keeps playing.
#[must_use]
pub fn round_winner(left: &Fighter, right: &Fighter) -> Option<Side> {
    match (is_defeated(left), is_defeated(right)) {
        (false, true) => Some(Side::Left),
        (true, false) => Some(Side::Right),
        _ => None,
    }
}

/// The side that has reached `rounds_to_win` round victories, if any.
#[must_use]
pub fn match_winner(rounds_won: &SideMap<u8>, rounds_to_win: u8) -> Option<Side> {
    Side::all().find(|&side| rounds_won[side] >= rounds_to_win)
}

/// Roll initiative: an even result on the initiative die favors `Left`.
pub fn roll_initiative(config: &DuelConfig, rng: &mut impl RandomSource) -> Side {
    let roll = rng.roll_die(config.initiative_die_sides);
    let side = if roll % 2 == 0 { Side::Left } else { Side::Right };
    tracing::trace!(roll, %side, "initiative rolled");
    side
}

/// Initiative for `round` (1-based).
///
/// Round 1 is random. Round 2 goes to whoever did not have it in round 1.
/// Any later round is random again.
pub fn initiative_for_round(
    round: u32,
    previous: Side,
    config: &DuelConfig,
    rng: &mut impl RandomSource,
) -> Side {
    match round {
        2 => previous.opponent(),
        _ => roll_initiative(config, rng),
    }
}
