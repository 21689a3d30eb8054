//! Duel checkpoints.
//!
//! A snapshot carries everything needed to resume a duel exactly where it
//! stopped, including the RNG position, so the resumed duel rolls the same
//! numbers the original would have.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::state::{FighterSetup, MatchState};
use crate::combat::Fighter;
use crate::core::{DuelConfig, DuelError, EventRecord, GameRngState, Result, SideMap};

/// Serializable duel state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelSnapshot {
    pub config: DuelConfig,
    pub state: MatchState,
    pub setups: SideMap<Option<FighterSetup>>,
    pub fighters: Option<SideMap<Fighter>>,
    pub rng: GameRngState,
    pub history: Vector<EventRecord>,
}

impl DuelSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| DuelError::Snapshot(e.to_string()))
    }

    /// Decode a snapshot produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| DuelError::Snapshot(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{FighterId, PotionKind, Species};
    use crate::core::{DuelAction, Side};
    use crate::duel::{Duel, Phase};
    use crate::rules::RulesEngine;

    #[test]
    fn test_snapshot_bytes_round_trip() {
        let mut duel = Duel::new(DuelConfig::default(), 99).unwrap();
        duel.start_match().unwrap();
        duel.register_fighter("Grok", Species::Goblin, PotionKind::Health).unwrap();
        duel.register_fighter("Ada", Species::Human, PotionKind::None).unwrap();
        duel.start_round().unwrap();
        duel.apply_action(DuelAction::Attack).unwrap();

        let snapshot = duel.snapshot();
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(DuelSnapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_restored_duel_replays_identically() {
        let mut duel = Duel::new(DuelConfig::default(), 4).unwrap();
        duel.start_match().unwrap();
        duel.register_fighter("a", Species::Goblin, PotionKind::None).unwrap();
        duel.register_fighter("b", Species::Goblin, PotionKind::None).unwrap();
        duel.start_round().unwrap();

        let bytes = duel.snapshot().to_bytes().unwrap();
        let mut resumed = Duel::restore(DuelSnapshot::from_bytes(&bytes).unwrap()).unwrap();

        for _ in 0..3 {
            let a = duel.apply_action(DuelAction::Attack).unwrap();
            let b = resumed.apply_action(DuelAction::Attack).unwrap();
            assert_eq!(a, b);
        }
        for side in [Side::Left, Side::Right] {
            assert_eq!(duel.fighter(side), resumed.fighter(side));
        }
    }

    #[test]
    fn test_same_seed_same_snapshot() {
        let play = || {
            let mut duel = Duel::new(DuelConfig::default(), 12345).unwrap();
            duel.start_match().unwrap();
            duel.register_fighter("a", Species::Human, PotionKind::Armor).unwrap();
            duel.register_fighter("b", Species::Goblin, PotionKind::Health).unwrap();
            duel.start_round().unwrap();
            duel.apply_action(DuelAction::Attack).unwrap();
            duel.snapshot()
        };

        let first = play();
        assert_eq!(first, play());
        assert_eq!(first.to_bytes().unwrap(), play().to_bytes().unwrap());
    }

    #[test]
    fn test_restored_duel_allocates_same_ids() {
        let mut duel = Duel::new(DuelConfig::default(), 8).unwrap();
        duel.start_match().unwrap();
        duel.register_fighter("a", Species::Goblin, PotionKind::None).unwrap();
        duel.register_fighter("b", Species::Goblin, PotionKind::None).unwrap();
        duel.start_round().unwrap();
        while duel.state().phase == Phase::Combat {
            duel.apply_action(DuelAction::Attack).unwrap();
        }

        let bytes = duel.snapshot().to_bytes().unwrap();
        let mut resumed = Duel::restore(DuelSnapshot::from_bytes(&bytes).unwrap()).unwrap();
        for d in [&mut duel, &mut resumed] {
            d.select_potion(PotionKind::Health).unwrap();
            d.select_potion(PotionKind::Attack).unwrap();
        }

        assert_eq!(duel.snapshot(), resumed.snapshot());
        let old_ids = [FighterId(1), FighterId(2)];
        for side in [Side::Left, Side::Right] {
            assert!(!old_ids.contains(&resumed.fighter(side).unwrap().id()));
        }
    }

    #[test]
    fn test_restore_rejects_phase_without_fighters() {
        let mut duel = Duel::new(DuelConfig::default(), 4).unwrap();
        duel.start_match().unwrap();
        duel.register_fighter("a", Species::Goblin, PotionKind::None).unwrap();
        duel.register_fighter("b", Species::Human, PotionKind::None).unwrap();
        duel.start_round().unwrap();

        let mut snapshot = duel.snapshot();
        snapshot.fighters = None;
        assert!(matches!(Duel::restore(snapshot), Err(DuelError::Snapshot(_))));

        let mut fresh = Duel::new(DuelConfig::default(), 4).unwrap().snapshot();
        fresh.fighters = duel.snapshot().fighters;
        assert!(matches!(Duel::restore(fresh), Err(DuelError::Snapshot(_))));
    }

    #[test]
    fn test_garbage_bytes() {
        assert!(matches!(
            DuelSnapshot::from_bytes(&[1, 2, 3]),
            Err(DuelError::Snapshot(_))
        ));
    }
}
