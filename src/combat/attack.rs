//! Attack resolution.
//!
//! ## Algorithm
//!
//! 1. An attacker aimed at itself always misses (no roll is made).
//! 2. Roll the hit die; the miss face (1 on a d6) always misses.
//! 3. If attack power does not exceed armor rating the blow is absorbed.
//! 4. Otherwise the defender loses `attack_power - armor_rating` hit points.

use serde::{Deserialize, Serialize};

use super::fighter::Fighter;
use crate::core::{DuelConfig, RandomSource};

/// How an attack played out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackResult {
    /// Attacker and defender were the same fighter.
    SelfTarget,
    /// The hit die showed the miss face.
    Missed,
    /// The blow landed but armor soaked all of it.
    Absorbed,
    /// Damage was dealt.
    Hit { damage: i32 },
}

/// Result of [`resolve_attack`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Hit die result, `None` when no roll was made.
    pub roll: Option<i32>,
    pub result: AttackResult,
}

impl AttackOutcome {
    /// True only when damage was dealt.
    #[must_use]
    pub fn hit(&self) -> bool {
        matches!(self.result, AttackResult::Hit { .. })
    }

    /// Hit points removed from the defender.
    #[must_use]
    pub fn damage(&self) -> i32 {
        match self.result {
            AttackResult::Hit { damage } => damage,
            _ => 0,
        }
    }

    /// The `(hit, damage)` pair.
    #[must_use]
    pub fn as_pair(&self) -> (bool, i32) {
        (self.hit(), self.damage())
    }
}

/// Resolve one attack, applying damage to `defender` on a hit.
pub fn resolve_attack(
    attacker: &Fighter,
    defender: &mut Fighter,
    config: &DuelConfig,
    rng: &mut impl RandomSource,
) -> AttackOutcome {
    if attacker.id() == defender.id() {
        tracing::debug!(fighter = %attacker.id(), "attack on self ignored");
        return AttackOutcome {
            roll: None,
            result: AttackResult::SelfTarget,
        };
    }

    let roll = rng.roll_die(config.die_sides);
    if roll == config.miss_face {
        tracing::debug!(attacker = attacker.display_name(), roll, "attack missed");
        return AttackOutcome {
            roll: Some(roll),
            result: AttackResult::Missed,
        };
    }

    let damage = defender.take_damage(attacker.attack_power());
    let result = if damage > 0 {
        AttackResult::Hit { damage }
    } else {
        AttackResult::Absorbed
    };

    tracing::debug!(
        attacker = attacker.display_name(),
        defender = defender.display_name(),
        roll,
        damage,
        remaining = defender.hit_points(),
        "attack resolved"
    );

    AttackOutcome {
        roll: Some(roll),
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{FighterId, PotionKind, Species};
    use crate::core::{FixedRolls, ScriptedRolls};

    fn pair() -> (Fighter, Fighter) {
        let a = Fighter::with_stats(FighterId(1), "A", Species::Goblin, PotionKind::None, 20, 5, 50);
        let b = Fighter::with_stats(FighterId(2), "B", Species::Human, PotionKind::None, 16, 10, 50);
        (a, b)
    }

    #[test]
    fn test_hit_applies_net_damage() {
        let (a, mut b) = pair();
        let outcome = resolve_attack(&a, &mut b, &DuelConfig::default(), &mut FixedRolls::max());

        assert_eq!(outcome.as_pair(), (true, 10));
        assert_eq!(outcome.roll, Some(6));
        assert_eq!(b.hit_points(), 40);
    }

    #[test]
    fn test_miss_face_always_misses() {
        let (a, mut b) = pair();
        let outcome = resolve_attack(&a, &mut b, &DuelConfig::default(), &mut FixedRolls::min());

        assert_eq!(outcome.result, AttackResult::Missed);
        assert_eq!(outcome.as_pair(), (false, 0));
        assert_eq!(b.hit_points(), 50);
    }

    #[test]
    fn test_absorbed_attack() {
        let (_, mut b) = pair();
        let weak = Fighter::with_stats(FighterId(3), "W", Species::Human, PotionKind::None, 10, 7, 50);
        let outcome = resolve_attack(&weak, &mut b, &DuelConfig::default(), &mut FixedRolls::max());

        assert_eq!(outcome.result, AttackResult::Absorbed);
        assert_eq!(outcome.as_pair(), (false, 0));
        assert_eq!(b.hit_points(), 50);
    }

    #[test]
    fn test_equal_attack_and_armor_is_absorbed() {
        let attacker = Fighter::with_stats(FighterId(4), "A", Species::Human, PotionKind::None, 10, 7, 50);
        let mut defender = Fighter::with_stats(FighterId(5), "D", Species::Human, PotionKind::None, 10, 10, 50);
        let outcome = resolve_attack(&attacker, &mut defender, &DuelConfig::default(), &mut FixedRolls::max());
        assert_eq!(outcome.result, AttackResult::Absorbed);
    }

    #[test]
    fn test_self_attack_is_a_miss() {
        let (mut a, _) = pair();
        let attacker = a.clone();
        let mut rolls = ScriptedRolls::new([6]);
        let outcome = resolve_attack(&attacker, &mut a, &DuelConfig::default(), &mut rolls);

        assert_eq!(outcome.result, AttackResult::SelfTarget);
        assert_eq!(outcome.as_pair(), (false, 0));
        assert_eq!(a.hit_points(), 50);
        assert_eq!(rolls.draws(), 0);
    }

    #[test]
    fn test_custom_miss_face() {
        let (a, mut b) = pair();
        let config = DuelConfig::new().with_hit_die(20, 20);
        let outcome = resolve_attack(&a, &mut b, &config, &mut FixedRolls::max());
        assert_eq!(outcome.result, AttackResult::Missed);

        let outcome = resolve_attack(&a, &mut b, &config, &mut FixedRolls::min());
        assert!(outcome.hit());
    }
}
