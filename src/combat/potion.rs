//! Potion effects.

use serde::{Deserialize, Serialize};

use super::fighter::Fighter;
use super::species::PotionKind;
use crate::core::DuelConfig;

/// What drinking a potion did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PotionEffect {
    /// Nothing was held.
    None,
    Healed(i32),
    AttackRaised(i32),
    ArmorRaised(i32),
}

/// Drink the fighter's potion, if any, and clear it.
///
/// The stat change goes through the fighter's gated setters while the
/// potion is still held; afterwards the fighter holds `PotionKind::None`.
pub fn consume_potion(fighter: &mut Fighter, config: &DuelConfig) -> PotionEffect {
    let effect = match fighter.held_potion() {
        PotionKind::None => PotionEffect::None,
        PotionKind::Health => {
            fighter.set_hit_points(fighter.hit_points().saturating_add(config.health_potion_bonus));
            PotionEffect::Healed(config.health_potion_bonus)
        }
        PotionKind::Armor => {
            fighter.set_armor_rating(fighter.armor_rating().saturating_add(config.armor_potion_bonus));
            PotionEffect::ArmorRaised(config.armor_potion_bonus)
        }
        PotionKind::Attack => {
            fighter.set_attack_power(fighter.attack_power().saturating_add(config.attack_potion_bonus));
            PotionEffect::AttackRaised(config.attack_potion_bonus)
        }
    };

    fighter.clear_potion();

    if effect != PotionEffect::None {
        tracing::debug!(fighter = fighter.display_name(), ?effect, "potion consumed");
    }

    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{FighterId, Species};

    fn fighter(potion: PotionKind) -> Fighter {
        Fighter::with_stats(FighterId(1), "F", Species::Human, potion, 17, 9, 30)
    }

    #[test]
    fn test_health_potion() {
        let mut f = fighter(PotionKind::Health);
        assert_eq!(consume_potion(&mut f, &DuelConfig::default()), PotionEffect::Healed(15));
        assert_eq!(f.hit_points(), 45);
        assert_eq!(f.held_potion(), PotionKind::None);
    }

    #[test]
    fn test_attack_potion() {
        let mut f = fighter(PotionKind::Attack);
        assert_eq!(consume_potion(&mut f, &DuelConfig::default()), PotionEffect::AttackRaised(3));
        assert_eq!(f.attack_power(), 20);
        assert_eq!(f.armor_rating(), 9);
    }

    #[test]
    fn test_armor_potion() {
        let mut f = fighter(PotionKind::Armor);
        assert_eq!(consume_potion(&mut f, &DuelConfig::default()), PotionEffect::ArmorRaised(3));
        assert_eq!(f.armor_rating(), 12);
        assert_eq!(f.attack_power(), 17);
    }

    #[test]
    fn test_second_drink_is_noop() {
        let mut f = fighter(PotionKind::Attack);
        consume_potion(&mut f, &DuelConfig::default());
        let before = f.clone();

        assert_eq!(consume_potion(&mut f, &DuelConfig::default()), PotionEffect::None);
        assert_eq!(f, before);
    }

    #[test]
    fn test_health_potion_saturates() {
        let mut f = Fighter::with_stats(FighterId(3), "F", Species::Human, PotionKind::Health, 17, 9, i32::MAX - 1);
        consume_potion(&mut f, &DuelConfig::default());
        assert_eq!(f.hit_points(), i32::MAX);
    }

    #[test]
    fn test_healing_revives_from_negative() {
        let mut f = Fighter::with_stats(FighterId(2), "F", Species::Goblin, PotionKind::Health, 20, 4, -5);
        consume_potion(&mut f, &DuelConfig::default());
        assert_eq!(f.hit_points(), 10);
    }
}
