//! Fighter generation.

use super::fighter::{Fighter, FighterId};
use super::species::{PotionKind, Species};
use crate::core::{DuelConfig, RandomSource};

/// Create a fighter with freshly rolled stats.
///
/// `id` comes from the caller so that fighter identity is part of the
/// caller's replayable state. Attack power and armor rating are drawn from the species ranges in
/// `config.stats`; hit points start at `config.starting_hit_points`.
pub fn create_fighter(
    id: FighterId,
    display_name: impl Into<String>,
    species: Species,
    potion: PotionKind,
    config: &DuelConfig,
    rng: &mut impl RandomSource,
) -> Fighter {
    let ranges = config.stats.for_species(species);
    let attack_power = ranges.attack.sample(rng);
    let armor_rating = ranges.armor.sample(rng);

    let fighter = Fighter::with_stats(
        id,
        display_name,
        species,
        potion,
        attack_power,
        armor_rating,
        config.starting_hit_points,
    );

    tracing::debug!(
        fighter = %fighter.id(),
        name = fighter.display_name(),
        %species,
        attack_power,
        armor_rating,
        ?potion,
        "fighter generated"
    );

    fighter
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedRolls, GameRng, StatRange, StatTable};

    #[test]
    fn test_goblin_extremes() {
        let config = DuelConfig::default();

        let low = create_fighter(FighterId(1), "g", Species::Goblin, PotionKind::None, &config, &mut FixedRolls::min());
        assert_eq!((low.attack_power(), low.armor_rating()), (19, 3));

        let high = create_fighter(FighterId(1), "g", Species::Goblin, PotionKind::None, &config, &mut FixedRolls::max());
        assert_eq!((high.attack_power(), high.armor_rating()), (23, 7));
    }

    #[test]
    fn test_human_extremes() {
        let config = DuelConfig::default();

        let low = create_fighter(FighterId(1), "h", Species::Human, PotionKind::None, &config, &mut FixedRolls::min());
        assert_eq!((low.attack_power(), low.armor_rating()), (16, 7));

        let high = create_fighter(FighterId(1), "h", Species::Human, PotionKind::None, &config, &mut FixedRolls::max());
        assert_eq!((high.attack_power(), high.armor_rating()), (19, 12));
    }

    #[test]
    fn test_starting_state() {
        let config = DuelConfig::default();
        let mut rng = GameRng::new(11);
        let fighter = create_fighter(FighterId(1), "Ada", Species::Human, PotionKind::Health, &config, &mut rng);

        assert_eq!(fighter.display_name(), "Ada");
        assert_eq!(fighter.species(), Species::Human);
        assert_eq!(fighter.hit_points(), 50);
        assert_eq!(fighter.held_potion(), PotionKind::Health);
    }

    #[test]
    fn test_custom_table() {
        let mut stats = StatTable::default();
        stats.human.attack = StatRange::new(6, 10, 0);
        stats.human.armor = StatRange::new(1, 5, 2);
        let config = DuelConfig::new().with_stats(stats).with_starting_hit_points(30);

        let fighter = create_fighter(FighterId(1), "h", Species::Human, PotionKind::None, &config, &mut FixedRolls::max());
        assert_eq!(fighter.attack_power(), 10);
        assert_eq!(fighter.armor_rating(), 7);
        assert_eq!(fighter.hit_points(), 30);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = DuelConfig::default();
        let a = create_fighter(FighterId(7), "x", Species::Goblin, PotionKind::None, &config, &mut GameRng::new(77));
        let b = create_fighter(FighterId(7), "x", Species::Goblin, PotionKind::None, &config, &mut GameRng::new(77));
        assert_eq!(a, b);
        assert_eq!(a.id(), FighterId(7));
    }
}
