//! Fighter state.
//!
//! A `Fighter` is one combatant's mutable state for a single round. Its
//! fields are private: attack power and armor rating only move when the
//! fighter holds the matching potion, and hit points only move through
//! damage or a health potion.

use serde::{Deserialize, Serialize};

use super::species::{PotionKind, Species};

/// Identity of a fighter.
///
/// Handed out by whoever owns the fighters (the duel allocates them from
/// its match state) and shared by clones, so two handles to "the same"
/// fighter compare equal even when they are different values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FighterId(pub u64);

impl std::fmt::Display for FighterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fighter({})", self.0)
    }
}

/// One combatant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    id: FighterId,
    display_name: String,
    species: Species,
    attack_power: i32,
    armor_rating: i32,
    hit_points: i32,
    held_potion: PotionKind,
}

impl Fighter {
    /// Build a fighter with explicit stats.
    ///
    /// Real play goes through [`create_fighter`](super::create_fighter),
    /// which rolls the stats; this is for scripted scenarios.
    pub fn with_stats(
        id: FighterId,
        display_name: impl Into<String>,
        species: Species,
        potion: PotionKind,
        attack_power: i32,
        armor_rating: i32,
        hit_points: i32,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            species,
            attack_power,
            armor_rating,
            hit_points,
            held_potion: potion,
        }
    }

    #[must_use]
    pub fn id(&self) -> FighterId {
        self.id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn species(&self) -> Species {
        self.species
    }

    #[must_use]
    pub fn attack_power(&self) -> i32 {
        self.attack_power
    }

    #[must_use]
    pub fn armor_rating(&self) -> i32 {
        self.armor_rating
    }

    /// May be negative after a heavy hit.
    #[must_use]
    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    #[must_use]
    pub fn held_potion(&self) -> PotionKind {
        self.held_potion
    }

    /// True once hit points reach zero or below.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hit_points <= 0
    }

    /// Set attack power. Ignored unless an attack potion is held.
    pub fn set_attack_power(&mut self, value: i32) {
        if self.held_potion == PotionKind::Attack {
            self.attack_power = value;
        }
    }

    /// Set armor rating. Ignored unless an armor potion is held.
    pub fn set_armor_rating(&mut self, value: i32) {
        if self.held_potion == PotionKind::Armor {
            self.armor_rating = value;
        }
    }

    /// Set hit points. Ignored unless a health potion is held.
    pub fn set_hit_points(&mut self, value: i32) {
        if self.held_potion == PotionKind::Health {
            self.hit_points = value;
        }
    }

    /// Apply an attack of the given power, net of armor.
    ///
    /// Returns the hit points removed; zero when armor absorbs everything.
    pub(crate) fn take_damage(&mut self, attack_power: i32) -> i32 {
        if attack_power <= self.armor_rating {
            return 0;
        }
        let damage = attack_power.saturating_sub(self.armor_rating);
        self.hit_points = self.hit_points.saturating_sub(damage);
        damage
    }

    pub(crate) fn clear_potion(&mut self) {
        self.held_potion = PotionKind::None;
    }
}
