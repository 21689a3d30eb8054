//! Duel configuration.
//!
//! Every tunable number of the duel lives here:
//! - `StatRange`: a bounded random draw plus a flat bonus
//! - `StatTable`: attack and armor ranges per species
//! - `DuelConfig`: combines the stat table with hit points, dice and potion strengths
//!
//! `DuelConfig::default()` is the standard ruleset. Goblins hit harder
//! (attack 19-23, armor 3-7); humans are better armored (attack 16-19,
//! armor 7-12). Everyone starts at 50 hit points.

use serde::{Deserialize, Serialize};

use super::error::{DuelError, Result};
use super::rng::RandomSource;
use crate::combat::Species;

/// Largest hit point total, stat value or bonus a configuration may use.
pub const MAX_CONFIG_VALUE: i32 = 10_000;

fn check_bounded(what: &str, value: i32) -> Result<()> {
    if (0..=MAX_CONFIG_VALUE).contains(&value) {
        Ok(())
    } else {
        Err(DuelError::InvalidConfig(format!(
            "{what} must be within 0..={MAX_CONFIG_VALUE}, got {value}"
        )))
    }
}

/// A uniform draw from `[low, high]` with a flat `bonus` added afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRange {
    pub low: i32,
    pub high: i32,
    pub bonus: i32,
}

impl StatRange {
    #[must_use]
    pub const fn new(low: i32, high: i32, bonus: i32) -> Self {
        Self { low, high, bonus }
    }

    /// Smallest value `sample` can produce.
    #[must_use]
    pub const fn min_value(&self) -> i32 {
        self.low.saturating_add(self.bonus)
    }

    /// Largest value `sample` can produce.
    #[must_use]
    pub const fn max_value(&self) -> i32 {
        if self.high > self.low {
            self.high.saturating_add(self.bonus)
        } else {
            self.low.saturating_add(self.bonus)
        }
    }

    /// Check whether `value` is a possible outcome.
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }

    /// Draw a value. A degenerate range always yields `low + bonus`.
    pub fn sample(&self, rng: &mut impl RandomSource) -> i32 {
        let base = if self.low >= self.high {
            self.low
        } else {
            rng.next_in_range(self.low, self.high)
        };
        base.saturating_add(self.bonus)
    }
}

/// Generation ranges for one species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesStats {
    pub attack: StatRange,
    pub armor: StatRange,
}

/// Generation ranges for every species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTable {
    pub human: SpeciesStats,
    pub goblin: SpeciesStats,
}

impl StatTable {
    /// Ranges for the given species.
    #[must_use]
    pub fn for_species(&self, species: Species) -> &SpeciesStats {
        match species {
            Species::Human => &self.human,
            Species::Goblin => &self.goblin,
        }
    }
}

impl Default for StatTable {
    fn default() -> Self {
        Self {
            // Humans: 16-19 attack, no bonus; 1-6 armor with +6 bonus.
            human: SpeciesStats {
                attack: StatRange::new(16, 19, 0),
                armor: StatRange::new(1, 6, 6),
            },
            // Goblins: 13-17 attack with +6 bonus; 3-7 armor, no bonus.
            goblin: SpeciesStats {
                attack: StatRange::new(13, 17, 6),
                armor: StatRange::new(3, 7, 0),
            },
        }
    }
}

/// Complete duel configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Hit points every fighter starts a round with.
    pub starting_hit_points: i32,

    /// Sides of the hit die rolled on every attack.
    pub die_sides: i32,

    /// Face of the hit die that always misses.
    pub miss_face: i32,

    /// Hit points restored by a health potion.
    pub health_potion_bonus: i32,

    /// Attack power added by an attack potion.
    pub attack_potion_bonus: i32,

    /// Armor rating added by an armor potion.
    pub armor_potion_bonus: i32,

    /// Round wins needed to take the match (2 = best of three).
    pub rounds_to_win: u8,

    /// Sides of the die used to decide initiative. Even gives `Left` the first move.
    pub initiative_die_sides: i32,

    /// Stat generation ranges per species.
    pub stats: StatTable,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            starting_hit_points: 50,
            die_sides: 6,
            miss_face: 1,
            health_potion_bonus: 15,
            attack_potion_bonus: 3,
            armor_potion_bonus: 3,
            rounds_to_win: 2,
            initiative_die_sides: 20,
            stats: StatTable::default(),
        }
    }
}

impl DuelConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DuelError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_starting_hit_points(mut self, hit_points: i32) -> Self {
        self.starting_hit_points = hit_points;
        self
    }

    #[must_use]
    pub fn with_rounds_to_win(mut self, rounds: u8) -> Self {
        self.rounds_to_win = rounds;
        self
    }

    #[must_use]
    pub fn with_hit_die(mut self, sides: i32, miss_face: i32) -> Self {
        self.die_sides = sides;
        self.miss_face = miss_face;
        self
    }

    #[must_use]
    pub fn with_potion_bonuses(mut self, health: i32, attack: i32, armor: i32) -> Self {
        self.health_potion_bonus = health;
        self.attack_potion_bonus = attack;
        self.armor_potion_bonus = armor;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: StatTable) -> Self {
        self.stats = stats;
        self
    }

    /// Check the configuration for values that cannot produce a playable duel.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_CONFIG_VALUE).contains(&self.starting_hit_points) {
            return Err(DuelError::InvalidConfig(format!(
                "starting hit points must be within 1..={MAX_CONFIG_VALUE}, got {}",
                self.starting_hit_points
            )));
        }
        check_bounded("health potion bonus", self.health_potion_bonus)?;
        check_bounded("attack potion bonus", self.attack_potion_bonus)?;
        check_bounded("armor potion bonus", self.armor_potion_bonus)?;
        if self.die_sides < 1 {
            return Err(DuelError::InvalidConfig(format!(
                "hit die needs at least one side, got {}",
                self.die_sides
            )));
        }
        if !(1..=self.die_sides).contains(&self.miss_face) {
            return Err(DuelError::InvalidConfig(format!(
                "miss face {} is not on a d{}",
                self.miss_face, self.die_sides
            )));
        }
        // Parity picks the side, which is only fair on an even die.
        if self.initiative_die_sides < 2 || self.initiative_die_sides % 2 != 0 {
            return Err(DuelError::InvalidConfig(format!(
                "initiative die needs an even number of sides, got {}",
                self.initiative_die_sides
            )));
        }
        if self.rounds_to_win == 0 {
            return Err(DuelError::InvalidConfig("rounds to win must be at least 1".into()));
        }
        for species in Species::ALL {
            let stats = self.stats.for_species(species);
            for (name, range) in [("attack", stats.attack), ("armor", stats.armor)] {
                if range.low > range.high {
                    return Err(DuelError::InvalidConfig(format!(
                        "{species} {name} range {}..={} is empty",
                        range.low, range.high
                    )));
                }
                check_bounded(&format!("{species} {name} low"), range.low)?;
                check_bounded(&format!("{species} {name} high"), range.high)?;
                check_bounded(&format!("{species} {name} bonus"), range.bonus)?;
            }
        }
        Ok(())
    }
}
