//! Combat engine: fighter generation, attacks and potions.
//!
//! Pure logic with no I/O. Every random draw goes through a caller-supplied
//! [`RandomSource`](crate::core::RandomSource), so outcomes are fully
//! reproducible under a seeded or scripted source.
//!
//! ## Example
//!
//! ```
//! use fantasy_duel::combat::{create_fighter, resolve_attack, FighterId, PotionKind, Species};
//! use fantasy_duel::core::{DuelConfig, FixedRolls};
//!
//! let config = DuelConfig::default();
//! let mut rolls = FixedRolls::max();
//!
//! let grok = create_fighter(FighterId(1), "Grok", Species::Goblin, PotionKind::None, &config, &mut rolls);
//! let mut ada = create_fighter(FighterId(2), "Ada", Species::Human, PotionKind::Armor, &config, &mut rolls);
//!
//! // 23 attack against 12 armor
//! let outcome = resolve_attack(&grok, &mut ada, &config, &mut rolls);
//! assert_eq!(outcome.damage(), 11);
//! assert_eq!(ada.hit_points(), 39);
//! ```

mod species;
mod fighter;
mod generation;
mod attack;
mod potion;

pub use species::{PotionKind, Species};
pub use fighter::{Fighter, FighterId};
pub use generation::create_fighter;
pub use attack::{resolve_attack, AttackOutcome, AttackResult};
pub use potion::{consume_potion, PotionEffect};
