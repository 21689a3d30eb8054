//! # fantasy-duel
//!
//! Combat engine and match orchestration for a two-player fantasy duel:
//! a human and/or goblin fighter trade blows, drink potions, and fight
//! best-of-three rounds.
//!
//! ## Design Principles
//!
//! 1. **Pure Engine**: The combat rules do no I/O. Audio, images and
//!    screen choreography belong to the presentation layer, which reads
//!    fighter stats and the event history.
//!
//! 2. **Injected Randomness**: Every draw goes through `RandomSource`.
//!    A seeded `GameRng` makes whole matches replayable; `FixedRolls` and
//!    `ScriptedRolls` pin outcomes in tests.
//!
//! 3. **No-op Guards**: Self-attacks, ungated stat changes and empty
//!    potions are silently ignored rather than reported as errors.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration, actions, events, errors
//! - `combat`: Fighter generation, attack resolution, potion effects
//! - `rules`: Defeat and victory checks, initiative, `RulesEngine` trait
//! - `duel`: The match orchestrator and its snapshots

pub mod core;
pub mod combat;
pub mod rules;
pub mod duel;

// Re-export commonly used types
pub use crate::core::{
    DuelAction, DuelConfig, DuelError, DuelEvent, EventRecord,
    FixedRolls, GameRng, GameRngState, RandomSource, ScriptedRolls,
    Side, SideMap, SpeciesStats, StatRange, StatTable,
};

pub use crate::combat::{
    consume_potion, create_fighter, resolve_attack,
    AttackOutcome, AttackResult, Fighter, FighterId, PotionEffect, PotionKind, Species,
};

pub use crate::rules::{is_defeated, MatchResult, RulesEngine};

pub use crate::duel::{ActionOutcome, Duel, DuelSnapshot, FighterSetup, MatchState, Phase, TurnOutcome};
