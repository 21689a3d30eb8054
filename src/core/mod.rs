//! Core duel types: sides, RNG, configuration, actions, errors.
//!
//! These are the building blocks shared by the combat engine and the
//! match orchestrator.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{Side, SideMap};
pub use rng::{FixedRolls, GameRng, GameRngState, RandomSource, ScriptedRolls};
pub use config::{DuelConfig, SpeciesStats, StatRange, StatTable, MAX_CONFIG_VALUE};
pub use action::{DuelAction, DuelEvent, EventRecord};
pub use error::{DuelError, Result};
