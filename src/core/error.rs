//! Error types.
//!
//! The combat engine itself never fails: self-targeted attacks, ungated stat
//! changes and empty potions are silent no-ops. Errors are reserved for bad
//! input at the edges (configuration, parsing user text, snapshots) and for
//! orchestrator calls made out of order.

use super::action::DuelAction;
use crate::duel::Phase;

/// Errors surfaced by configuration, parsing and match orchestration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DuelError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    #[error("unknown species: {0:?}")]
    UnknownSpecies(String),

    #[error("unknown potion: {0:?}")]
    UnknownPotion(String),

    #[error("operation requires phase {expected:?}, but the duel is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[error("illegal action {action:?}: {reason}")]
    IllegalAction {
        action: DuelAction,
        reason: &'static str,
    },

    #[error("snapshot error: {0}")]
    Snapshot(String),
}

pub type Result<T> = std::result::Result<T, DuelError>;
