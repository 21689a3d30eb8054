//! Match phases.

use serde::{Deserialize, Serialize};

/// Where a match currently stands.
///
/// ```text
/// NewGame -> Setup -> Ready -> Combat -> BetweenRounds -> Ready -> Combat ...
///                                    \-> MatchOver -> (start_match) Setup
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No match has been started.
    #[default]
    NewGame,
    /// Each side enters a name, species and potion.
    Setup,
    /// Both fighters are built; waiting for the round to begin.
    Ready,
    /// Sides alternate attacking or drinking.
    Combat,
    /// A round has been decided; each side picks a fresh potion.
    BetweenRounds,
    /// A side has won enough rounds.
    MatchOver,
}

impl Phase {
    /// True while a match is in progress.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Phase::NewGame | Phase::MatchOver)
    }
}
