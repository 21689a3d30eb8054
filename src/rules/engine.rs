//! Rules engine trait.
//!
//! A rules engine answers three questions about a running match:
//! - What actions are legal right now
//! - What happens when one is applied
//! - Whether the match is over

use smallvec::SmallVec;

use crate::core::Side;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// Single winner.
    Winner(Side),
}

impl MatchResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        match self {
            MatchResult::Winner(s) => *s == side,
        }
    }

    /// The winning side.
    #[must_use]
    pub fn winner(&self) -> Side {
        match self {
            MatchResult::Winner(s) => *s,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty if nobody can act right now
/// - `apply_action`: Reject anything `legal_actions` would not offer
/// - `is_terminal`: Return None while the match continues
pub trait RulesEngine {
    /// A player's choice.
    type Action: Copy + PartialEq;

    /// What applying an action produced.
    type Outcome;

    /// Rejection reason.
    type Error;

    /// Actions available to the side that is up.
    fn legal_actions(&self) -> SmallVec<[Self::Action; 2]>;

    /// Apply an action for the side that is up.
    fn apply_action(&mut self, action: Self::Action) -> Result<Self::Outcome, Self::Error>;

    /// Check if the match is over.
    fn is_terminal(&self) -> Option<MatchResult>;

    /// Whether `action` is currently legal.
    fn is_legal(&self, action: Self::Action) -> bool {
        self.legal_actions().contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_result_is_winner() {
        let result = MatchResult::Winner(Side::Right);
        assert!(!result.is_winner(Side::Left));
        assert!(result.is_winner(Side::Right));
        assert_eq!(result.winner(), Side::Right);
    }
}
