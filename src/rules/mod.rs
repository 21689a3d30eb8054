//! Match rules: victory conditions, initiative, and the rules engine trait.

mod engine;
mod victory;

pub use engine::{MatchResult, RulesEngine};
pub use victory::{initiative_for_round, is_defeated, match_winner, roll_initiative, round_winner};
