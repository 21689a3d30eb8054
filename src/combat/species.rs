//! Species and potion kinds.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::DuelError;

/// A fighter's species. Humans get an armor bonus, goblins an attack bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Human,
    Goblin,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Human, Species::Goblin];
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Species::Human => write!(f, "Human"),
            Species::Goblin => write!(f, "Goblin"),
        }
    }
}

impl FromStr for Species {
    type Err = DuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Species::Human),
            "goblin" => Ok(Species::Goblin),
            _ => Err(DuelError::UnknownSpecies(s.to_string())),
        }
    }
}

/// A one-shot potion. A fighter holds at most one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PotionKind {
    #[default]
    None,
    Health,
    Attack,
    Armor,
}

impl PotionKind {
    /// True for any potion other than `None`.
    #[must_use]
    pub const fn is_some(self) -> bool {
        !matches!(self, PotionKind::None)
    }
}

impl std::fmt::Display for PotionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PotionKind::None => write!(f, "no"),
            PotionKind::Health => write!(f, "health"),
            PotionKind::Attack => write!(f, "attack power"),
            PotionKind::Armor => write!(f, "armor rating"),
        }
    }
}

impl FromStr for PotionKind {
    type Err = DuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(PotionKind::None),
            "health" => Ok(PotionKind::Health),
            "attack" => Ok(PotionKind::Attack),
            "armor" => Ok(PotionKind::Armor),
            _ => Err(DuelError::UnknownPotion(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_species() {
        assert_eq!("Goblin".parse::<Species>(), Ok(Species::Goblin));
        assert_eq!(" human ".parse::<Species>(), Ok(Species::Human));
        assert_eq!(
            "elf".parse::<Species>(),
            Err(DuelError::UnknownSpecies("elf".into()))
        );
    }

    #[test]
    fn test_parse_potion() {
        assert_eq!("ARMOR".parse::<PotionKind>(), Ok(PotionKind::Armor));
        assert_eq!("".parse::<PotionKind>(), Ok(PotionKind::None));
        assert!(matches!(
            "mana".parse::<PotionKind>(),
            Err(DuelError::UnknownPotion(_))
        ));
    }

    #[test]
    fn test_potion_display() {
        assert_eq!(format!("{} potion", PotionKind::Attack), "attack power potion");
        assert!(!PotionKind::None.is_some());
        assert!(PotionKind::Health.is_some());
        assert_eq!(PotionKind::default(), PotionKind::None);
    }
}
