//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A duel always has exactly two sides, `Left` and `Right`, matching where
//! each fighter stands on screen.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Slot index (`Left` = 0, `Right` = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Iterate over both sides.
    pub fn all() -> impl Iterator<Item = Side> {
        Self::ALL.into_iter()
    }

    /// Name shown when a player leaves their name blank.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Side::Left => "Left player",
            Side::Right => "Right player",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use fantasy_duel::core::{Side, SideMap};
///
/// let mut wins: SideMap<u8> = SideMap::with_value(0);
/// wins[Side::Right] += 1;
/// assert_eq!(wins[Side::Left], 0);
/// assert_eq!(wins[Side::Right], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Left), factory(Side::Right)],
        }
    }

    /// Create from explicit left and right values.
    pub fn from_pair(left: T, right: T) -> Self {
        Self { data: [left, right] }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Mutable access to both entries at once, in `(side, other side)` order.
    pub fn split_mut(&mut self, side: Side) -> (&mut T, &mut T) {
        let [left, right] = &mut self.data;
        match side {
            Side::Left => (left, right),
            Side::Right => (right, left),
        }
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
