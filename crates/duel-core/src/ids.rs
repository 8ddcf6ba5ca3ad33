//! Strongly typed identifier wrappers.
//!
//! `NodeId` indexes a behavior graph's node arena; `FighterId` names one of
//! the two duel slots.  Both are `Copy + Ord + Hash`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a node in a behavior graph's arena (see `duel-graph`).
    ///
    /// Ids are only meaningful for the graph that issued them.  A lookup with
    /// a foreign or stale id misses, and traversal restarts from the root.
    pub struct NodeId(u32);
}

/// One of the two duel slots.  `FighterId::FIRST` is updated first under
/// the default [`UpdateOrder`][crate::UpdateOrder].
///
/// The slot is private: the two constants are the only values, so
/// [`index`][FighterId::index] is always a valid index into a fighter pair.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct FighterId(u8);

impl FighterId {
    pub const FIRST: FighterId = FighterId(0);
    pub const SECOND: FighterId = FighterId(1);
    pub const BOTH: [FighterId; 2] = [FighterId::FIRST, FighterId::SECOND];

    /// `0` or `1`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The other slot of the pair.
    #[inline]
    pub fn opponent(self) -> FighterId {
        FighterId(1 - self.0)
    }
}

impl From<FighterId> for u8 {
    #[inline]
    fn from(id: FighterId) -> u8 {
        id.0
    }
}

impl TryFrom<u8> for FighterId {
    type Error = InvalidSlot;
    fn try_from(n: u8) -> Result<FighterId, InvalidSlot> {
        match n {
            0 => Ok(FighterId::FIRST),
            1 => Ok(FighterId::SECOND),
            n => Err(InvalidSlot(n)),
        }
    }
}

/// A fighter slot other than 0 or 1.
#[derive(Copy, Clone, PartialEq, Eq, Debug, thiserror::Error)]
#[error("fighter slot {0} out of range (expected 0 or 1)")]
pub struct InvalidSlot(pub u8);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

impl fmt::Display for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}
