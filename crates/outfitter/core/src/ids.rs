//! Identifiers and simulation time shared by every module.

use std::fmt;

/// Identifier of a pawn (a simulated character being dressed).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PawnId(pub u32);

impl fmt::Display for PawnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pawn#{}", self.0)
    }
}

/// Identifier of one concrete apparel item (not its definition).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Simulation time in game ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Ticks elapsed since `earlier`, saturating at zero if the clock went backwards.
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Returns true when more than `interval` ticks separate `last` from `self`.
    ///
    /// A missing `last` timestamp always counts as stale.
    pub fn is_past_interval(self, last: Option<Tick>, interval: u64) -> bool {
        match last {
            Some(last) => self.since(last) > interval,
            None => true,
        }
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_timestamp_is_always_stale() {
        assert!(Tick::ZERO.is_past_interval(None, 1900));
    }

    #[test]
    fn interval_boundary_is_exclusive() {
        let last = Some(Tick(100));
        assert!(!Tick(2000).is_past_interval(last, 1900));
        assert!(Tick(2001).is_past_interval(last, 1900));
    }

    #[test]
    fn clock_going_backwards_is_not_stale() {
        assert_eq!(Tick(5).since(Tick(10)), 0);
        assert!(!Tick(5).is_past_interval(Some(Tick(10)), 1900));
    }
}
