//! One-dimensional separation between the two fighters.

use std::fmt;

/// A single scalar distance, never below `floor`.
///
/// Both fighters mutate the same model within a tick (approach, dash,
/// retreat, knockback) and read it for range checks.  Every mutator
/// re-applies the floor, so no sequence of calls can observe a smaller value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceModel {
    value: f64,
    floor: f64,
}

impl DistanceModel {
    /// Create a model at `initial`, clamped up to `floor`.
    pub fn new(initial: f64, floor: f64) -> Self {
        Self { value: initial.max(floor), floor }
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// `true` when the fighters cannot get any closer.
    #[inline]
    pub fn at_floor(&self) -> bool {
        self.value <= self.floor
    }

    /// Move the fighters `amount` closer together.
    pub fn close(&mut self, amount: f64) {
        self.value = (self.value - amount).max(self.floor);
    }

    /// Move the fighters `amount` further apart.
    pub fn open(&mut self, amount: f64) {
        self.value = (self.value + amount).max(self.floor);
    }

    /// Force the separation up to at least `target`.  Never pulls the
    /// fighters closer.  Returns `true` if the distance changed.
    pub fn push_to_at_least(&mut self, target: f64) -> bool {
        if self.value < target {
            self.value = target.max(self.floor);
            true
        } else {
            false
        }
    }
}

impl fmt::Display for DistanceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}m", self.value)
    }
}
