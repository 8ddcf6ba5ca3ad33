//! Read-only fighter state passed to condition predicates.

use duel_core::{FighterId, Phase};

use crate::MoveKind;

/// A copy of the decision-relevant parts of one fighter's state, taken at
/// the moment a graph is traversed.
///
/// Conditions receive two of these (self, opponent).  Because they are plain
/// copies, a predicate cannot mutate either fighter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FighterSnapshot {
    pub fighter:       FighterId,
    pub health:        i32,
    pub max_health:    i32,
    pub stamina:       f64,
    pub max_stamina:   f64,
    pub phase:         Phase,
    /// Seconds spent in `phase` so far.
    pub phase_elapsed: f64,
    /// Kind of the bound move, if any.
    pub move_kind:     Option<MoveKind>,
    /// Current separation between the two fighters.
    pub distance:      f64,
}

impl FighterSnapshot {
    /// Health as a fraction of maximum, clamped to `[0, 1]`.
    pub fn health_ratio(&self) -> f64 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health as f64 / self.max_health as f64).clamp(0.0, 1.0)
    }

    /// Stamina as a fraction of maximum, clamped to `[0, 1]`.
    pub fn stamina_ratio(&self) -> f64 {
        if self.max_stamina <= 0.0 {
            return 0.0;
        }
        (self.stamina / self.max_stamina).clamp(0.0, 1.0)
    }

    /// `true` while a landed hit would be eligible to interrupt this fighter.
    #[inline]
    pub fn is_punishable(&self) -> bool {
        self.phase.is_interruptible()
    }
}
