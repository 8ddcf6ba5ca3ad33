//! The fighter phase enum.

use std::fmt;

/// Where a fighter is in its move timeline.
///
/// ```text
///   Idle ──► Moving ──► WindUp ──► Active ──► Recovery ──► Idle
///    │                    ▲  │        │
///    └────────────────────┘  │        └─(combo cancel)──► Idle
///                            └─(whiff)──────────────────► Idle
///   any interruptible phase ──(poise broken)──► Stunned ──► Idle
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Choosing the next move from the behavior graph.
    #[default]
    Idle,
    /// Closing distance towards the opponent before a move can start.
    Moving,
    /// Preparing a move.  Vulnerable to interrupts.
    WindUp,
    /// The move's effect window.  Hit resolution happens on entry.
    Active,
    /// Post-move lag.  Vulnerable, with no poise protection.
    Recovery,
    /// Staggered after a broken move.
    Stunned,
}

impl Phase {
    /// Stamina only regenerates while the fighter is not committed to a
    /// move's wind-up or active window and is not staggered.
    #[inline]
    pub fn regenerates_stamina(self) -> bool {
        matches!(self, Phase::Idle | Phase::Recovery | Phase::Moving)
    }

    /// Phases in which a landed hit is eligible to interrupt the defender.
    #[inline]
    pub fn is_interruptible(self) -> bool {
        matches!(self, Phase::WindUp | Phase::Recovery)
    }

    /// Phases in which the bound move's toughness protects the fighter.
    #[inline]
    pub fn has_poise_protection(self) -> bool {
        matches!(self, Phase::WindUp | Phase::Active)
    }

    /// Phases in which a move is bound to the fighter.
    #[inline]
    pub fn holds_move(self) -> bool {
        matches!(self, Phase::Moving | Phase::WindUp | Phase::Active | Phase::Recovery)
    }

    /// Short lowercase label used in traces.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle     => "idle",
            Phase::Moving   => "moving",
            Phase::WindUp   => "windup",
            Phase::Active   => "active",
            Phase::Recovery => "recovery",
            Phase::Stunned  => "stunned",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
