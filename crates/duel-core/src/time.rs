//! Simulation time model.
//!
//! # Design
//!
//! The canonical clock is an integer `Tick` counter.  Simulated seconds are
//! derived from it:
//!
//!   elapsed_secs = tick * tick_secs
//!
//! Deriving the duel time from an integer counter (instead of summing `dt`
//! every frame) keeps the clock free of drift over long runs.  Per-phase
//! timers inside a fighter are still accumulated in seconds, so phase
//! completion is compared with [`PHASE_EPSILON`] of slack.

use std::fmt;

use crate::{CombatRules, DuelError, DuelResult};

/// Slack used when comparing an accumulated phase timer against a duration.
///
/// Ten steps of `0.1` sum to `0.9999999999999999`; without slack a 1.0 s
/// wind-up would take eleven ticks.
pub const PHASE_EPSILON: f64 = 1e-9;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Maps the tick counter to simulated seconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated seconds per tick (the fixed step `dt`).
    pub tick_secs: f64,
    /// The current tick — advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock at tick 0 with the given step.
    pub fn new(tick_secs: f64) -> Self {
        Self { tick_secs, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulated seconds elapsed at the start of the current tick.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 * self.tick_secs
    }

    /// How many ticks are needed to cover `secs` (rounds up).
    pub fn ticks_for_secs(&self, secs: f64) -> u64 {
        if secs <= 0.0 {
            return 0;
        }
        ((secs / self.tick_secs) - PHASE_EPSILON).ceil().max(0.0) as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── UpdateOrder ───────────────────────────────────────────────────────────────

/// Which fighter is advanced first within a tick.
///
/// The second fighter always observes the first one's already-updated state
/// (phase, health, distance).  This causal ordering is part of the engine's
/// contract: changing it changes fight outcomes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdateOrder {
    #[default]
    FirstThenSecond,
    SecondThenFirst,
}

impl UpdateOrder {
    /// Slot indices in the order they are advanced.
    #[inline]
    pub fn sequence(self) -> [usize; 2] {
        match self {
            UpdateOrder::FirstThenSecond => [0, 1],
            UpdateOrder::SecondThenFirst => [1, 0],
        }
    }
}

// ── DuelConfig ────────────────────────────────────────────────────────────────

/// Top-level duel configuration.
///
/// Typically built in code or loaded from JSON/TOML by the application crate
/// (enable the `serde` feature) and passed to the duel builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DuelConfig {
    /// Fixed step in simulated seconds.  Default: 0.1.
    pub tick_secs: f64,

    /// The duel ends in a timeout once this many seconds have been simulated.
    /// Default: 60.
    pub time_limit_secs: f64,

    /// Separation between the fighters at tick 0.  Default: 3.0.
    pub initial_distance: f64,

    /// Which fighter is advanced first each tick.
    pub update_order: UpdateOrder,

    /// Engine-wide combat constants.
    pub rules: CombatRules,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            tick_secs:        0.1,
            time_limit_secs:  60.0,
            initial_distance: 3.0,
            update_order:     UpdateOrder::default(),
            rules:            CombatRules::default(),
        }
    }
}

impl DuelConfig {
    /// Reject steps, limits and distances that would make the loop undefined.
    pub fn validate(&self) -> DuelResult<()> {
        if !self.tick_secs.is_finite() || self.tick_secs <= 0.0 {
            return Err(DuelError::InvalidValue { field: "tick_secs", value: self.tick_secs });
        }
        if !self.time_limit_secs.is_finite() || self.time_limit_secs <= 0.0 {
            return Err(DuelError::InvalidValue {
                field: "time_limit_secs",
                value: self.time_limit_secs,
            });
        }
        if !self.initial_distance.is_finite() || self.initial_distance <= 0.0 {
            return Err(DuelError::InvalidValue {
                field: "initial_distance",
                value: self.initial_distance,
            });
        }
        self.rules.validate()
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_secs)
    }

    /// The tick at which the duel times out (exclusive upper bound).
    pub fn end_tick(&self) -> Tick {
        Tick(self.make_clock().ticks_for_secs(self.time_limit_secs))
    }
}
