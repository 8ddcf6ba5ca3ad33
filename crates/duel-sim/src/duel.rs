//! The `Duel` struct and its tick loop.

use duel_core::{DistanceModel, DuelConfig, FighterId, SimClock};
use duel_fighter::{CombatEvent, Fighter};

use crate::{DuelObserver, DuelOutcome, TickReport};

/// A two-fighter duel on a fixed time step.
///
/// Each tick advances both fighters in the configured
/// [`UpdateOrder`][duel_core::UpdateOrder], forwards the tick's events to
/// the observer, reports the post-update state and checks for a knockout or
/// the time limit.
///
/// Create via [`DuelBuilder`][crate::DuelBuilder].
pub struct Duel {
    /// Step, time limit, initial distance, update order and rules.
    pub config: DuelConfig,

    /// Tick counter; `clock.elapsed_secs()` is the time of the next tick.
    pub clock: SimClock,

    pub(crate) fighters: [Fighter; 2],
    pub(crate) distance: DistanceModel,
    pub(crate) outcome:  Option<DuelOutcome>,

    /// Events emitted during the current tick, drained to the observer
    /// before the tick ends.
    pub(crate) events: Vec<CombatEvent>,
}

impl Duel {
    // ── Accessors ─────────────────────────────────────────────────────────

    /// `FighterId` can only name slot 0 or 1, so this never goes out of bounds.
    #[inline]
    pub fn fighter(&self, id: FighterId) -> &Fighter {
        &self.fighters[id.index()]
    }

    #[inline]
    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    #[inline]
    pub fn distance(&self) -> &DistanceModel {
        &self.distance
    }

    /// `None` while the duel is still running.
    #[inline]
    pub fn outcome(&self) -> Option<DuelOutcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Current state as a report stamped with the clock's current tick.
    pub fn report(&self) -> TickReport {
        TickReport {
            tick:     self.clock.current_tick,
            time:     self.clock.elapsed_secs(),
            distance: self.distance.get(),
            fighters: [
                self.fighters[0].snapshot(&self.distance),
                self.fighters[1].snapshot(&self.distance),
            ],
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the duel is decided and return the outcome.
    ///
    /// Calls [`DuelObserver::on_duel_start`] first.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: DuelObserver>(&mut self, observer: &mut O) -> DuelOutcome {
        observer.on_duel_start(self);
        loop {
            if let Some(outcome) = self.step(observer) {
                return outcome;
            }
        }
    }

    /// Run at most `n` ticks, stopping early once the duel is decided.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: DuelObserver>(&mut self, n: u64, observer: &mut O) -> Option<DuelOutcome> {
        for _ in 0..n {
            if let Some(outcome) = self.step(observer) {
                return Some(outcome);
            }
        }
        self.outcome
    }

    /// Advance one tick.  Returns the outcome once decided; a decided duel
    /// no longer advances.
    pub fn step<O: DuelObserver>(&mut self, observer: &mut O) -> Option<DuelOutcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        let tick = self.clock.current_tick;
        let now = self.clock.elapsed_secs();
        observer.on_tick_start(tick);

        for slot in self.config.update_order.sequence() {
            let [a, b] = &mut self.fighters;
            let (me, foe) = if slot == 0 { (a, b) } else { (b, a) };
            me.advance(
                self.config.tick_secs,
                foe,
                &mut self.distance,
                now,
                &self.config.rules,
                &mut self.events,
            );
        }

        for event in self.events.drain(..) {
            tracing::trace!(%event, "combat event");
            observer.on_event(&event);
        }

        let report = self.report();
        tracing::trace!(%report, "tick end");
        observer.on_tick_end(&report);

        self.clock.advance();
        self.outcome = self.decide();
        if let Some(outcome) = &self.outcome {
            tracing::debug!(%outcome, tick = %tick, "duel over");
            observer.on_duel_end(outcome, self);
        }
        self.outcome
    }

    // ── Termination ───────────────────────────────────────────────────────

    fn decide(&self) -> Option<DuelOutcome> {
        let [a, b] = &self.fighters;
        match (a.is_defeated(), b.is_defeated()) {
            (true, true) => Some(DuelOutcome::DoubleKnockout),
            (true, false) => Some(DuelOutcome::Victory { winner: b.id(), loser: a.id() }),
            (false, true) => Some(DuelOutcome::Victory { winner: a.id(), loser: b.id() }),
            (false, false) if self.clock.current_tick >= self.config.end_tick() => {
                Some(DuelOutcome::Timeout)
            }
            (false, false) => None,
        }
    }
}
