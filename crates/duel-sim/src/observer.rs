//! Duel observer trait for event forwarding and data collection.

use duel_core::Tick;
use duel_fighter::CombatEvent;

use crate::{Duel, DuelOutcome, TickReport};

/// Callbacks invoked by [`Duel::step`] and [`Duel::run`].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: event printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl DuelObserver for Printer {
///     fn on_event(&mut self, event: &CombatEvent) {
///         println!("{event}");
///     }
/// }
/// ```
pub trait DuelObserver {
    /// Called once by [`Duel::run`] before the first tick.
    fn on_duel_start(&mut self, _duel: &Duel) {}

    /// Called at the very start of each tick, before either fighter moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every combat event, in emission order, after both
    /// fighters have been advanced.
    fn on_event(&mut self, _event: &CombatEvent) {}

    /// Called at the end of each tick with the post-update state.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called exactly once, on the tick the outcome is decided.
    fn on_duel_end(&mut self, _outcome: &DuelOutcome, _duel: &Duel) {}
}

/// A [`DuelObserver`] that does nothing.
pub struct NoopObserver;

impl DuelObserver for NoopObserver {}

/// Keeps every event and tick report in memory.
#[derive(Default, Debug)]
pub struct EventRecorder {
    pub events:  Vec<CombatEvent>,
    pub reports: Vec<TickReport>,
    pub outcome: Option<DuelOutcome>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events whose [`label`][duel_fighter::EventKind::label] equals `label`.
    pub fn with_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a CombatEvent> + 'a {
        self.events.iter().filter(move |e| e.kind.label() == label)
    }

    pub fn count(&self, label: &str) -> usize {
        self.with_label(label).count()
    }
}

impl DuelObserver for EventRecorder {
    fn on_event(&mut self, event: &CombatEvent) {
        self.events.push(event.clone());
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.reports.push(*report);
    }

    fn on_duel_end(&mut self, outcome: &DuelOutcome, _duel: &Duel) {
        self.outcome = Some(*outcome);
    }
}
