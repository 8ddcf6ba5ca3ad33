//! `TraceObserver<W>` bridges `DuelObserver` to an `OutputWriter`.

use duel_core::Tick;
use duel_fighter::CombatEvent;
use duel_sim::{Duel, DuelObserver, DuelOutcome, TickReport};

use crate::row::{EventRow, FrameRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DuelObserver`] that writes every tick's frames and every combat event
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `DuelObserver`
/// methods have no return value.  After `duel.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    names:      [String; 2],
    tick:       Tick,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    /// Create an observer backed by `writer`.  Fighter names are picked up
    /// from the duel when it starts; until then the slot labels are used.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            names:      ["P1".to_owned(), "P2".to_owned()],
            tick:       Tick::ZERO,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `duel.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Needed only when the duel was stepped manually and
    /// never reached an outcome.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the duel).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> DuelObserver for TraceObserver<W> {
    fn on_duel_start(&mut self, duel: &Duel) {
        self.names = duel.fighters().each_ref().map(|f| f.name().to_owned());
    }

    fn on_tick_start(&mut self, tick: Tick) {
        self.tick = tick;
    }

    fn on_event(&mut self, event: &CombatEvent) {
        let row = EventRow::from_event(self.tick.0, event);
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        let rows: Vec<FrameRow> = report
            .fighters
            .iter()
            .map(|s| {
                let name = &self.names[s.fighter.index()];
                FrameRow::from_snapshot(report.tick.0, report.time, name, s)
            })
            .collect();
        let result = self.writer.write_frames(&rows);
        self.store_err(result);
    }

    fn on_duel_end(&mut self, _outcome: &DuelOutcome, _duel: &Duel) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
