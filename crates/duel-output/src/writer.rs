//! The `OutputWriter` trait implemented by trace backends.

use crate::{EventRow, FrameRow, OutputResult};

/// Trait implemented by trace writers.
///
/// Errors are returned to the caller; [`TraceObserver`][crate::TraceObserver]
/// keeps the first one for retrieval after the duel.
pub trait OutputWriter {
    /// Write the per-fighter rows of one tick.
    fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()>;

    /// Write one combat event.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
