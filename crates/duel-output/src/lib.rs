//! `duel-output` — duel trace writers.
//!
//! | Backend | Files created                    |
//! |---------|----------------------------------|
//! | CSV     | `frames.csv`, `events.csv`       |
//!
//! Writers implement [`OutputWriter`] and are driven by [`TraceObserver`],
//! which implements `duel_sim::DuelObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use duel_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer);
//! duel.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("trace error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{EventRow, FrameRow};
pub use writer::OutputWriter;
