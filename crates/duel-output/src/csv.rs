//! CSV trace backend.
//!
//! Creates two files in the configured output directory:
//! - `frames.csv` (one row per fighter per tick)
//! - `events.csv` (one row per combat event)

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{EventRow, FrameRow, OutputResult};
use crate::writer::OutputWriter;

pub const FRAME_HEADERS: [&str; 10] = [
    "tick", "time", "fighter", "name", "phase", "phase_elapsed", "health", "stamina", "move_kind",
    "distance",
];

pub const EVENT_HEADERS: [&str; 6] = ["tick", "time", "fighter", "kind", "action", "detail"];

/// Writes a duel trace to two CSV files.
pub struct CsvWriter {
    frames:   Writer<File>,
    events:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut frames = Writer::from_path(dir.join("frames.csv"))?;
        frames.write_record(FRAME_HEADERS)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(EVENT_HEADERS)?;

        Ok(Self { frames, events, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()> {
        for row in rows {
            self.frames.write_record(&[
                row.tick.to_string(),
                format!("{:.3}", row.time),
                row.fighter.to_string(),
                row.name.clone(),
                row.phase.label().to_owned(),
                format!("{:.3}", row.phase_elapsed),
                row.health.to_string(),
                format!("{:.2}", row.stamina),
                row.move_kind.map_or_else(String::new, |k| k.label().to_owned()),
                format!("{:.3}", row.distance),
            ])?;
        }
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.time),
            row.fighter.to_string(),
            row.kind.to_owned(),
            row.action.clone().unwrap_or_default(),
            row.detail.clone(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
