//! Integration tests for duel-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use duel_core::{FighterId, Phase};
    use duel_graph::MoveKind;

    use crate::csv::{CsvWriter, EVENT_HEADERS, FRAME_HEADERS};
    use crate::row::{EventRow, FrameRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn frame(fighter: FighterId, tick: u64) -> FrameRow {
        FrameRow {
            tick,
            time:          tick as f64 * 0.1,
            fighter,
            name:          "Swift".into(),
            phase:         Phase::WindUp,
            phase_elapsed: 0.2,
            health:        185,
            stamina:       70.0,
            move_kind:     Some(MoveKind::Attack),
            distance:      1.25,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("frames.csv").exists());
        assert!(dir.path().join("events.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(headers(dir.path().join("frames.csv")), FRAME_HEADERS);
        assert_eq!(headers(dir.path().join("events.csv")), EVENT_HEADERS);
    }

    #[test]
    fn csv_frame_columns() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_frames(&[frame(FighterId::FIRST, 7), frame(FighterId::SECOND, 7)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "7");
        assert_eq!(&rows[0][1], "0.700");
        assert_eq!(&rows[0][2], "P1");
        assert_eq!(&rows[1][2], "P2");
        assert_eq!(&rows[0][4], "windup");
        assert_eq!(&rows[0][6], "185");
        assert_eq!(&rows[0][7], "70.00");
        assert_eq!(&rows[0][8], "attack");
        assert_eq!(&rows[0][9], "1.250");
    }

    #[test]
    fn csv_idle_frame_has_empty_move() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let row = FrameRow { phase: Phase::Idle, move_kind: None, ..frame(FighterId::FIRST, 0) };
        w.write_frames(&[row]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][4], "idle");
        assert_eq!(&rows[0][8], "");
    }

    #[test]
    fn csv_event_columns() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_event(&EventRow {
            tick:    3,
            time:    0.3,
            fighter: FighterId::SECOND,
            kind:    "stun_recovered",
            action:  None,
            detail:  "recovers from stun".into(),
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][2], "P2");
        assert_eq!(&rows[0][3], "stun_recovered");
        assert_eq!(&rows[0][4], "");
        assert_eq!(&rows[0][5], "recovers from stun");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_frames_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_frames(&[]).unwrap();
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

// ── TraceObserver ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use std::io;
    use std::sync::Arc;

    use tempfile::TempDir;

    use duel_core::DuelConfig;
    use duel_fighter::FighterStats;
    use duel_graph::{BehaviorGraph, GraphBuilder, MoveSpec};
    use duel_sim::{DuelBuilder, DuelOutcome, FighterSetup};

    use crate::csv::CsvWriter;
    use crate::observer::TraceObserver;
    use crate::row::{EventRow, FrameRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn graph(spec: MoveSpec) -> Arc<BehaviorGraph> {
        Arc::new(GraphBuilder::new("start").action("start", spec).build().unwrap())
    }

    fn duel(limit: f64) -> duel_sim::Duel {
        DuelBuilder::new(
            DuelConfig { time_limit_secs: limit, initial_distance: 1.0, ..DuelConfig::default() },
            FighterSetup::new("Striker", graph(MoveSpec::attack("Chop")), FighterStats::new(200)),
            FighterSetup::new(
                "Post",
                graph(MoveSpec::wait("Watch").range(0.0).cost(1_000.0)),
                FighterStats::new(200),
            ),
        )
        .build()
        .unwrap()
    }

    /// Fails every write after the first `ok` calls.
    struct Flaky {
        ok:     usize,
        calls:  usize,
        frames: Vec<FrameRow>,
    }

    impl Flaky {
        fn check(&mut self) -> OutputResult<()> {
            self.calls += 1;
            if self.calls > self.ok {
                Err(io::Error::other(format!("write #{} failed", self.calls)).into())
            } else {
                Ok(())
            }
        }
    }

    impl OutputWriter for Flaky {
        fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()> {
            self.frames.extend_from_slice(rows);
            self.check()
        }
        fn write_event(&mut self, _row: &EventRow) -> OutputResult<()> {
            self.check()
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let mut duel = duel(1.0);
        let dir = TempDir::new().unwrap();
        let mut obs = TraceObserver::new(CsvWriter::new(dir.path()).unwrap());
        assert_eq!(duel.run(&mut obs), DuelOutcome::Timeout);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // 10 ticks × 2 fighters
        let mut rdr = csv::Reader::from_path(dir.path().join("frames.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 20);
        assert_eq!(&rows[0][3], "Striker");
        assert_eq!(&rows[1][3], "Post");
        assert_eq!(&rows[19][0], "9");

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let events: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&events[0][0], "0");
        assert_eq!(&events[0][3], "move_started");
        assert_eq!(&events[0][4], "Chop");
        assert!(events.iter().any(|r| &r[3] == "hit_landed"));
    }

    #[test]
    fn keeps_first_error_only() {
        let mut duel = duel(0.5);
        let mut obs = TraceObserver::new(Flaky { ok: 2, calls: 0, frames: Vec::new() });
        duel.run(&mut obs);

        let err = obs.take_error().unwrap();
        assert!(matches!(err, OutputError::Io(ref e) if e.to_string() == "write #3 failed"));
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.frames.len(), 10);
    }

    #[test]
    fn slot_labels_without_run() {
        let mut duel = duel(1.0);
        let mut obs = TraceObserver::new(Flaky { ok: usize::MAX, calls: 0, frames: Vec::new() });
        duel.run_ticks(1, &mut obs);
        obs.finish().unwrap();
        let writer = obs.into_writer();
        assert_eq!(writer.frames[0].name, "P1");
        assert_eq!(writer.frames[1].name, "P2");
    }
}
