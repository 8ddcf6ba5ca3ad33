//! timeline — heavy axe vs. swift sword on the frame-stepped duel engine.
//!
//! Runs one duel to completion and logs every combat event through
//! `tracing`.  Set `RUST_LOG=debug` for per-tick status lines.
//!
//! ```text
//! timeline [--config duel.json] [--out output/timeline]
//! ```
//!
//! `--config` loads a `DuelConfig` from JSON (missing fields keep their
//! defaults).  `--out` additionally writes `frames.csv` and `events.csv`
//! to the given directory.

mod movesets;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use duel_core::{DuelConfig, FighterId, Tick};
use duel_fighter::{CombatEvent, FighterStats};
use duel_output::{CsvWriter, TraceObserver};
use duel_sim::{Duel, DuelBuilder, DuelObserver, DuelOutcome, FighterSetup, TickReport};

// ── Constants ─────────────────────────────────────────────────────────────────

const HEAVY_NAME: &str = "Zhao the Axeman";
const SWIFT_NAME: &str = "Zhang the Swordsman";
const MAX_HEALTH: i32  = 200;

// ── Command line ──────────────────────────────────────────────────────────────

/// Heavy axe vs. swift sword, stepped at a fixed rate until someone falls.
#[derive(Parser, Debug)]
#[command(name = "timeline")]
struct Args {
    /// JSON `DuelConfig`; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for `frames.csv` and `events.csv`
    #[arg(long)]
    out: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<DuelConfig> {
    let Some(path) = path else {
        return Ok(DuelConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs the fight and optionally forwards everything to a CSV trace.
struct ConsoleObserver {
    trace:  Option<TraceObserver<CsvWriter>>,
    names:  [String; 2],
    events: usize,
    ticks:  u64,
}

impl ConsoleObserver {
    fn new(trace: Option<TraceObserver<CsvWriter>>) -> Self {
        Self { trace, names: Default::default(), events: 0, ticks: 0 }
    }

    fn name(&self, id: FighterId) -> &str {
        &self.names[id.index()]
    }
}

impl DuelObserver for ConsoleObserver {
    fn on_duel_start(&mut self, duel: &Duel) {
        self.names = duel.fighters().each_ref().map(|f| f.name().to_owned());
        info!(
            first = self.name(FighterId::FIRST),
            second = self.name(FighterId::SECOND),
            distance = duel.distance().get(),
            "duel begins",
        );
        if let Some(t) = &mut self.trace {
            t.on_duel_start(duel);
        }
    }

    fn on_tick_start(&mut self, tick: Tick) {
        if let Some(t) = &mut self.trace {
            t.on_tick_start(tick);
        }
    }

    fn on_event(&mut self, event: &CombatEvent) {
        self.events += 1;
        info!(fighter = self.name(event.fighter), "{event}");
        if let Some(t) = &mut self.trace {
            t.on_event(event);
        }
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.ticks += 1;
        debug!("{report}");
        if let Some(t) = &mut self.trace {
            t.on_tick_end(report);
        }
    }

    fn on_duel_end(&mut self, outcome: &DuelOutcome, duel: &Duel) {
        info!(%outcome, time = duel.clock.elapsed_secs(), "duel over");
        if let Some(t) = &mut self.trace {
            t.on_duel_end(outcome, duel);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    println!("=== timeline — frame-stepped duel ===");
    println!(
        "Step: {:.3} s  |  Limit: {:.1} s  |  Start distance: {:.2} m",
        config.tick_secs, config.time_limit_secs, config.initial_distance
    );
    println!();

    // 1. Movesets.
    let heavy = movesets::heavy_axe()?;
    let swift = movesets::swift_sword()?;

    // 2. Duel.
    let stats = FighterStats::new(MAX_HEALTH);
    let mut duel = DuelBuilder::new(
        config,
        FighterSetup::new(HEAVY_NAME, heavy, stats),
        FighterSetup::new(SWIFT_NAME, swift, stats),
    )
    .build()?;

    // 3. Optional CSV trace.
    let trace = match &args.out {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            Some(TraceObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };
    let mut obs = ConsoleObserver::new(trace);

    // 4. Run.
    let t0 = Instant::now();
    let outcome = duel.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.trace.as_mut().and_then(TraceObserver::take_error) {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Outcome : {outcome}");
    if let Some(winner) = outcome.winner() {
        println!("Winner  : {}", duel.fighter(winner).name());
    }
    println!(
        "Ticks   : {}  ({} events, {:.3} ms wall)",
        obs.ticks,
        obs.events,
        elapsed.as_secs_f64() * 1_000.0
    );
    if let Some(dir) = &args.out {
        println!("Trace   : {}/frames.csv, {}/events.csv", dir.display(), dir.display());
    }
    println!();

    println!("{:<22} {:>7} {:>8} {:<10}", "Fighter", "Health", "Stamina", "Phase");
    println!("{}", "-".repeat(50));
    for f in duel.fighters() {
        println!(
            "{:<22} {:>7} {:>8.1} {:<10}",
            f.name(),
            f.health(),
            f.stamina().current(),
            f.phase().label()
        );
    }

    Ok(())
}
