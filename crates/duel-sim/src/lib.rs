//! `duel-sim` — fixed-step driver for a two-fighter duel.
//!
//! # Tick loop
//!
//! ```text
//! until outcome is decided:
//!   ① on_tick_start(tick)
//!   ② advance fighters in UpdateOrder; the second one sees the first one's
//!      post-update state (including any hit it just took)
//!   ③ forward buffered CombatEvents to on_event
//!   ④ on_tick_end(TickReport)
//!   ⑤ knockout → Victory / DoubleKnockout; time limit reached → Timeout
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use duel_core::DuelConfig;
//! use duel_sim::{DuelBuilder, EventRecorder, FighterSetup};
//!
//! let mut duel = DuelBuilder::new(
//!     DuelConfig::default(),
//!     FighterSetup::new("Heavy", heavy_graph, FighterStats::new(200)),
//!     FighterSetup::new("Swift", swift_graph, FighterStats::new(200)),
//! )
//! .build()?;
//! let outcome = duel.run(&mut EventRecorder::default());
//! ```

pub mod builder;
pub mod duel;
pub mod error;
pub mod observer;
pub mod report;

#[cfg(test)]
mod tests;

pub use builder::{DuelBuilder, FighterSetup};
pub use duel::Duel;
pub use error::{SimError, SimResult};
pub use observer::{DuelObserver, EventRecorder, NoopObserver};
pub use report::{DuelOutcome, TickReport};
