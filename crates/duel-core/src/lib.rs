//! `duel-core` — foundational types for the frame-stepped duel engine.
//!
//! This crate is a dependency of every other `duel-*` crate.  It has no
//! `duel-*` dependencies and a single required external one (`thiserror`),
//! plus optional `serde`.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `NodeId`, `FighterId`                                   |
//! | [`phase`]     | `Phase` — the six fighter states                        |
//! | [`time`]      | `Tick`, `SimClock`, `DuelConfig`, `UpdateOrder`         |
//! | [`rules`]     | `CombatRules` — engine-wide combat constants            |
//! | [`distance`]  | `DistanceModel` — floored scalar separation             |
//! | [`error`]     | `DuelError`, `DuelResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, phases and configs. |

pub mod distance;
pub mod error;
pub mod ids;
pub mod phase;
pub mod rules;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use distance::DistanceModel;
pub use error::{DuelError, DuelResult};
pub use ids::{FighterId, InvalidSlot, NodeId};
pub use phase::Phase;
pub use rules::CombatRules;
pub use time::{DuelConfig, PHASE_EPSILON, SimClock, Tick, UpdateOrder};
