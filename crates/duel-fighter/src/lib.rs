//! `duel-fighter` — the per-fighter runtime state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`fighter`] | `Fighter`, `FighterStats` — state, construction, accessors        |
//! | [`machine`] | `Fighter::advance` — one fixed step of the phase state machine    |
//! | [`intake`]  | `Fighter::take_damage` — health, poise and stagger arithmetic     |
//! | [`hit`]     | `resolve_hit` — evade / block / land decision at active entry     |
//! | [`stamina`] | `StaminaPool`                                                     |
//! | [`event`]   | `CombatEvent`, `EventKind`, `EventSink`                           |
//! | [`error`]   | `FighterError`, `FighterResult<T>`                                |
//!
//! # Cross-fighter coupling
//!
//! A fighter only ever mutates its opponent through [`resolve_hit`], which
//! runs exactly once when one of its moves enters the active window.  The
//! resolver reads the defender's *current* phase, so whichever fighter is
//! advanced second in a tick sees the first one's post-update state.

pub mod error;
pub mod event;
pub mod fighter;
pub mod hit;
pub mod intake;
pub mod machine;
pub mod stamina;


pub use error::{FighterError, FighterResult};
pub use event::{ActionRef, CombatEvent, EventKind, EventSink, NullSink};
pub use fighter::{Fighter, FighterStats};
pub use hit::{HitOutcome, Strike, resolve_hit};
pub use intake::DamageOutcome;
pub use stamina::StaminaPool;
