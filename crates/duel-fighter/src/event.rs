//! Combat events — the engine's only observability channel.
//!
//! The state machine never prints.  It emits [`CombatEvent`]s into an
//! [`EventSink`] supplied by the caller; presentation layers decide what to
//! do with them.

use std::fmt;
use std::sync::Arc;

use duel_core::{FighterId, NodeId};
use duel_graph::{MoveKind, MoveNode};

/// A move as referenced from an event.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionRef {
    pub id:   NodeId,
    pub name: Arc<str>,
    pub kind: MoveKind,
}

impl ActionRef {
    pub fn new(id: NodeId, mv: &MoveNode) -> Self {
        Self { id, name: Arc::clone(&mv.name), kind: mv.kind }
    }
}

/// Something that happened to (or was done by) `fighter` at `time`.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatEvent {
    /// Simulated seconds at the start of the tick in which this happened.
    pub time:    f64,
    /// The fighter the event is about.  For hit events this is the attacker.
    pub fighter: FighterId,
    pub kind:    EventKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EventKind {
    /// Target out of reach; the fighter starts closing in.
    ApproachStarted { action: ActionRef, distance: f64, reach: f64 },
    /// Move bound, stamina paid, wind-up begins.
    MoveStarted { action: ActionRef },
    /// Wind-up over and in range; the active window opens.
    MoveActivated { action: ActionRef },
    /// Wind-up over but the target is out of range.  No penalty.
    Whiffed { action: ActionRef, distance: f64, range: f64 },
    /// Attack connected at full power.
    HitLanded { target: FighterId, action: ActionRef, damage: u32, interrupt: bool },
    /// Attack met an active defend; reduced damage.
    HitBlocked { target: FighterId, action: ActionRef, damage: u32 },
    /// Attack met an active dodge; nothing happens.
    HitEvaded { target: FighterId, action: ActionRef },
    /// Interrupting hit ignored by an active dodge.
    InterruptImmune { damage: u32 },
    /// Accumulated poise damage stayed within toughness.
    PoiseHeld { damage: u32, poise: f64, toughness: f64 },
    /// Poise broken; the current move is lost.
    Staggered { damage: u32, poise: f64, toughness: f64, duration: f64 },
    /// Stun cancelled early by spending stamina.
    RecoveryReversal { cost: f64, remaining: f64 },
    /// Stun ran its full course.
    StunRecovered,
    /// Active window over with a successor: recovery skipped.
    ComboCancel { action: ActionRef, next: NodeId },
    /// Recovery over.
    MoveFinished { action: ActionRef },
    /// Reached the target but could not pay for the move.
    ApproachAbandoned { action: ActionRef },
}

impl EventKind {
    /// Stable snake_case tag used by trace writers.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::ApproachStarted { .. }   => "approach_started",
            EventKind::MoveStarted { .. }       => "move_started",
            EventKind::MoveActivated { .. }     => "move_activated",
            EventKind::Whiffed { .. }           => "whiffed",
            EventKind::HitLanded { .. }         => "hit_landed",
            EventKind::HitBlocked { .. }        => "hit_blocked",
            EventKind::HitEvaded { .. }         => "hit_evaded",
            EventKind::InterruptImmune { .. }   => "interrupt_immune",
            EventKind::PoiseHeld { .. }         => "poise_held",
            EventKind::Staggered { .. }         => "staggered",
            EventKind::RecoveryReversal { .. }  => "recovery_reversal",
            EventKind::StunRecovered            => "stun_recovered",
            EventKind::ComboCancel { .. }       => "combo_cancel",
            EventKind::MoveFinished { .. }      => "move_finished",
            EventKind::ApproachAbandoned { .. } => "approach_abandoned",
        }
    }

    /// The move the event refers to, for the kinds that carry one.
    pub fn action(&self) -> Option<&ActionRef> {
        match self {
            EventKind::ApproachStarted { action, .. }
            | EventKind::MoveStarted { action }
            | EventKind::MoveActivated { action }
            | EventKind::Whiffed { action, .. }
            | EventKind::HitLanded { action, .. }
            | EventKind::HitBlocked { action, .. }
            | EventKind::HitEvaded { action, .. }
            | EventKind::ComboCancel { action, .. }
            | EventKind::MoveFinished { action }
            | EventKind::ApproachAbandoned { action } => Some(action),
            EventKind::InterruptImmune { .. }
            | EventKind::PoiseHeld { .. }
            | EventKind::Staggered { .. }
            | EventKind::RecoveryReversal { .. }
            | EventKind::StunRecovered => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::ApproachStarted { action, distance, reach } => {
                write!(f, "closing in for {} ({distance:.1}m > {reach:.1}m)", action.name)
            }
            EventKind::MoveStarted { action } => write!(f, "winds up {}", action.name),
            EventKind::MoveActivated { action } => write!(f, "{} goes active", action.name),
            EventKind::Whiffed { action, distance, range } => {
                write!(f, "{} whiffs ({distance:.1}m > {range:.1}m)", action.name)
            }
            EventKind::HitLanded { target, action, damage, interrupt } => {
                write!(f, "{} hits {target} for {damage}", action.name)?;
                if *interrupt {
                    f.write_str(" (punish)")?;
                }
                Ok(())
            }
            EventKind::HitBlocked { target, action, damage } => {
                write!(f, "{} blocked by {target}, {damage} gets through", action.name)
            }
            EventKind::HitEvaded { target, action } => {
                write!(f, "{} evaded by {target}", action.name)
            }
            EventKind::InterruptImmune { damage } => {
                write!(f, "takes {damage} while dodging, cannot be interrupted")
            }
            EventKind::PoiseHeld { damage, poise, toughness } => {
                write!(f, "poise holds ({damage} dmg, {poise:.1} <= {toughness:.1})")
            }
            EventKind::Staggered { damage, poise, toughness, duration } => write!(
                f,
                "staggered for {duration:.2}s ({damage} dmg, {poise:.1} > {toughness:.1})",
            ),
            EventKind::RecoveryReversal { cost, remaining } => {
                write!(f, "recovery reversal for {cost:.0} stamina ({remaining:.2}s of stun left)")
            }
            EventKind::StunRecovered => f.write_str("recovers from stun"),
            EventKind::ComboCancel { action, next } => {
                write!(f, "{} cancels into {next}", action.name)
            }
            EventKind::MoveFinished { action } => write!(f, "{} recovered", action.name),
            EventKind::ApproachAbandoned { action } => {
                write!(f, "too tired to start {}", action.name)
            }
        }
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.1}s] {} {}", self.time, self.fighter, self.kind)
    }
}

// ── EventSink ─────────────────────────────────────────────────────────────────

/// Receives events as the state machine produces them.
pub trait EventSink {
    fn emit(&mut self, event: CombatEvent);
}

impl EventSink for Vec<CombatEvent> {
    #[inline]
    fn emit(&mut self, event: CombatEvent) {
        self.push(event);
    }
}

/// Discards every event.
pub struct NullSink;

impl EventSink for NullSink {
    #[inline]
    fn emit(&mut self, _event: CombatEvent) {}
}
