//! Plain data row types written by trace backends.

use duel_core::{FighterId, Phase};
use duel_fighter::CombatEvent;
use duel_graph::{FighterSnapshot, MoveKind};

/// One fighter's state at the end of a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRow {
    pub tick:          u64,
    pub time:          f64,
    pub fighter:       FighterId,
    pub name:          String,
    pub phase:         Phase,
    pub phase_elapsed: f64,
    pub health:        i32,
    pub stamina:       f64,
    /// Kind of the bound move; `None` while idle or stunned.
    pub move_kind:     Option<MoveKind>,
    pub distance:      f64,
}

impl FrameRow {
    pub fn from_snapshot(tick: u64, time: f64, name: &str, s: &FighterSnapshot) -> Self {
        Self {
            tick,
            time,
            fighter:       s.fighter,
            name:          name.to_owned(),
            phase:         s.phase,
            phase_elapsed: s.phase_elapsed,
            health:        s.health,
            stamina:       s.stamina,
            move_kind:     s.move_kind,
            distance:      s.distance,
        }
    }
}

/// One combat event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub tick:    u64,
    pub time:    f64,
    pub fighter: FighterId,
    /// Snake-case event tag.
    pub kind:    &'static str,
    /// Name of the move involved, if the event refers to one.
    pub action:  Option<String>,
    /// Human-readable description.
    pub detail:  String,
}

impl EventRow {
    pub fn from_event(tick: u64, event: &CombatEvent) -> Self {
        Self {
            tick,
            time:    event.time,
            fighter: event.fighter,
            kind:    event.kind.label(),
            action:  event.kind.action().map(|a| a.name.to_string()),
            detail:  event.kind.to_string(),
        }
    }
}
