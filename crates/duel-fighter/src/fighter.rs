//! Fighter state, construction, and read accessors.

use std::sync::Arc;

use duel_core::{DistanceModel, FighterId, NodeId, Phase, PHASE_EPSILON};
use duel_graph::{BehaviorGraph, FighterSnapshot, MoveNode};

use crate::{CombatEvent, EventKind, EventSink, FighterError, FighterResult, StaminaPool};

// ── FighterStats ──────────────────────────────────────────────────────────────

/// Resource pool sizes for one fighter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterStats {
    pub max_health:    i32,
    pub max_stamina:   f64,
    /// Stamina regained per second while idle, moving or recovering.
    pub stamina_regen: f64,
}

impl FighterStats {
    /// `max_health` with the reference stamina pool (100, +20/s).
    pub fn new(max_health: i32) -> Self {
        Self { max_health, max_stamina: 100.0, stamina_regen: 20.0 }
    }

    pub fn with_stamina(mut self, max_stamina: f64, stamina_regen: f64) -> Self {
        self.max_stamina = max_stamina;
        self.stamina_regen = stamina_regen;
        self
    }

    pub fn validate(&self) -> FighterResult<()> {
        if self.max_health <= 0 {
            return Err(FighterError::InvalidStat {
                field: "max_health",
                value: self.max_health as f64,
            });
        }
        if !self.max_stamina.is_finite() || self.max_stamina <= 0.0 {
            return Err(FighterError::InvalidStat { field: "max_stamina", value: self.max_stamina });
        }
        if !self.stamina_regen.is_finite() || self.stamina_regen < 0.0 {
            return Err(FighterError::InvalidStat {
                field: "stamina_regen",
                value: self.stamina_regen,
            });
        }
        Ok(())
    }
}

// ── Fighter ───────────────────────────────────────────────────────────────────

/// One combatant: resource pools plus the phase state machine that walks a
/// [`BehaviorGraph`].
///
/// A fighter is mutated only by its own [`advance`][Fighter::advance] and by
/// the opponent's hit resolution (through [`take_damage`][Fighter::take_damage]).
///
/// Invariant: `bound` is `Some` exactly when `phase` is one of `Moving`,
/// `WindUp`, `Active`, `Recovery`.
#[derive(Debug, Clone)]
pub struct Fighter {
    pub(crate) id:            FighterId,
    pub(crate) name:          String,
    pub(crate) graph:         Arc<BehaviorGraph>,
    pub(crate) max_health:    i32,
    pub(crate) health:        i32,
    pub(crate) phase:         Phase,
    pub(crate) phase_elapsed: f64,
    pub(crate) bound:         Option<NodeId>,
    pub(crate) cursor:        NodeId,
    pub(crate) poise_damage:  f64,
    pub(crate) stun_duration: f64,
    pub(crate) stamina:       StaminaPool,
    pub(crate) last_hit_at:   Option<f64>,
}

impl Fighter {
    /// Create an idle fighter at full health and stamina, with its cursor on
    /// the graph root.
    pub fn new(
        id:    FighterId,
        name:  impl Into<String>,
        graph: Arc<BehaviorGraph>,
        stats: FighterStats,
    ) -> FighterResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(FighterError::EmptyName);
        }
        stats.validate()?;
        let cursor = graph.root();
        Ok(Self {
            id,
            name,
            graph,
            max_health:    stats.max_health,
            health:        stats.max_health,
            phase:         Phase::Idle,
            phase_elapsed: 0.0,
            bound:         None,
            cursor,
            poise_damage:  0.0,
            stun_duration: 0.0,
            stamina:       StaminaPool::new(stats.max_stamina, stats.stamina_regen),
            last_hit_at:   None,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> FighterId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn graph(&self) -> &Arc<BehaviorGraph> {
        &self.graph
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[inline]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds spent in the current phase.
    #[inline]
    pub fn phase_elapsed(&self) -> f64 {
        self.phase_elapsed
    }

    /// Id of the bound move, if any.
    #[inline]
    pub fn bound_action(&self) -> Option<NodeId> {
        self.bound
    }

    /// The bound move, if any.
    pub fn bound_move(&self) -> Option<&MoveNode> {
        self.bound.and_then(|id| self.graph.action(id))
    }

    /// Where graph traversal resumes the next time the fighter is idle.
    #[inline]
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// Poise damage accumulated since the current move (or stagger) began.
    #[inline]
    pub fn poise_damage(&self) -> f64 {
        self.poise_damage
    }

    /// Total stun duration, only while stunned.
    pub fn stun_duration(&self) -> Option<f64> {
        (self.phase == Phase::Stunned).then_some(self.stun_duration)
    }

    #[inline]
    pub fn stamina(&self) -> &StaminaPool {
        &self.stamina
    }

    /// Simulated time of the last damage taken.
    #[inline]
    pub fn last_hit_at(&self) -> Option<f64> {
        self.last_hit_at
    }

    /// Toughness currently protecting the fighter: the bound move's value
    /// during wind-up and active, zero otherwise.
    pub fn current_toughness(&self) -> f64 {
        if !self.phase.has_poise_protection() {
            return 0.0;
        }
        self.bound_move().map_or(0.0, |m| m.toughness)
    }

    /// Decision-relevant copy of this fighter's state.
    pub fn snapshot(&self, distance: &DistanceModel) -> FighterSnapshot {
        FighterSnapshot {
            fighter:       self.id,
            health:        self.health,
            max_health:    self.max_health,
            stamina:       self.stamina.current(),
            max_stamina:   self.stamina.max(),
            phase:         self.phase,
            phase_elapsed: self.phase_elapsed,
            move_kind:     self.bound_move().map(|m| m.kind),
            distance:      distance.get(),
        }
    }

    // ── Internal transitions ──────────────────────────────────────────────

    /// Switch phase and restart the phase timer.
    pub(crate) fn enter(&mut self, phase: Phase) {
        tracing::debug!(fighter = %self.id, from = %self.phase, to = %phase, "phase change");
        self.phase = phase;
        self.phase_elapsed = 0.0;
    }

    /// Has the current phase lasted `duration`?
    #[inline]
    pub(crate) fn phase_done(&self, duration: f64) -> bool {
        self.phase_elapsed + PHASE_EPSILON >= duration
    }

    /// Drop the bound move and go idle.
    pub(crate) fn release_to_idle(&mut self) {
        self.bound = None;
        self.enter(Phase::Idle);
    }

    /// Break the current move: stunned for `duration`, cursor back to root.
    pub(crate) fn enter_stunned(&mut self, duration: f64) {
        self.bound = None;
        self.cursor = self.graph.root();
        self.poise_damage = 0.0;
        self.stun_duration = duration;
        self.enter(Phase::Stunned);
    }

    pub(crate) fn emit<S: EventSink + ?Sized>(&self, sink: &mut S, time: f64, kind: EventKind) {
        sink.emit(CombatEvent { time, fighter: self.id, kind });
    }
}
