//! One fixed step of the fighter phase state machine.
//!
//! Every call first charges `dt` to the phase timer (and regenerates stamina
//! in the eligible phases), then evaluates the current phase once.  A phase
//! transition restarts the timer at zero; leftover time within the tick is
//! dropped.

use std::sync::Arc;

use duel_core::{CombatRules, DistanceModel, NodeId, Phase};
use duel_graph::{BehaviorGraph, MoveNode};

use crate::{ActionRef, EventKind, EventSink, Fighter, Strike, resolve_hit};

impl Fighter {
    /// Advance this fighter by `dt` seconds.
    ///
    /// `opponent` is only touched through hit resolution when a move enters
    /// its active window.  `now` stamps emitted events and the opponent's
    /// last-hit time.  Defeated fighters and non-positive steps do nothing.
    pub fn advance<S: EventSink + ?Sized>(
        &mut self,
        dt:       f64,
        opponent: &mut Fighter,
        distance: &mut DistanceModel,
        now:      f64,
        rules:    &CombatRules,
        sink:     &mut S,
    ) {
        if self.is_defeated() || !dt.is_finite() || dt <= 0.0 {
            return;
        }

        self.phase_elapsed += dt;
        if self.phase.regenerates_stamina() {
            self.stamina.regen(dt);
        }

        match self.phase {
            Phase::Idle     => self.tick_idle(opponent, distance, now, sink),
            Phase::Moving   => self.tick_moving(dt, distance, now, rules, sink),
            Phase::WindUp   => self.tick_windup(dt, opponent, distance, now, rules, sink),
            Phase::Active   => self.tick_active(now, sink),
            Phase::Recovery => self.tick_recovery(now, sink),
            Phase::Stunned  => self.tick_stunned(now, rules, sink),
        }
    }

    fn tick_idle<S: EventSink + ?Sized>(
        &mut self,
        opponent: &Fighter,
        distance: &DistanceModel,
        now:      f64,
        sink:     &mut S,
    ) {
        let me = self.snapshot(distance);
        let foe = opponent.snapshot(distance);
        let graph = Arc::clone(&self.graph);

        let Some(id) = graph.resolve(self.cursor, &me, &foe) else {
            return;
        };
        self.cursor = id;
        let Some(mv) = graph.action(id) else {
            return;
        };
        tracing::debug!(fighter = %self.id, action = %mv.name, "resolved next move");

        if mv.needs_range() && distance.get() > mv.reach() {
            self.bound = Some(id);
            self.enter(Phase::Moving);
            let action = ActionRef::new(id, mv);
            self.emit(sink, now, EventKind::ApproachStarted {
                action,
                distance: distance.get(),
                reach:    mv.reach(),
            });
        } else if self.stamina.try_spend(mv.cost) {
            self.start_windup(id, mv, now, sink);
        } else {
            tracing::trace!(
                fighter = %self.id,
                stamina = self.stamina.current(),
                cost = mv.cost,
                "resting",
            );
        }
    }

    fn tick_moving<S: EventSink + ?Sized>(
        &mut self,
        dt:       f64,
        distance: &mut DistanceModel,
        now:      f64,
        rules:    &CombatRules,
        sink:     &mut S,
    ) {
        let graph = Arc::clone(&self.graph);
        let Some((id, mv)) = bound_in(self.bound, &graph) else {
            self.release_to_idle();
            return;
        };

        distance.close(rules.approach_speed * dt);
        if distance.get() > mv.reach() && !distance.at_floor() {
            return;
        }

        if self.stamina.try_spend(mv.cost) {
            self.start_windup(id, mv, now, sink);
        } else {
            self.emit(sink, now, EventKind::ApproachAbandoned { action: ActionRef::new(id, mv) });
            self.release_to_idle();
        }
    }

    fn tick_windup<S: EventSink + ?Sized>(
        &mut self,
        dt:       f64,
        opponent: &mut Fighter,
        distance: &mut DistanceModel,
        now:      f64,
        rules:    &CombatRules,
        sink:     &mut S,
    ) {
        let graph = Arc::clone(&self.graph);
        let Some((id, mv)) = bound_in(self.bound, &graph) else {
            self.release_to_idle();
            return;
        };

        // Displacement is spread evenly over the wind-up; the final partial
        // tick only covers what is left of it.
        if mv.windup > 0.0 {
            let before = self.phase_elapsed - dt;
            let span = dt.min((mv.windup - before).max(0.0));
            if mv.dash > 0.0 {
                distance.close(mv.dash / mv.windup * span);
            }
            if mv.retreat > 0.0 {
                distance.open(mv.retreat / mv.windup * span);
            }
        }

        if !self.phase_done(mv.windup) {
            return;
        }

        if mv.needs_range() && distance.get() > mv.range {
            self.emit(sink, now, EventKind::Whiffed {
                action:   ActionRef::new(id, mv),
                distance: distance.get(),
                range:    mv.range,
            });
            self.poise_damage = 0.0;
            self.release_to_idle();
            return;
        }

        self.enter(Phase::Active);
        self.emit(sink, now, EventKind::MoveActivated { action: ActionRef::new(id, mv) });
        let strike = Strike { attacker: self.id, id, mv };
        let outcome = resolve_hit(strike, opponent, distance, now, rules, sink);
        tracing::trace!(fighter = %self.id, ?outcome, "hit check");
    }

    fn tick_active<S: EventSink + ?Sized>(&mut self, now: f64, sink: &mut S) {
        let graph = Arc::clone(&self.graph);
        let Some((id, mv)) = bound_in(self.bound, &graph) else {
            self.release_to_idle();
            return;
        };
        if !self.phase_done(mv.active) {
            return;
        }

        match mv.next {
            Some(next) => {
                self.cursor = next;
                self.poise_damage = 0.0;
                self.emit(sink, now, EventKind::ComboCancel { action: ActionRef::new(id, mv), next });
                self.release_to_idle();
            }
            None => self.enter(Phase::Recovery),
        }
    }

    fn tick_recovery<S: EventSink + ?Sized>(&mut self, now: f64, sink: &mut S) {
        let graph = Arc::clone(&self.graph);
        let Some((id, mv)) = bound_in(self.bound, &graph) else {
            self.release_to_idle();
            return;
        };
        if !self.phase_done(mv.recovery) {
            return;
        }

        self.cursor = mv.next.unwrap_or(graph.root());
        self.poise_damage = 0.0;
        self.emit(sink, now, EventKind::MoveFinished { action: ActionRef::new(id, mv) });
        self.release_to_idle();
    }

    fn tick_stunned<S: EventSink + ?Sized>(&mut self, now: f64, rules: &CombatRules, sink: &mut S) {
        let remaining = self.stun_duration - self.phase_elapsed;
        if remaining > rules.reversal_min_remaining && self.stamina.try_spend(rules.reversal_cost) {
            self.emit(sink, now, EventKind::RecoveryReversal { cost: rules.reversal_cost, remaining });
            self.enter(Phase::Idle);
            return;
        }
        if self.phase_done(self.stun_duration) {
            self.emit(sink, now, EventKind::StunRecovered);
            self.enter(Phase::Idle);
        }
    }

    /// Bind `mv` and begin its wind-up.  Stamina has already been paid.
    fn start_windup<S: EventSink + ?Sized>(
        &mut self,
        id:   NodeId,
        mv:   &MoveNode,
        now:  f64,
        sink: &mut S,
    ) {
        self.bound = Some(id);
        self.poise_damage = 0.0;
        self.enter(Phase::WindUp);
        self.emit(sink, now, EventKind::MoveStarted { action: ActionRef::new(id, mv) });
    }
}

/// The bound move looked up in `graph`.
#[inline]
fn bound_in(bound: Option<NodeId>, graph: &BehaviorGraph) -> Option<(NodeId, &MoveNode)> {
    let id = bound?;
    graph.action(id).map(|mv| (id, mv))
}
