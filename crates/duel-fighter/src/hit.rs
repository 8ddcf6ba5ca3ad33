//! Contact resolution when a move enters its active window.

use duel_core::{CombatRules, DistanceModel, FighterId, NodeId, Phase};
use duel_graph::{MoveKind, MoveNode};

use crate::{ActionRef, CombatEvent, DamageOutcome, EventKind, EventSink, Fighter};

/// The move making contact, and who is performing it.
#[derive(Copy, Clone, Debug)]
pub struct Strike<'a> {
    pub attacker: FighterId,
    pub id:       NodeId,
    pub mv:       &'a MoveNode,
}

/// How a strike ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HitOutcome {
    /// Not an attack; nothing to resolve.
    NoContact,
    /// The defender was in an active dodge.
    Evaded,
    /// The defender was in an active defend.
    Blocked { damage: u32 },
    /// Full-power hit.
    Landed { damage: u32, interrupt: bool, intake: DamageOutcome },
}

/// Resolve `strike` against `defender`.
///
/// Reads the defender's phase as it is right now, so the result depends on
/// which fighter the driver advanced first this tick.  Knockback only ever
/// pushes the fighters apart: the distance is raised to the move's
/// knockback (halved through a block) and left alone if already farther.
pub fn resolve_hit<S: EventSink + ?Sized>(
    strike:   Strike<'_>,
    defender: &mut Fighter,
    distance: &mut DistanceModel,
    now:      f64,
    rules:    &CombatRules,
    sink:     &mut S,
) -> HitOutcome {
    let mv = strike.mv;
    if mv.kind != MoveKind::Attack {
        return HitOutcome::NoContact;
    }

    let target = defender.id();
    let action = ActionRef::new(strike.id, mv);
    let guarding = (defender.phase() == Phase::Active)
        .then(|| defender.bound_move().map(|m| m.kind))
        .flatten();

    match guarding {
        Some(MoveKind::Dodge) => {
            emit(sink, now, strike.attacker, EventKind::HitEvaded { target, action });
            HitOutcome::Evaded
        }
        Some(MoveKind::Defend) => {
            let damage = rules.blocked_damage(mv.power);
            emit(sink, now, strike.attacker, EventKind::HitBlocked { target, action, damage });
            defender.take_damage(damage, false, now, rules, sink);
            distance.push_to_at_least(mv.knockback * rules.block_knockback_ratio);
            HitOutcome::Blocked { damage }
        }
        _ => {
            let damage = mv.power;
            let interrupt = defender.phase().is_interruptible();
            emit(sink, now, strike.attacker, EventKind::HitLanded { target, action, damage, interrupt });
            let intake = defender.take_damage(damage, interrupt, now, rules, sink);
            if mv.knockback > 0.0 {
                distance.push_to_at_least(mv.knockback);
            }
            HitOutcome::Landed { damage, interrupt, intake }
        }
    }
}

#[inline]
fn emit<S: EventSink + ?Sized>(sink: &mut S, time: f64, fighter: FighterId, kind: EventKind) {
    sink.emit(CombatEvent { time, fighter, kind });
}
