//! Damage intake: health loss, poise accumulation and stagger.

use duel_core::{CombatRules, Phase};
use duel_graph::MoveKind;

use crate::{EventKind, EventSink, Fighter};

/// What a hit did to the defender beyond the health loss.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DamageOutcome {
    /// Not interrupt-eligible: health only.
    Plain,
    /// Interrupt-eligible, but an active dodge ignores interrupts.
    Immune,
    /// Poise absorbed the hit; the move continues.
    PoiseHeld { poise: f64, toughness: f64 },
    /// Poise broken; the defender is now stunned.
    Staggered { duration: f64 },
}

impl DamageOutcome {
    #[inline]
    pub fn is_stagger(&self) -> bool {
        matches!(self, DamageOutcome::Staggered { .. })
    }
}

impl Fighter {
    /// Apply `damage` taken at `now`.
    ///
    /// Health is always reduced.  Only an `interrupt` hit feeds the poise
    /// accumulator, and it breaks the current move once the accumulator
    /// strictly exceeds [`current_toughness`][Fighter::current_toughness].
    pub fn take_damage<S: EventSink + ?Sized>(
        &mut self,
        damage:    u32,
        interrupt: bool,
        now:       f64,
        rules:     &CombatRules,
        sink:      &mut S,
    ) -> DamageOutcome {
        let amount = i32::try_from(damage).unwrap_or(i32::MAX);
        self.health = self.health.saturating_sub(amount);
        self.last_hit_at = Some(now);
        tracing::trace!(fighter = %self.id, damage, health = self.health, interrupt, "damage taken");

        if !interrupt {
            return DamageOutcome::Plain;
        }

        let dodging = self.phase == Phase::Active
            && self.bound_move().is_some_and(|m| m.kind == MoveKind::Dodge);
        if dodging {
            self.emit(sink, now, EventKind::InterruptImmune { damage });
            return DamageOutcome::Immune;
        }

        self.poise_damage += damage as f64;
        let poise = self.poise_damage;
        let toughness = self.current_toughness();

        if poise > toughness {
            let duration = rules.stun_for(damage);
            self.enter_stunned(duration);
            self.emit(sink, now, EventKind::Staggered { damage, poise, toughness, duration });
            DamageOutcome::Staggered { duration }
        } else {
            self.emit(sink, now, EventKind::PoiseHeld { damage, poise, toughness });
            DamageOutcome::PoiseHeld { poise, toughness }
        }
    }
}
