//! Engine-wide combat constants.

use crate::{DuelError, DuelResult};

/// Numbers the state machine and hit resolver consult that are not part of
/// any individual move.
///
/// The defaults reproduce the reference balance: a 0.5 separation floor,
/// 3 units/s approach speed, blocks letting 20% of the damage through,
/// 0.05 s of stun per point of staggering damage, and a 40-stamina
/// recovery reversal usable while more than 0.3 s of stun remains.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatRules {
    /// Minimum separation between the fighters.
    pub min_distance: f64,
    /// Closing speed (units/s) while a fighter is `Moving`.
    pub approach_speed: f64,
    /// Fraction of an attack's power that gets through a block (truncated).
    pub block_damage_ratio: f64,
    /// Fraction of an attack's knockback applied when it is blocked.
    pub block_knockback_ratio: f64,
    /// Stun seconds per point of damage in the staggering hit.
    pub stun_per_damage: f64,
    /// Stamina spent on a recovery reversal.
    pub reversal_cost: f64,
    /// A reversal is only possible while more than this much stun remains.
    pub reversal_min_remaining: f64,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            min_distance:           0.5,
            approach_speed:         3.0,
            block_damage_ratio:     0.2,
            block_knockback_ratio:  0.5,
            stun_per_damage:        0.05,
            reversal_cost:          40.0,
            reversal_min_remaining: 0.3,
        }
    }
}

impl CombatRules {
    pub fn validate(&self) -> DuelResult<()> {
        let fields = [
            ("min_distance",           self.min_distance),
            ("approach_speed",         self.approach_speed),
            ("block_damage_ratio",     self.block_damage_ratio),
            ("block_knockback_ratio",  self.block_knockback_ratio),
            ("stun_per_damage",        self.stun_per_damage),
            ("reversal_cost",          self.reversal_cost),
            ("reversal_min_remaining", self.reversal_min_remaining),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(DuelError::InvalidValue { field, value });
            }
        }
        if self.approach_speed == 0.0 {
            return Err(DuelError::Config(
                "approach_speed must be positive or Moving never ends".into(),
            ));
        }
        Ok(())
    }

    /// Damage that gets through a block of an attack with `power`.
    #[inline]
    pub fn blocked_damage(&self, power: u32) -> u32 {
        (power as f64 * self.block_damage_ratio).trunc() as u32
    }

    /// Stun duration caused by a staggering hit of `damage`.
    #[inline]
    pub fn stun_for(&self, damage: u32) -> f64 {
        self.stun_per_damage * damage as f64
    }
}
