//! Stamina pool.

/// Current / maximum stamina plus a per-second regeneration rate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StaminaPool {
    current: f64,
    max:     f64,
    regen:   f64,
}

impl StaminaPool {
    /// A full pool.
    pub fn new(max: f64, regen_per_sec: f64) -> Self {
        Self { current: max, max, regen: regen_per_sec }
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn regen_per_sec(&self) -> f64 {
        self.regen
    }

    #[inline]
    pub fn can_afford(&self, cost: f64) -> bool {
        self.current >= cost
    }

    /// Regenerate for `dt` seconds, capped at the maximum.
    pub fn regen(&mut self, dt: f64) {
        self.current = (self.current + self.regen * dt).min(self.max);
    }

    /// Deduct `cost` if affordable.  Returns whether it was.
    pub fn try_spend(&mut self, cost: f64) -> bool {
        if self.can_afford(cost) {
            self.current -= cost;
            true
        } else {
            false
        }
    }

    /// Overwrite the current value (clamped to `[0, max]`).
    pub fn set_current(&mut self, value: f64) {
        self.current = value.clamp(0.0, self.max);
    }
}
