//! Bleed tuning with documented constants
//!
//! Defaults come from `combat::constants`; a `[bleeding]` table in the
//! damage config file may override any of them.

use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    BASE_BLEED_RATE, BLEED_PERIOD_TICKS, INSTANT_LETHAL_AMMO, PASS_OUT_AMOUNT,
};
use crate::core::error::{Result, WoundError};
use crate::core::types::Tick;

/// Tunables for wound damage and bleeding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BleedTuning {
    /// Blood drained per tick for each unit of wound intensity
    ///
    /// At 250 and intensity 1.0, a 5000-blood animal is empty after 20 ticks.
    pub base_bleed_rate: f32,

    /// Blood level below which a bleeding entity dies on its next tick
    ///
    /// Compared against the level read BEFORE that tick's drain.
    pub pass_out_amount: f32,

    /// Ticks between two bleed drains
    pub bleed_period: Tick,

    /// Ammo that kills outright, whatever zone it lands in
    pub instant_lethal_ammo: String,
}

impl Default for BleedTuning {
    fn default() -> Self {
        Self {
            base_bleed_rate: BASE_BLEED_RATE,
            pass_out_amount: PASS_OUT_AMOUNT,
            bleed_period: BLEED_PERIOD_TICKS,
            instant_lethal_ammo: INSTANT_LETHAL_AMMO.to_string(),
        }
    }
}

impl BleedTuning {
    /// Create a new tuning with reference values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate tuning for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.base_bleed_rate.is_finite() && self.base_bleed_rate > 0.0) {
            return Err(WoundError::InvalidTuning(format!(
                "base_bleed_rate ({}) must be positive",
                self.base_bleed_rate
            )));
        }

        if !(self.pass_out_amount.is_finite() && self.pass_out_amount >= 0.0) {
            return Err(WoundError::InvalidTuning(format!(
                "pass_out_amount ({}) must not be negative",
                self.pass_out_amount
            )));
        }

        if self.bleed_period == 0 {
            return Err(WoundError::InvalidTuning(
                "bleed_period must be at least one tick".into(),
            ));
        }

        Ok(())
    }
}
