//! Wound and bleed constants - reference values in one place
//!
//! `BleedTuning` defaults to these; config files may override them.

use crate::core::types::Tick;

// Bleeding
pub const BASE_BLEED_RATE: f32 = 250.0;
pub const PASS_OUT_AMOUNT: f32 = 500.0;
pub const BLEED_PERIOD_TICKS: Tick = 1;

/// Wound intensity is this multiple of the ammo's bleed threshold
pub const WOUND_INTENSITY_FACTOR: f32 = 2.0;

// Ammo
pub const INSTANT_LETHAL_AMMO: &str = "MeleeWolf";

// Creature defaults when a template leaves a value out
pub const DEFAULT_MAX_HEALTH: f32 = 100.0;
pub const DEFAULT_MAX_BLOOD: f32 = 5000.0;
pub const DEFAULT_MAX_SHOCK: f32 = 100.0;
pub const DEFAULT_ZONE_HEALTH: f32 = 100.0;
