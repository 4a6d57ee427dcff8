//! Wound system: immediate zone damage plus probability-gated bleeding
//!
//! Every hit applies its health damage straight away. The hit then rolls
//! against the ammo's bleed threshold, and when the struck zone can bleed a
//! periodic [`BleedTask`] is scheduled. A processor owns at most one bleed.

use serde::{Deserialize, Serialize};

use crate::combat::bleeding::BleedTask;
use crate::combat::constants::WOUND_INTENSITY_FACTOR;
use crate::combat::damage::DamageEvent;
use crate::combat::rolls::RandomSource;
use crate::combat::tables::BleedConfig;
use crate::core::config::BleedTuning;
use crate::core::types::{ResourceKind, GLOBAL_ZONE};
use crate::entity::HealthHost;
use crate::simulation::scheduler::{Scheduler, TaskHandle};

/// External services a wound consults
pub struct WoundEnv<'a> {
    pub config: &'a dyn BleedConfig,
    pub rolls: &'a mut dyn RandomSource,
    pub scheduler: &'a mut dyn Scheduler,
}

/// What `create_wound` did, for callers that want to log or display it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WoundReport {
    pub bleed_started: bool,
    pub wound_intensity: Option<f32>,
}

/// Higher bleed threshold, more intense bleed
pub fn wound_intensity(bleed_threshold: f32) -> f32 {
    bleed_threshold * WOUND_INTENSITY_FACTOR
}

/// Per-entity wound state
#[derive(Debug, Clone, Default)]
pub struct WoundProcessor {
    tuning: BleedTuning,
    bleed: Option<TaskHandle>,
}

impl WoundProcessor {
    pub fn new(tuning: BleedTuning) -> Self {
        Self {
            tuning,
            bleed: None,
        }
    }

    pub fn tuning(&self) -> &BleedTuning {
        &self.tuning
    }

    /// Handle of the current bleed, if one was started and not cleared
    pub fn bleed_handle(&self) -> Option<TaskHandle> {
        self.bleed
    }

    /// Apply a hit's health damage immediately
    ///
    /// Instant-lethal ammo zeroes global health before anything else. A hit
    /// with no zone deals nothing further. Otherwise the zone's Health damage
    /// is taken from global health and, separately, from the zone itself.
    pub fn apply_wound_damage(
        &self,
        host: &mut dyn HealthHost,
        damage: &DamageEvent,
        zone: &str,
        ammo: &str,
    ) {
        if ammo == self.tuning.instant_lethal_ammo {
            tracing::info!("{} killed outright by {}", host.entity_type(), ammo);
            host.set_health(GLOBAL_ZONE, ResourceKind::Health, 0.0);
        }

        if zone.is_empty() {
            return;
        }

        let health_damage = damage.get(zone, ResourceKind::Health);

        // NOTE: the same amount hits both global and zone health. Kept as-is
        // until it is confirmed whether the global hit is intended.
        host.decrease_health(GLOBAL_ZONE, ResourceKind::Health, health_damage);
        host.decrease_health(zone, ResourceKind::Health, health_damage);

        tracing::debug!(
            entity_type = host.entity_type(),
            zone,
            health_damage,
            "Wound damage applied"
        );
    }

    /// Entry point for one damage event
    pub fn create_wound(
        &mut self,
        host: &mut dyn HealthHost,
        env: &mut WoundEnv<'_>,
        damage: &DamageEvent,
        zone: &str,
        ammo: &str,
    ) -> WoundReport {
        self.apply_wound_damage(host, damage, zone, ammo);

        let can_bleed = env.config.can_bleed(host.entity_type(), zone);
        let bleed_threshold = env.config.bleed_threshold(ammo);
        let chance = env.rolls.roll_unit();

        if !(can_bleed && chance <= bleed_threshold) {
            tracing::debug!(
                zone,
                ammo,
                can_bleed,
                chance,
                bleed_threshold,
                "No bleed"
            );
            return WoundReport {
                bleed_started: false,
                wound_intensity: None,
            };
        }

        let intensity = wound_intensity(bleed_threshold);
        self.start_bleed(&mut *env.scheduler, intensity);

        tracing::info!(
            "{} bleeding from {} (ammo {}, intensity {:.2})",
            host.entity_type(),
            zone,
            ammo,
            intensity
        );

        WoundReport {
            bleed_started: true,
            wound_intensity: Some(intensity),
        }
    }

    /// Replace any current bleed with a fresh one
    fn start_bleed(&mut self, scheduler: &mut dyn Scheduler, intensity: f32) {
        if let Some(previous) = self.bleed.take() {
            scheduler.cancel(previous);
        }

        let task = BleedTask::new(intensity, &self.tuning);
        let handle = scheduler.schedule_periodic(self.tuning.bleed_period, Box::new(task), true);
        self.bleed = Some(handle);
    }

    /// Stop the current bleed. Safe to call when nothing is bleeding.
    pub fn cancel_bleed(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.bleed.take() {
            scheduler.cancel(handle);
            tracing::debug!("Bleed cancelled");
        }
    }

    pub fn is_bleeding(&self, scheduler: &dyn Scheduler) -> bool {
        self.bleed.is_some_and(|h| scheduler.is_scheduled(h))
    }

    /// Drop the handle of a bleed that has stopped itself
    pub fn clear_finished(&mut self, scheduler: &dyn Scheduler) {
        if self.bleed.is_some() && !self.is_bleeding(scheduler) {
            self.bleed = None;
        }
    }
}
