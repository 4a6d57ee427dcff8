//! Periodic bleed drain
//!
//! A bleed captures its wound intensity once, at activation, and drains
//! global blood every time the scheduler fires it. It stops itself the first
//! time it finds its host dead.

use crate::core::config::BleedTuning;
use crate::core::types::{ResourceKind, GLOBAL_ZONE};
use crate::entity::HealthHost;
use crate::simulation::scheduler::{PeriodicTask, TaskControl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BleedState {
    /// Host alive, task firing
    Active,
    /// Host died or the task was stopped; never fires again
    Terminated,
}

/// State carried by one active bleed
#[derive(Debug, Clone, PartialEq)]
pub struct BleedTask {
    wound_intensity: f32,
    base_bleed_rate: f32,
    pass_out_amount: f32,
    state: BleedState,
}

impl BleedTask {
    pub fn new(wound_intensity: f32, tuning: &BleedTuning) -> Self {
        Self {
            wound_intensity,
            base_bleed_rate: tuning.base_bleed_rate,
            pass_out_amount: tuning.pass_out_amount,
            state: BleedState::Active,
        }
    }

    pub fn wound_intensity(&self) -> f32 {
        self.wound_intensity
    }

    pub fn state(&self) -> BleedState {
        self.state
    }

    /// Blood lost per tick
    pub fn bleeding_intensity(&self) -> f32 {
        self.base_bleed_rate * self.wound_intensity
    }

    /// One bleed step against `host`
    pub fn bleed(&mut self, host: &mut dyn HealthHost) -> BleedState {
        if self.state == BleedState::Terminated {
            return self.state;
        }

        if !host.is_alive() {
            tracing::debug!("Bleed stopped: {} is dead", host.entity_type());
            self.state = BleedState::Terminated;
            return self.state;
        }

        let bleeding_intensity = self.bleeding_intensity();
        // Pass-out check uses the level from before this tick's drain
        let blood_before = host.health(GLOBAL_ZONE, ResourceKind::Blood);

        host.decrease_health(GLOBAL_ZONE, ResourceKind::Blood, bleeding_intensity);

        tracing::debug!(
            entity_type = host.entity_type(),
            blood_before,
            bleeding_intensity,
            "Bleed tick"
        );

        if blood_before < self.pass_out_amount {
            tracing::info!(
                "{} bled out (blood {:.0} < {:.0})",
                host.entity_type(),
                blood_before,
                self.pass_out_amount
            );
            host.set_health(GLOBAL_ZONE, ResourceKind::Health, 0.0);
        }

        self.state
    }
}

impl PeriodicTask for BleedTask {
    fn tick(&mut self, host: &mut dyn HealthHost) -> TaskControl {
        match self.bleed(host) {
            BleedState::Active => TaskControl::Continue,
            BleedState::Terminated => TaskControl::Stop,
        }
    }
}
