//! Health model of a wounded entity
//!
//! Global pools for every resource kind plus per-zone health. Wound and
//! bleed logic only ever talk to the [`HealthHost`] trait, so hosts other
//! than [`Creature`] can plug in.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{ResourceKind, GLOBAL_ZONE};

/// Health and resource API a wounded entity exposes
///
/// `zone == ""` addresses the global pool.
pub trait HealthHost {
    /// Type name used to look up per-zone configuration
    fn entity_type(&self) -> &str;

    fn is_alive(&self) -> bool;

    fn health(&self, zone: &str, kind: ResourceKind) -> f32;

    fn decrease_health(&mut self, zone: &str, kind: ResourceKind, amount: f32);

    fn set_health(&mut self, zone: &str, kind: ResourceKind, value: f32);
}

/// Current and maximum value of one resource
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceMeter {
    pub current: f32,
    pub max: f32,
}

impl ResourceMeter {
    pub fn full(max: f32) -> Self {
        let max = max.max(0.0);
        Self { current: max, max }
    }

    pub fn set(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.max);
    }

    pub fn decrease(&mut self, amount: f32) {
        if amount > 0.0 {
            self.set(self.current - amount);
        }
    }
}

/// In-memory entity with global health/blood/shock and zone-local health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    pub type_name: String,
    pub health: ResourceMeter,
    pub blood: ResourceMeter,
    pub shock: ResourceMeter,
    pub zones: AHashMap<String, ResourceMeter>,
}

impl Creature {
    pub fn new(type_name: impl Into<String>, max_health: f32, max_blood: f32, max_shock: f32) -> Self {
        Self {
            type_name: type_name.into(),
            health: ResourceMeter::full(max_health),
            blood: ResourceMeter::full(max_blood),
            shock: ResourceMeter::full(max_shock),
            zones: AHashMap::new(),
        }
    }

    /// Add a damage zone at full health (builder pattern)
    pub fn with_zone(mut self, name: impl Into<String>, max_health: f32) -> Self {
        self.zones.insert(name.into(), ResourceMeter::full(max_health));
        self
    }

    fn global(&self, kind: ResourceKind) -> &ResourceMeter {
        match kind {
            ResourceKind::Health => &self.health,
            ResourceKind::Blood => &self.blood,
            ResourceKind::Shock => &self.shock,
        }
    }

    fn global_mut(&mut self, kind: ResourceKind) -> &mut ResourceMeter {
        match kind {
            ResourceKind::Health => &mut self.health,
            ResourceKind::Blood => &mut self.blood,
            ResourceKind::Shock => &mut self.shock,
        }
    }

    /// Zones only carry health
    fn zone_mut(&mut self, zone: &str, kind: ResourceKind) -> Option<&mut ResourceMeter> {
        if kind != ResourceKind::Health {
            return None;
        }
        self.zones.get_mut(zone)
    }
}

impl HealthHost for Creature {
    fn entity_type(&self) -> &str {
        &self.type_name
    }

    fn is_alive(&self) -> bool {
        self.health.current > 0.0
    }

    fn health(&self, zone: &str, kind: ResourceKind) -> f32 {
        if zone == GLOBAL_ZONE {
            return self.global(kind).current;
        }
        match kind {
            ResourceKind::Health => self.zones.get(zone).map_or(0.0, |m| m.current),
            _ => 0.0,
        }
    }

    fn decrease_health(&mut self, zone: &str, kind: ResourceKind, amount: f32) {
        if zone == GLOBAL_ZONE {
            self.global_mut(kind).decrease(amount);
        } else if let Some(meter) = self.zone_mut(zone, kind) {
            meter.decrease(amount);
        }
    }

    fn set_health(&mut self, zone: &str, kind: ResourceKind, value: f32) {
        if zone == GLOBAL_ZONE {
            self.global_mut(kind).set(value);
        } else if let Some(meter) = self.zone_mut(zone, kind) {
            meter.set(value);
        }
    }
}
