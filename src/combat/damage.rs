//! Damage events produced by the upstream hit pipeline

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::ResourceKind;

/// Damage dealt by one hit, broken down per zone and resource kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageEvent {
    zones: AHashMap<String, AHashMap<ResourceKind, f32>>,
}

impl DamageEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add damage to a zone (builder pattern). Repeated entries accumulate.
    pub fn with(mut self, zone: impl Into<String>, kind: ResourceKind, amount: f32) -> Self {
        self.add(zone, kind, amount);
        self
    }

    pub fn add(&mut self, zone: impl Into<String>, kind: ResourceKind, amount: f32) {
        *self
            .zones
            .entry(zone.into())
            .or_default()
            .entry(kind)
            .or_insert(0.0) += amount;
    }

    /// Damage of `kind` dealt to `zone`; zero when absent
    pub fn get(&self, zone: &str, kind: ResourceKind) -> f32 {
        self.zones
            .get(zone)
            .and_then(|kinds| kinds.get(&kind))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
