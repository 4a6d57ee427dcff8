//! Damage configuration tables loaded from TOML
//!
//! ```toml
//! [bleeding]
//! pass_out_amount = 500.0
//!
//! [creatures.Animal_CervusElaphus]
//! max_blood = 5000.0
//! [creatures.Animal_CervusElaphus.zones.Neck]
//! health = 50.0
//! can_bleed = true
//!
//! [ammo.Bullet_308Win]
//! bleed_threshold = 0.9
//! ```
//!
//! Unknown creatures, zones and ammo read as "cannot bleed" / threshold 0.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::combat::constants::{
    DEFAULT_MAX_BLOOD, DEFAULT_MAX_HEALTH, DEFAULT_MAX_SHOCK, DEFAULT_ZONE_HEALTH,
};
use crate::core::config::BleedTuning;
use crate::core::error::{Result, WoundError};
use crate::entity::Creature;

/// Read-only configuration consulted when a wound is created
pub trait BleedConfig {
    /// Does `zone` of creatures of `entity_type` bleed when hit?
    fn can_bleed(&self, entity_type: &str, zone: &str) -> bool;

    /// Probability bound in `[0, 1]` that `ammo` starts a bleed
    fn bleed_threshold(&self, ammo: &str) -> f32;
}

/// One damage zone of a creature template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneTemplate {
    pub health: f32,
    pub can_bleed: bool,
}

impl Default for ZoneTemplate {
    fn default() -> Self {
        Self {
            health: DEFAULT_ZONE_HEALTH,
            can_bleed: false,
        }
    }
}

/// Resource maxima and damage zones for one creature type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatureTemplate {
    pub max_health: f32,
    pub max_blood: f32,
    pub max_shock: f32,
    pub zones: AHashMap<String, ZoneTemplate>,
}

impl Default for CreatureTemplate {
    fn default() -> Self {
        Self {
            max_health: DEFAULT_MAX_HEALTH,
            max_blood: DEFAULT_MAX_BLOOD,
            max_shock: DEFAULT_MAX_SHOCK,
            zones: AHashMap::new(),
        }
    }
}

impl CreatureTemplate {
    /// Add a zone (builder pattern)
    pub fn with_zone(mut self, name: impl Into<String>, health: f32, can_bleed: bool) -> Self {
        self.zones
            .insert(name.into(), ZoneTemplate { health, can_bleed });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmmoTemplate {
    pub bleed_threshold: f32,
}

/// Creature and ammo tables plus bleed tuning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageTables {
    #[serde(rename = "bleeding")]
    tuning: BleedTuning,
    creatures: AHashMap<String, CreatureTemplate>,
    ammo: AHashMap<String, AmmoTemplate>,
}

impl DamageTables {
    /// Empty tables with reference tuning
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate tables from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let tables: DamageTables = toml::from_str(content)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let tables = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded damage tables from {}: {} creatures, {} ammo types",
            path.display(),
            tables.creatures.len(),
            tables.ammo.len()
        );
        Ok(tables)
    }

    pub fn with_tuning(mut self, tuning: BleedTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_creature(mut self, type_name: impl Into<String>, template: CreatureTemplate) -> Self {
        self.creatures.insert(type_name.into(), template);
        self
    }

    pub fn with_ammo(mut self, ammo: impl Into<String>, bleed_threshold: f32) -> Self {
        self.ammo
            .insert(ammo.into(), AmmoTemplate { bleed_threshold });
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.tuning.validate()?;
        for (ammo, entry) in &self.ammo {
            let value = entry.bleed_threshold;
            if !(0.0..=1.0).contains(&value) {
                return Err(WoundError::InvalidThreshold {
                    ammo: ammo.clone(),
                    value,
                });
            }
        }
        Ok(())
    }

    pub fn tuning(&self) -> &BleedTuning {
        &self.tuning
    }

    pub fn creature(&self, type_name: &str) -> Option<&CreatureTemplate> {
        self.creatures.get(type_name)
    }

    /// Instantiate a creature at full health from its template
    pub fn spawn(&self, type_name: &str) -> Result<Creature> {
        let template = self
            .creature(type_name)
            .ok_or_else(|| WoundError::UnknownCreature(type_name.to_string()))?;

        let creature = template.zones.iter().fold(
            Creature::new(
                type_name,
                template.max_health,
                template.max_blood,
                template.max_shock,
            ),
            |creature, (zone, entry)| creature.with_zone(zone.clone(), entry.health),
        );
        Ok(creature)
    }
}

impl BleedConfig for DamageTables {
    fn can_bleed(&self, entity_type: &str, zone: &str) -> bool {
        self.creatures
            .get(entity_type)
            .and_then(|c| c.zones.get(zone))
            .is_some_and(|z| z.can_bleed)
    }

    fn bleed_threshold(&self, ammo: &str) -> f32 {
        self.ammo.get(ammo).map_or(0.0, |a| a.bleed_threshold)
    }
}
