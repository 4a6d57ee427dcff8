//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// Zone name addressing the whole entity rather than one body region
pub const GLOBAL_ZONE: &str = "";

/// Named resources tracked by an entity's damage model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Global and per-zone; the entity dies when global health hits zero
    Health,
    /// Global only; drained by bleeding
    Blood,
    /// Global only; carried but never touched by wounds
    Shock,
}

impl ResourceKind {
    /// Returns all resource kinds
    pub fn all() -> [ResourceKind; 3] {
        [ResourceKind::Health, ResourceKind::Blood, ResourceKind::Shock]
    }

    /// Name used by damage events and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Health => "Health",
            ResourceKind::Blood => "Blood",
            ResourceKind::Shock => "Shock",
        }
    }

    /// Parse a config name. The empty string means Health.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "" | "Health" => Some(ResourceKind::Health),
            "Blood" => Some(ResourceKind::Blood),
            "Shock" => Some(ResourceKind::Shock),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
