//! Herd - drives wounds and bleeding for a group of creatures
//!
//! Each creature gets its own wound processor and timer queue, so bleeds of
//! different creatures never share a slot.

use ahash::AHashMap;

use crate::combat::damage::DamageEvent;
use crate::combat::rolls::RandomSource;
use crate::combat::tables::BleedConfig;
use crate::combat::wounds::{WoundEnv, WoundProcessor, WoundReport};
use crate::core::config::BleedTuning;
use crate::core::types::{EntityId, Tick};
use crate::entity::{Creature, HealthHost};
use crate::simulation::scheduler::TickScheduler;

struct Member {
    creature: Creature,
    wounds: WoundProcessor,
    timers: TickScheduler,
}

pub struct Herd {
    pub current_tick: Tick,
    tuning: BleedTuning,
    members: AHashMap<EntityId, Member>,
}

impl Herd {
    pub fn new(tuning: BleedTuning) -> Self {
        Self {
            current_tick: 0,
            tuning,
            members: AHashMap::new(),
        }
    }

    pub fn spawn(&mut self, creature: Creature) -> EntityId {
        let id = EntityId::new();
        tracing::debug!("Spawned {} as {:?}", creature.entity_type(), id);
        self.members.insert(
            id,
            Member {
                creature,
                wounds: WoundProcessor::new(self.tuning.clone()),
                timers: TickScheduler::new(),
            },
        );
        id
    }

    /// Remove a creature, cancelling its bleed
    pub fn despawn(&mut self, id: EntityId) -> Option<Creature> {
        let mut member = self.members.remove(&id)?;
        member.wounds.cancel_bleed(&mut member.timers);
        Some(member.creature)
    }

    /// Deliver one damage event. Returns None for unknown ids.
    pub fn hit(
        &mut self,
        id: EntityId,
        damage: &DamageEvent,
        zone: &str,
        ammo: &str,
        config: &dyn BleedConfig,
        rolls: &mut dyn RandomSource,
    ) -> Option<WoundReport> {
        let member = self.members.get_mut(&id)?;
        let mut env = WoundEnv {
            config,
            rolls,
            scheduler: &mut member.timers,
        };
        Some(
            member
                .wounds
                .create_wound(&mut member.creature, &mut env, damage, zone, ammo),
        )
    }

    /// Advance every creature's timers by one tick
    pub fn tick(&mut self) {
        self.current_tick += 1;
        for member in self.members.values_mut() {
            member.timers.advance(&mut member.creature);
            member.wounds.clear_finished(&member.timers);
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&Creature> {
        self.members.get(&id).map(|m| &m.creature)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Creature> {
        self.members.get_mut(&id).map(|m| &mut m.creature)
    }

    pub fn is_bleeding(&self, id: EntityId) -> bool {
        self.members
            .get(&id)
            .is_some_and(|m| m.wounds.is_bleeding(&m.timers))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.members
            .values()
            .filter(|m| m.creature.is_alive())
            .count()
    }
}
