pub mod health;

pub use health::{Creature, HealthHost, ResourceMeter};
