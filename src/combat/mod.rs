pub mod bleeding;
pub mod constants;
pub mod damage;
pub mod rolls;
pub mod tables;
pub mod wounds;

pub use bleeding::{BleedState, BleedTask};
pub use damage::DamageEvent;
pub use rolls::{RandomSource, ScriptedRolls, SeededRolls};
pub use tables::{BleedConfig, CreatureTemplate, DamageTables, ZoneTemplate};
pub use wounds::{wound_intensity, WoundEnv, WoundProcessor, WoundReport};
