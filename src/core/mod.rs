pub mod config;
pub mod error;
pub mod types;

pub use config::BleedTuning;
pub use error::{Result, WoundError};
pub use types::{EntityId, ResourceKind, Tick, GLOBAL_ZONE};
