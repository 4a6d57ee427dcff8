pub mod herd;
pub mod scheduler;

pub use herd::Herd;
pub use scheduler::{PeriodicTask, Scheduler, TaskControl, TaskHandle, TickScheduler};
