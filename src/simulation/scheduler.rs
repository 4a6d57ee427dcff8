//! Periodic task scheduling
//!
//! Wound logic only asks for "run this every N ticks" and "cancel it" through
//! the [`Scheduler`] trait. [`TickScheduler`] is the in-crate implementation:
//! a slot arena with generation counters so stale handles never hit a task
//! that later reused the same slot.

use crate::core::types::Tick;
use crate::entity::HealthHost;

/// Handle to a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle {
    index: u32,
    generation: u32,
}

/// What a task wants after it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskControl {
    Continue,
    Stop,
}

/// Body of a periodic callback
pub trait PeriodicTask: Send {
    fn tick(&mut self, host: &mut dyn HealthHost) -> TaskControl;
}

/// Scheduling substrate consumed by the wound processor
pub trait Scheduler {
    /// Run `task` every `period` ticks, or once after `period` ticks when
    /// `repeat` is false.
    fn schedule_periodic(
        &mut self,
        period: Tick,
        task: Box<dyn PeriodicTask>,
        repeat: bool,
    ) -> TaskHandle;

    /// Stop a task. Unknown, finished and already cancelled handles are ignored.
    fn cancel(&mut self, handle: TaskHandle);

    fn is_scheduled(&self, handle: TaskHandle) -> bool;
}

struct ScheduledTask {
    task: Box<dyn PeriodicTask>,
    period: Tick,
    next_due: Tick,
    repeat: bool,
}

#[derive(Default)]
struct Slot {
    generation: u32,
    entry: Option<ScheduledTask>,
}

/// Tick-driven scheduler serving a single host
#[derive(Default)]
pub struct TickScheduler {
    now: Tick,
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks elapsed since creation
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Number of tasks still scheduled
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.entry.is_some()).count()
    }

    /// Advance time by one tick and fire every due task in handle order
    pub fn advance(&mut self, host: &mut dyn HealthHost) {
        self.now += 1;

        for index in 0..self.slots.len() {
            let due = self.slots[index]
                .entry
                .as_ref()
                .is_some_and(|e| e.next_due <= self.now);
            if !due {
                continue;
            }

            let Some(mut entry) = self.slots[index].entry.take() else {
                continue;
            };

            let control = entry.task.tick(host);
            if control == TaskControl::Continue && entry.repeat {
                entry.next_due = self.now + entry.period;
                self.slots[index].entry = Some(entry);
            } else {
                self.release(index);
            }
        }
    }

    fn release(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        slot.entry = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index as u32);
    }

    fn slot(&self, handle: TaskHandle) -> Option<&Slot> {
        self.slots
            .get(handle.index as usize)
            .filter(|s| s.generation == handle.generation)
    }
}

impl Scheduler for TickScheduler {
    fn schedule_periodic(
        &mut self,
        period: Tick,
        task: Box<dyn PeriodicTask>,
        repeat: bool,
    ) -> TaskHandle {
        let period = period.max(1);
        let entry = ScheduledTask {
            task,
            period,
            next_due: self.now + period,
            repeat,
        };

        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot::default());
                (self.slots.len() - 1) as u32
            }
        };

        let slot = &mut self.slots[index as usize];
        slot.entry = Some(entry);
        TaskHandle {
            index,
            generation: slot.generation,
        }
    }

    fn cancel(&mut self, handle: TaskHandle) {
        if self.is_scheduled(handle) {
            self.release(handle.index as usize);
        }
    }

    fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.slot(handle).is_some_and(|s| s.entry.is_some())
    }
}
