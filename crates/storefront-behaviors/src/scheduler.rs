//! Timer Scheduling
//!
//! Delayed cleanups and the ambient sparkle loop go through `Scheduler` so
//! the browser timers can be swapped for a virtual clock under test.

/// Identifies a scheduled task for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

pub trait Scheduler: Clone + 'static {
    /// Run `task` once after `delay_ms`
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;
    /// Run `task` every `period_ms` until cancelled
    fn every(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle;
    /// Stop a pending task; unknown or finished handles are ignored
    fn cancel(&self, handle: TaskHandle);
}

#[cfg(test)]
pub use virtual_clock::VirtualClock;
