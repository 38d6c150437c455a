//! Repeating tasks driven by redraw callbacks or timers.
//!
//! A task reports after each tick when it wants to run again; the driver
//! (the browser loops in `wasm::schedule`, or [`run_bounded`] on the host)
//! re-arms it only while its [`TaskHandle`] is running.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// When the next tick should happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    NextFrame,
    After(u32),
}

/// Delay argument for the browser timer, which takes a signed 32-bit count.
pub fn timer_delay(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

pub trait Scheduled {
    fn tick(&mut self) -> Cadence;
}

/// Lets event handlers reach a task's state between ticks.
impl<T: Scheduled> Scheduled for Rc<RefCell<T>> {
    fn tick(&mut self) -> Cadence {
        self.borrow_mut().tick()
    }
}

/// Shared start/stop flag for one running task.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    running: Rc<Cell<bool>>,
}

impl TaskHandle {
    pub fn started() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Ticks `task` up to `max_ticks` times, checking `handle` before each one.
pub fn run_bounded<T: Scheduled>(task: &mut T, handle: &TaskHandle, max_ticks: usize) -> Vec<Cadence> {
    let mut cadences = Vec::with_capacity(max_ticks);
    while cadences.len() < max_ticks && handle.is_running() {
        cadences.push(task.tick());
    }
    cadences
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StopAfter {
        ticks: usize,
        stop_at: usize,
        handle: TaskHandle,
    }

    impl Scheduled for StopAfter {
        fn tick(&mut self) -> Cadence {
            self.ticks += 1;
            if self.ticks == self.stop_at {
                self.handle.stop();
            }
            Cadence::After(10)
        }
    }

    #[test]
    fn timer_delay_saturates_instead_of_wrapping() {
        assert_eq!(timer_delay(0), 0);
        assert_eq!(timer_delay(2000), 2000);
        assert_eq!(timer_delay(i32::MAX as u32), i32::MAX);
        assert_eq!(timer_delay(u32::MAX), i32::MAX);
    }

    #[test]
    fn bounded_run_respects_cap_and_stop() {
        let handle = TaskHandle::started();
        let mut task = StopAfter {
            ticks: 0,
            stop_at: 100,
            handle: handle.clone(),
        };
        assert_eq!(run_bounded(&mut task, &handle, 5).len(), 5);

        let handle = TaskHandle::started();
        let mut task = StopAfter {
            ticks: 0,
            stop_at: 3,
            handle: handle.clone(),
        };
        assert_eq!(run_bounded(&mut task, &handle, 50).len(), 3);
        assert!(!handle.is_running());
        assert!(run_bounded(&mut task, &handle, 50).is_empty());
    }
}
