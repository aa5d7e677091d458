use std::cell::RefCell;

/// Source of one-shot timers.
///
/// Dropping the returned handle must cancel the task if it has not run yet.
pub trait Scheduler {
    type Pending;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Pending;
}

/// Trailing-edge debounce: each call cancels the pending task and arms a new
/// one, so only the last call of a burst runs, `delay_ms` after that call.
pub struct Debounced<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: RefCell<Option<S::Pending>>,
}

impl<S: Scheduler> Debounced<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Debounced {
            scheduler,
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn call<F: FnOnce() + 'static>(&self, task: F) {
        // Cancel first; the old handle must be gone before the new timer exists.
        self.cancel();
        let next = self.scheduler.schedule(self.delay_ms, Box::new(task));
        *self.pending.borrow_mut() = Some(next);
    }

    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}
