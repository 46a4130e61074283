//! Browser Services
//!
//! `localStorage` preferences and gloo timers behind the behavior seams.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use storefront_behaviors::{PreferenceStore, Scheduler, TaskHandle};
use web_sys::Storage;

/// `window.localStorage`, or nothing when storage is unavailable
/// (private mode, disabled cookies)
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Ids of timers that may still run. One-shot ids leave the set when they
/// fire or are cancelled; interval ids leave it only on cancel, so the set
/// stays bounded by the number of live timers.
#[derive(Clone, Default)]
struct TimerLedger {
    next_id: Rc<Cell<u64>>,
    live: Rc<RefCell<HashSet<u64>>>,
}

impl TimerLedger {
    fn register(&self) -> TaskHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.live.borrow_mut().insert(id);
        TaskHandle::new(id)
    }

    /// A one-shot timer fired; true when its task should still run
    fn settle(&self, handle: TaskHandle) -> bool {
        self.live.borrow_mut().remove(&handle.id())
    }

    /// An interval ticked; true while it has not been cancelled
    fn is_live(&self, handle: TaskHandle) -> bool {
        self.live.borrow().contains(&handle.id())
    }

    fn cancel(&self, handle: TaskHandle) {
        self.live.borrow_mut().remove(&handle.id());
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.live.borrow().len()
    }
}

/// Page-lifetime timers. Timers are forgotten once started; cancelling
/// drops the handle from the ledger so the callback skips its work.
#[derive(Clone, Default)]
pub struct BrowserTimers {
    ledger: TimerLedger,
}

impl Scheduler for BrowserTimers {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = self.ledger.register();
        let ledger = self.ledger.clone();
        Timeout::new(delay_ms, move || {
            if ledger.settle(handle) {
                task();
            }
        })
        .forget();
        handle
    }

    fn every(&self, period_ms: u32, mut task: Box<dyn FnMut()>) -> TaskHandle {
        let handle = self.ledger.register();
        let ledger = self.ledger.clone();
        Interval::new(period_ms, move || {
            if ledger.is_live(handle) {
                task();
            }
        })
        .forget();
        handle
    }

    fn cancel(&self, handle: TaskHandle) {
        self.ledger.cancel(handle);
    }
}
