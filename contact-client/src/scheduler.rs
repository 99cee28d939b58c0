//! Timers keyed by the element they act on

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::AbortHandle;

use crate::presenter::ElementId;

struct Scheduled {
    generation: u64,
    handle: AbortHandle,
}

/// Runs delayed actions on tokio, at most one per element.
///
/// Scheduling for an element that already has a pending action replaces
/// it. Cancelling an element drops whatever was pending for it.
#[derive(Clone, Default)]
pub struct Scheduler {
    tasks: Arc<Mutex<HashMap<ElementId, Scheduled>>>,
    next_generation: Arc<AtomicU64>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` after `delay` unless the element is rescheduled or
    /// cancelled first.
    pub fn schedule<F>(&self, element: ElementId, delay: Duration, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let tasks = self.tasks.clone();

        // Held across the spawn so the task cannot look itself up too early
        let mut guard = lock(&self.tasks);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let current = {
                let mut tasks = lock(&tasks);
                match tasks.get(&element) {
                    Some(entry) if entry.generation == generation => {
                        tasks.remove(&element);
                        true
                    }
                    _ => false,
                }
            };

            if current {
                action();
            }
        });

        let replaced = guard.insert(
            element,
            Scheduled {
                generation,
                handle: handle.abort_handle(),
            },
        );
        if let Some(old) = replaced {
            old.handle.abort();
        }
    }

    /// Drop any pending action for the element
    pub fn cancel(&self, element: ElementId) {
        if let Some(old) = lock(&self.tasks).remove(&element) {
            old.handle.abort();
        }
    }

    pub fn is_scheduled(&self, element: ElementId) -> bool {
        lock(&self.tasks).contains_key(&element)
    }
}

// The map is never left half-updated, so poisoning is recoverable.
fn lock(tasks: &Mutex<HashMap<ElementId, Scheduled>>) -> std::sync::MutexGuard<'_, HashMap<ElementId, Scheduled>> {
    tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
