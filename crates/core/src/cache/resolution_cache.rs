use crate::error::Error;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

/// Load-once cache for prefixed requests.
///
/// Every key owns a slot with its own lock. The first caller for a key runs
/// the initializer while holding the slot; concurrent callers for the same key
/// wait and then receive the stored value. Once a slot is filled it is never
/// recomputed or replaced. A failed initializer leaves the slot empty.
pub struct ResolutionCache<M> {
    slots: Mutex<HashMap<String, Arc<Slot<M>>>>,
    waits: Mutex<WaitGraph>,
}

struct Slot<M> {
    value: Mutex<Option<M>>,
}

impl<M> Default for Slot<M> {
    fn default() -> Self {
        Self {
            value: Mutex::new(None),
        }
    }
}

/// Which thread is filling which key, and which key each thread is blocked on.
///
/// Checking and recording a wait happen under one lock, so whichever thread
/// closes a cycle sees every other edge of it.
#[derive(Debug, Default)]
struct WaitGraph {
    owners: HashMap<String, ThreadId>,
    waiting: HashMap<ThreadId, String>,
}

impl WaitGraph {
    /// Would `me` blocking on `key` close a cycle back to `me`?
    fn would_deadlock(&self, key: &str, me: ThreadId) -> bool {
        let mut current = key;
        for _ in 0..=self.owners.len() {
            let Some(owner) = self.owners.get(current) else {
                return false;
            };
            if *owner == me {
                return true;
            }
            match self.waiting.get(owner) {
                Some(next) => current = next.as_str(),
                None => return false,
            }
        }
        false
    }
}

/// Releases ownership of a key when the initializer returns or unwinds
struct OwnerGuard<'a> {
    waits: &'a Mutex<WaitGraph>,
    key: &'a str,
}

impl Drop for OwnerGuard<'_> {
    fn drop(&mut self) {
        lock(self.waits).owners.remove(self.key);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<M> Default for ResolutionCache<M> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            waits: Mutex::new(WaitGraph::default()),
        }
    }
}

impl<M: Clone> ResolutionCache<M> {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, key: &str) -> Arc<Slot<M>> {
        let mut slots = lock(&self.slots);
        Arc::clone(slots.entry(key.to_string()).or_default())
    }

    /// Cached value for `key`, if its load has completed
    pub fn get(&self, key: &str) -> Option<M> {
        let slot = lock(&self.slots).get(key).cloned()?;
        let value = slot.value.try_lock().ok()?;
        value.clone()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Return the cached value for `key`, or run `init` exactly once to fill it.
    ///
    /// A request that would wait on a load which is itself (directly or through
    /// other threads) waiting on the caller fails with
    /// [`Error::CircularRequest`] instead of deadlocking. That covers a module
    /// requiring itself through its alias as well as two modules requiring each
    /// other from different threads.
    pub fn get_or_try_insert_with<E, F>(&self, key: &str, init: F) -> Result<M, E>
    where
        E: From<Error>,
        F: FnOnce() -> Result<M, E>,
    {
        let slot = self.slot(key);
        let me = thread::current().id();
        {
            let mut waits = lock(&self.waits);
            if waits.would_deadlock(key, me) {
                return Err(Error::CircularRequest(key.to_string()).into());
            }
            waits.waiting.insert(me, key.to_string());
        }

        let mut value = lock(&slot.value);
        {
            let mut waits = lock(&self.waits);
            waits.waiting.remove(&me);
            if let Some(cached) = value.as_ref() {
                return Ok(cached.clone());
            }
            waits.owners.insert(key.to_string(), me);
        }
        let _owner = OwnerGuard {
            waits: &self.waits,
            key,
        };

        let module = init()?;
        *value = Some(module.clone());
        Ok(module)
    }

    /// Requests with a completed load, sorted
    pub fn keys(&self) -> Vec<String> {
        let slots = lock(&self.slots);
        let mut keys: Vec<String> = slots
            .iter()
            .filter(|(_, slot)| {
                slot.value
                    .try_lock()
                    .map(|value| value.is_some())
                    .unwrap_or(false)
            })
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<M> std::fmt::Debug for ResolutionCache<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots = lock(&self.slots).len();
        let loading = lock(&self.waits).owners.len();
        f.debug_struct("ResolutionCache")
            .field("slots", &slots)
            .field("loading", &loading)
            .finish()
    }
}
