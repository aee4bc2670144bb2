//! Scoped listener registrations
//!
//! A [`ListenerRegistry`] holds listener records for some event source
//! (pointer presses, media events). Registering returns a [`Subscription`]
//! guard; the record is removed when the guard is dropped or explicitly
//! released. Owners store the guard next to the UI state it belongs to, so
//! "open ⇒ subscribe, close/teardown ⇒ unsubscribe" follows from ownership.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Identifier of a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

#[derive(Debug)]
struct Slots<T> {
    next_id: u64,
    entries: BTreeMap<u64, T>,
}

/// Shared registry of listener records
#[derive(Debug)]
pub struct ListenerRegistry<T> {
    inner: Arc<Mutex<Slots<T>>>,
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ListenerRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

fn lock<T>(slots: &Mutex<Slots<T>>) -> MutexGuard<'_, Slots<T>> {
    // A panicking listener owner must not wedge every other subscriber.
    slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<T> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Slots {
                next_id: 0,
                entries: BTreeMap::new(),
            })),
        }
    }

    /// Register a listener record, returning its guard
    #[must_use = "dropping the subscription immediately deregisters the listener"]
    pub fn subscribe(&self, record: T) -> Subscription<T> {
        let mut slots = lock(&self.inner);
        let id = slots.next_id;
        slots.next_id += 1;
        slots.entries.insert(id, record);
        tracing::trace!("listener {} registered ({} active)", id, slots.entries.len());
        Subscription {
            id: ListenerId(id),
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live registrations
    pub fn len(&self) -> usize {
        lock(&self.inner).entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> ListenerRegistry<T> {
    /// Copy of all live records in registration order
    ///
    /// Dispatch works on a snapshot so handlers may subscribe or release
    /// while an event is being delivered.
    pub fn snapshot(&self) -> Vec<(ListenerId, T)> {
        lock(&self.inner)
            .entries
            .iter()
            .map(|(id, record)| (ListenerId(*id), record.clone()))
            .collect()
    }
}

/// Guard for one registration; deregisters on drop
#[derive(Debug)]
pub struct Subscription<T> {
    id: ListenerId,
    registry: Weak<Mutex<Slots<T>>>,
}

impl<T> Subscription<T> {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Replace the stored record (e.g. updated overlay bounds)
    pub fn update(&self, record: T) {
        if let Some(inner) = self.registry.upgrade() {
            if let Some(slot) = lock(&inner).entries.get_mut(&self.id.0) {
                *slot = record;
            }
        }
    }

    /// Modify the stored record in place
    pub fn modify(&self, f: impl FnOnce(&mut T)) {
        if let Some(inner) = self.registry.upgrade() {
            if let Some(slot) = lock(&inner).entries.get_mut(&self.id.0) {
                f(slot);
            }
        }
    }

    /// Deregister now (same as dropping)
    pub fn release(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            let mut slots = lock(&inner);
            slots.entries.remove(&self.id.0);
            tracing::trace!(
                "listener {} released ({} active)",
                self.id.0,
                slots.entries.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribe_and_drop() {
        let registry: ListenerRegistry<&str> = ListenerRegistry::new();
        assert!(registry.is_empty());

        let sub = registry.subscribe("toc");
        assert_eq!(registry.len(), 1);

        drop(sub);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_release_is_drop() {
        let registry: ListenerRegistry<u8> = ListenerRegistry::new();
        let sub = registry.subscribe(1);
        sub.release();
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let registry: ListenerRegistry<u8> = ListenerRegistry::new();
        let a = registry.subscribe(1);
        let b = registry.subscribe(2);
        assert!(a.id() < b.id());

        let snapshot = registry.snapshot();
        assert_eq!(snapshot, vec![(a.id(), 1), (b.id(), 2)]);
    }

    #[test]
    fn test_update_and_modify_record() {
        let registry: ListenerRegistry<u32> = ListenerRegistry::new();
        let sub = registry.subscribe(1);
        sub.update(5);
        sub.modify(|v| *v += 1);
        assert_eq!(registry.snapshot()[0].1, 6);
    }

    #[test]
    fn test_repeated_subscribe_release_does_not_accumulate() {
        let registry: ListenerRegistry<()> = ListenerRegistry::new();
        for _ in 0..10 {
            let sub = registry.subscribe(());
            assert_eq!(registry.len(), 1);
            drop(sub);
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_guard_outliving_registry_is_harmless() {
        let registry: ListenerRegistry<u8> = ListenerRegistry::new();
        let sub = registry.subscribe(1);
        drop(registry);
        sub.update(2);
        drop(sub);
    }

    #[test]
    fn test_clone_shares_entries() {
        let registry: ListenerRegistry<u8> = ListenerRegistry::new();
        let other = registry.clone();
        let _sub = other.subscribe(3);
        assert_eq!(registry.len(), 1);
    }
}
