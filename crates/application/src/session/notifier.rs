//! Listener registry behind the login-state stream.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex, ReentrantMutexGuard};

pub(crate) type Listener = Arc<dyn Fn(bool) + Send + Sync>;

/// Registered listeners, notified synchronously in registration order.
///
/// State changes and subscriber replays happen under the transition lock,
/// so a new subscriber never sees its replayed value after a newer one.
/// The lock is reentrant: a listener may log in or out from its callback.
#[derive(Default)]
pub(crate) struct LoginStateNotifier {
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
    transitions: ReentrantMutex<()>,
}

impl LoginStateNotifier {
    /// Serializes a state change with its notification.
    pub(crate) fn transition(&self) -> ReentrantMutexGuard<'_, ()> {
        self.transitions.lock()
    }

    pub(crate) fn register(self: &Arc<Self>, listener: Listener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().push((id, listener));
        Subscription {
            id,
            notifier: Arc::downgrade(self),
        }
    }

    /// Delivers `logged_in` to every current listener.
    ///
    /// The registry lock is released before any listener runs, so listeners
    /// may subscribe, unsubscribe or read the store.
    pub(crate) fn emit(&self, logged_in: bool) {
        let snapshot: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(logged_in);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.lock().len()
    }

    fn remove(&self, id: u64) {
        self.listeners.lock().retain(|(other, _)| *other != id);
    }
}

/// Keeps a login-state listener registered.
///
/// Dropping the subscription unregisters the listener.
#[must_use = "dropping a Subscription immediately unregisters its listener"]
pub struct Subscription {
    id: u64,
    notifier: Weak<LoginStateNotifier>,
}

impl Subscription {
    /// Unregisters the listener now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Keeps the listener registered for the rest of the process.
    pub fn forever(self) {
        std::mem::forget(self);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(notifier) = self.notifier.upgrade() {
            notifier.remove(self.id);
        }
    }
}
