//! Session store with local-storage mirroring.

use std::sync::Arc;

use mdd_domain::SessionInformation;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::notifier::{Listener, LoginStateNotifier, Subscription};
use crate::ports::KeyValueStorage;

/// Storage key under which the session record is persisted.
pub const SESSION_KEY: &str = "session_info";

type SharedSession = Arc<RwLock<Option<SessionInformation>>>;

/// Single source of truth for the logged-in user.
///
/// The store is constructed once per process and shared (typically behind an
/// `Arc`) with every component that needs it. Presence of a
/// [`SessionInformation`] is the only login flag: [`SessionStore::is_logged`]
/// and the login-state stream are both derived from it.
///
/// Every operation is total. Storage failures are logged and otherwise
/// ignored; the in-memory state and notifications are authoritative.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
    session: SharedSession,
    notifier: Arc<LoginStateNotifier>,
}

impl SessionStore {
    /// Creates the store, restoring a previously persisted session.
    ///
    /// The persisted record is read exactly once. A record that is not valid
    /// JSON, or lacks a token or user id, is removed from storage and the
    /// store starts logged out.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let restored = restore(storage.as_ref());
        Self {
            storage,
            session: Arc::new(RwLock::new(restored)),
            notifier: Arc::new(LoginStateNotifier::default()),
        }
    }

    /// Replaces the current session with `info` and persists it.
    ///
    /// No merge happens with a previous session, and the token is not
    /// checked: it is whatever the server issued.
    pub fn log_in(&self, info: SessionInformation) {
        let _transition = self.notifier.transition();
        let serialized = serde_json::to_string(&info);
        info!(user_id = info.id, "logged in");
        *self.session.write() = Some(info);

        match serialized {
            Ok(raw) => {
                if let Err(error) = self.storage.set_item(SESSION_KEY, &raw) {
                    warn!(%error, "failed to persist session");
                }
            }
            Err(error) => warn!(%error, "failed to serialize session"),
        }

        self.notifier.emit(true);
    }

    /// Clears the session and its persisted copy.
    ///
    /// Calling this while already logged out leaves the same end state and
    /// still notifies subscribers with `false`.
    pub fn log_out(&self) {
        let _transition = self.notifier.transition();
        if self.session.write().take().is_some() {
            info!("logged out");
        }
        discard(self.storage.as_ref());
        self.notifier.emit(false);
    }

    /// Returns true if a user is logged in.
    #[must_use]
    pub fn is_logged(&self) -> bool {
        self.session.read().is_some()
    }

    /// Returns a copy of the current session, if any.
    #[must_use]
    pub fn session(&self) -> Option<SessionInformation> {
        self.session.read().clone()
    }

    /// Returns the current bearer token, if logged in.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.token.clone())
    }

    /// Returns the `Authorization` header value for the current session.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.session
            .read()
            .as_ref()
            .map(SessionInformation::authorization_value)
    }

    /// Returns a handle on the login-state stream.
    #[must_use]
    pub fn is_logged_stream(&self) -> LoginStateStream {
        LoginStateStream {
            session: Arc::clone(&self.session),
            notifier: Arc::clone(&self.notifier),
        }
    }

    /// Subscribes to login-state changes.
    ///
    /// Shorthand for `self.is_logged_stream().subscribe(listener)`.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.is_logged_stream().subscribe(listener)
    }

    /// Returns the number of registered login-state listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.notifier.len()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("is_logged", &self.is_logged())
            .field("subscribers", &self.notifier.len())
            .finish_non_exhaustive()
    }
}

/// Replay-one stream of login-state transitions.
///
/// Cheap to clone; every clone observes the same store.
#[derive(Clone)]
pub struct LoginStateStream {
    session: SharedSession,
    notifier: Arc<LoginStateNotifier>,
}

impl LoginStateStream {
    /// Returns the latest login state.
    #[must_use]
    pub fn current(&self) -> bool {
        self.session.read().is_some()
    }

    /// Registers `listener`.
    ///
    /// The listener is called immediately with the current state, then
    /// synchronously on every later log in and log out until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let _transition = self.notifier.transition();
        let subscription = self.notifier.register(Arc::clone(&listener));
        listener(self.current());
        subscription
    }
}

impl std::fmt::Debug for LoginStateStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginStateStream")
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}

fn restore(storage: &dyn KeyValueStorage) -> Option<SessionInformation> {
    let raw = match storage.get_item(SESSION_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(error) => {
            warn!(%error, "failed to read stored session");
            return None;
        }
    };

    match serde_json::from_str::<SessionInformation>(&raw) {
        Ok(info) if info.is_valid() => {
            debug!(user_id = info.id, "restored session from storage");
            Some(info)
        }
        Ok(_) => {
            warn!("stored session lacks a token or user id, discarding it");
            discard(storage);
            None
        }
        Err(error) => {
            warn!(%error, "stored session is malformed, discarding it");
            discard(storage);
            None
        }
    }
}

fn discard(storage: &dyn KeyValueStorage) {
    if let Err(error) = storage.remove_item(SESSION_KEY) {
        warn!(%error, "failed to clear stored session");
    }
}
