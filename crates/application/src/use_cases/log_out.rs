//! Log out use case.

use std::sync::Arc;

use crate::session::SessionStore;

/// Ends the session on this client.
///
/// Only the client-side state is cleared: the backend token simply stops
/// being sent.
#[derive(Debug, Clone)]
pub struct LogOut {
    store: Arc<SessionStore>,
}

impl LogOut {
    /// Creates a new `LogOut` use case.
    #[must_use]
    pub const fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// Clears the session.
    pub fn execute(&self) {
        self.store.log_out();
    }
}
