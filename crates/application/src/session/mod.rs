//! Client-side session state.
//!
//! This module provides:
//! - [`SessionStore`]: the single source of truth for "is a user logged in,
//!   and as whom", mirrored to local storage
//! - [`LoginStateStream`]: a replay-one stream of login-state transitions
//! - [`Subscription`]: the handle keeping a stream listener registered

mod notifier;
mod store;

pub use notifier::Subscription;
pub use store::{LoginStateStream, SESSION_KEY, SessionStore};
