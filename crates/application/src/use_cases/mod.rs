//! Application use cases (workflow orchestration).
//!
//! Each use case validates its input locally, calls one service and, for the
//! login-related ones, pushes the outcome into the session store. A failed
//! call never touches the store.

mod content;
mod log_in;
mod log_out;
mod register;
mod update_profile;

pub use content::{AddComment, CreateArticle, SubscribeTheme};
pub use log_in::LogIn;
pub use log_out::LogOut;
pub use register::Register;
pub use update_profile::UpdateProfile;
