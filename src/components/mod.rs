//! Reusable UI components: the protected-shell chrome and the route gate
//! wrapper.

pub mod input;
pub mod layout;
pub mod navbar;
pub mod notifications;
pub mod require_auth;
pub mod sidebar;
