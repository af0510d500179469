//! Route-level page components. Everything except `login`, `register`, and
//! `not_found` renders inside the gated layout.

pub mod analytics;
pub mod clubs;
pub mod dashboard;
pub mod events;
pub mod login;
pub mod not_found;
pub mod register;
pub mod resources;
pub mod settings;
