//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `ui`) so individual components can
//! depend on small focused models. `bootstrap` owns the one-shot startup
//! reconciliation and `gate` the navigation checkpoint; both operate on
//! `session` and nothing else.

pub mod bootstrap;
pub mod gate;
pub mod session;
pub mod ui;
