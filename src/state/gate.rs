//! Authorization checkpoint between a navigation request and a protected
//! view.
//!
//! `decide` enforces only the authentication boundary and is evaluated on
//! every navigation attempt. Role-gated entries are additionally hidden from
//! navigation chrome via `link_visible`, but that is presentation, not a
//! security boundary — the authoritative role check belongs to the server.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::net::types::Role;
use crate::state::session::SessionState;

/// Where unauthenticated navigation attempts are redirected.
pub const LOGIN_PATH: &str = "/login";

/// A navigation attempt against a declared route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRequest {
    pub path: &'static str,
    pub requires_auth: bool,
    pub requires_role: Option<Role>,
}

impl RouteRequest {
    /// A route reachable without a session.
    pub const fn public(path: &'static str) -> Self {
        Self { path, requires_auth: false, requires_role: None }
    }

    /// A route requiring an authenticated session.
    pub const fn protected(path: &'static str) -> Self {
        Self { path, requires_auth: true, requires_role: None }
    }

    /// A protected route whose navigation entry is shown only to `role`.
    pub const fn role_gated(path: &'static str, role: Role) -> Self {
        Self { path, requires_auth: true, requires_role: Some(role) }
    }
}

/// Outcome of evaluating a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the requested view.
    Permit,
    /// Send the visitor to the login entry point instead.
    Redirect(&'static str),
}

/// Decide whether `request` may render against the current session.
///
/// Authentication is the only boundary here; `user` presence is not
/// required — an authenticated session whose verification is still in
/// flight is permitted, and the view renders a loading affordance.
pub fn decide(session: &SessionState, request: &RouteRequest) -> GateDecision {
    if request.requires_auth && !session.is_authenticated {
        GateDecision::Redirect(LOGIN_PATH)
    } else {
        GateDecision::Permit
    }
}

/// Whether a navigation affordance for `request` should be shown.
///
/// Role-gated entries are hidden until the user is verified and the role
/// matches. Hiding a link never substitutes for `decide` or the server-side
/// check.
pub fn link_visible(session: &SessionState, request: &RouteRequest) -> bool {
    match request.requires_role {
        None => true,
        Some(role) => session.user.as_ref().is_some_and(|user| user.role == role),
    }
}
