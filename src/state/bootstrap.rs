//! One-shot startup reconciliation of persisted credentials against the
//! identity service.
//!
//! Runs once per process start, before any protected view treats the session
//! user as authoritative. Suspends exactly once (the verification call) and
//! settles into either `Authenticated` or `Unauthenticated`; it never polls
//! and never retries. A failed verification is the sole recovery path for a
//! stale credential: both persisted slots are cleared and the user lands on
//! the login view without an error.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use leptos::prelude::GetUntracked;
use leptos::prelude::RwSignal;
use leptos::prelude::Update;

use crate::net::api::IdentityVerifier;
use crate::state::session::SessionState;
use crate::storage::CredentialStore;

/// How the startup reconciliation settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// No persisted token, or verification failed and credentials were
    /// cleared.
    Unauthenticated,
    /// The persisted token was verified and the user is populated.
    Authenticated,
    /// The session was logged out or re-keyed while verification was in
    /// flight; the late result was discarded and the session left as the
    /// intervening mutation put it.
    Discarded,
}

/// Reconcile the restored session against the identity service.
///
/// The session signal must have been built with
/// [`SessionState::restore`](crate::state::session::SessionState::restore):
/// a persisted token is already optimistically authenticated, so the gate
/// never redirects while the single verification round-trip is pending.
pub async fn run<S, V>(session: RwSignal<SessionState>, store: &S, verifier: &V) -> BootstrapOutcome
where
    S: CredentialStore,
    V: IdentityVerifier,
{
    let (token, epoch) = {
        let snapshot = session.get_untracked();
        (snapshot.token.clone(), snapshot.epoch())
    };
    // Nothing persisted: the empty session is already terminal.
    let Some(token) = token else {
        return BootstrapOutcome::Unauthenticated;
    };

    match verifier.verify(&token).await {
        Ok(user) => {
            let mut applied = false;
            session.update(|state| applied = state.resolve_verified(epoch, user));
            if applied {
                BootstrapOutcome::Authenticated
            } else {
                BootstrapOutcome::Discarded
            }
        }
        // Unauthorized and unreachable are handled identically: drop the
        // credential and require a fresh login.
        Err(_) => {
            let mut applied = false;
            session.update(|state| applied = state.resolve_failed(epoch, store));
            if applied {
                BootstrapOutcome::Unauthenticated
            } else {
                BootstrapOutcome::Discarded
            }
        }
    }
}
