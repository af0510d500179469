//! Session state: the authenticated identity of the running client.
//!
//! DESIGN
//! ======
//! One `SessionState` exists per process, provided from the app root as an
//! `RwSignal` context. All mutation goes through the methods here so the
//! invariant holds everywhere: `is_authenticated` is never true while
//! `token` is absent. Persistence and the in-memory update stay together in
//! each mutator — a token that could not be persisted is never claimed.
//!
//! A monotonic epoch guards against late async results: it advances whenever
//! the credential identity changes (logout or a new token), and the
//! verification resolvers discard results captured under an older epoch.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{AuthResponse, UserProfile};
use crate::storage::{ACCESS_TOKEN_KEY, CredentialStore, REFRESH_TOKEN_KEY};

/// Authentication state tracking the current user, token, and auth flag.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    expired: bool,
    epoch: u64,
}

/// Externally observable lifecycle phase of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No credential; only public views are reachable.
    Unauthenticated,
    /// A token exists but the user behind it has not been verified yet.
    /// Transient: gated views render a loading affordance, not an error.
    PendingVerification,
    /// Token present and user verified.
    Authenticated,
    /// A persisted credential was rejected and cleared; a fresh login is
    /// required. Otherwise identical to `Unauthenticated`.
    Expired,
}

impl SessionState {
    /// Rebuild the session from persisted credentials at process start.
    ///
    /// A persisted token is trusted optimistically (`is_authenticated` set)
    /// until the bootstrap verification settles; the user is always absent
    /// here and filled in by [`set_user`](Self::set_user).
    pub fn restore(store: &impl CredentialStore) -> Self {
        let token = store.get(ACCESS_TOKEN_KEY);
        Self {
            user: None,
            is_authenticated: token.is_some(),
            token,
            expired: false,
            epoch: 0,
        }
    }

    /// Replace the current user. Token and auth flag are untouched.
    pub fn set_user(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    /// Persist `token` and mark the session authenticated.
    ///
    /// Returns `false` without touching in-memory state when the store
    /// rejects the write. Changing to a different token drops the previous
    /// user — it was verified against the old credential — and advances the
    /// epoch so any in-flight verification of the old token is discarded.
    /// The caller is expected to verify the new token and call `set_user`.
    pub fn set_token(&mut self, store: &impl CredentialStore, token: String) -> bool {
        if !store.set(ACCESS_TOKEN_KEY, &token) {
            return false;
        }
        if self.token.as_deref() != Some(token.as_str()) {
            self.user = None;
            self.epoch += 1;
        }
        self.token = Some(token);
        self.is_authenticated = true;
        self.expired = false;
        true
    }

    /// Apply a successful login or registration response: persist and claim
    /// the token pair, then trust the user the server returned alongside it.
    ///
    /// Returns `false` without mutating when the token could not be
    /// persisted.
    pub fn sign_in(&mut self, store: &impl CredentialStore, auth: AuthResponse) -> bool {
        if !self.set_token(store, auth.access) {
            return false;
        }
        if let Some(refresh) = auth.refresh {
            store.set(REFRESH_TOKEN_KEY, &refresh);
        }
        self.set_user(auth.user);
        true
    }

    /// Clear the session and both persisted credential slots. Idempotent.
    pub fn logout(&mut self, store: &impl CredentialStore) {
        self.clear(store);
        self.expired = false;
    }

    /// Epoch snapshot taken before suspending on an async identity check.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Accept a verification result captured at `epoch`.
    ///
    /// Returns `false` and leaves the state untouched when the session has
    /// been logged out or re-keyed since the check started (stale-result
    /// suppression).
    pub fn resolve_verified(&mut self, epoch: u64, user: UserProfile) -> bool {
        if epoch != self.epoch || !self.is_authenticated {
            return false;
        }
        self.set_user(user);
        true
    }

    /// Accept a verification failure captured at `epoch`: forced logout,
    /// leaving the session in the `Expired` phase. Stale failures are
    /// discarded the same way as stale successes.
    pub fn resolve_failed(&mut self, epoch: u64, store: &impl CredentialStore) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.clear(store);
        self.expired = true;
        true
    }

    /// Current lifecycle phase, derived from the fields above.
    pub fn phase(&self) -> SessionPhase {
        if self.is_authenticated {
            if self.user.is_some() {
                SessionPhase::Authenticated
            } else {
                SessionPhase::PendingVerification
            }
        } else if self.expired {
            SessionPhase::Expired
        } else {
            SessionPhase::Unauthenticated
        }
    }

    fn clear(&mut self, store: &impl CredentialStore) {
        store.remove(ACCESS_TOKEN_KEY);
        store.remove(REFRESH_TOKEN_KEY);
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
        self.epoch += 1;
    }
}
