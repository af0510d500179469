use super::*;
use std::cell::RefCell;

use futures::executor::block_on;
use leptos::prelude::GetUntracked;
use leptos::prelude::RwSignal;
use leptos::prelude::Update;

use crate::net::types::{Role, UserProfile, VerifyError};
use crate::storage::{ACCESS_TOKEN_KEY, MemoryStore, REFRESH_TOKEN_KEY};

fn member(id: &str) -> UserProfile {
    UserProfile {
        id: id.to_owned(),
        display_name: format!("User {id}"),
        role: Role::Member,
        avatar_url: None,
    }
}

/// Verifier returning a fixed result and counting invocations.
struct StaticVerifier {
    result: Result<UserProfile, VerifyError>,
    calls: RefCell<u32>,
}

impl StaticVerifier {
    fn new(result: Result<UserProfile, VerifyError>) -> Self {
        Self { result, calls: RefCell::new(0) }
    }
}

impl IdentityVerifier for StaticVerifier {
    async fn verify(&self, _token: &str) -> Result<UserProfile, VerifyError> {
        *self.calls.borrow_mut() += 1;
        self.result.clone()
    }
}

/// Verifier that logs the session out mid-flight, then reports success —
/// the late success must be discarded.
struct LogoutThenSucceed<'a> {
    session: RwSignal<SessionState>,
    store: &'a MemoryStore,
}

impl IdentityVerifier for LogoutThenSucceed<'_> {
    async fn verify(&self, _token: &str) -> Result<UserProfile, VerifyError> {
        self.session.update(|state| state.logout(self.store));
        Ok(member("1"))
    }
}

// =============================================================
// Terminal states
// =============================================================

#[test]
fn no_persisted_token_settles_unauthenticated_without_verifying() {
    let store = MemoryStore::default();
    let session = RwSignal::new(SessionState::restore(&store));
    let verifier = StaticVerifier::new(Ok(member("1")));

    let outcome = block_on(run(session, &store, &verifier));

    assert_eq!(outcome, BootstrapOutcome::Unauthenticated);
    assert_eq!(*verifier.calls.borrow(), 0);
    assert!(!session.get_untracked().is_authenticated);
}

#[test]
fn verified_token_settles_authenticated_with_user() {
    let store = MemoryStore::default();
    store.set(ACCESS_TOKEN_KEY, "tok-1");
    let session = RwSignal::new(SessionState::restore(&store));
    let verifier = StaticVerifier::new(Ok(member("1")));

    let outcome = block_on(run(session, &store, &verifier));

    assert_eq!(outcome, BootstrapOutcome::Authenticated);
    assert_eq!(*verifier.calls.borrow(), 1);
    let state = session.get_untracked();
    assert!(state.is_authenticated);
    let user = state.user.expect("user populated");
    assert_eq!(user.id, "1");
    assert_eq!(user.role, Role::Member);
}

#[test]
fn unauthorized_token_is_cleared_and_settles_unauthenticated() {
    let store = MemoryStore::default();
    store.set(ACCESS_TOKEN_KEY, "tok-stale");
    store.set(REFRESH_TOKEN_KEY, "ref-stale");
    let session = RwSignal::new(SessionState::restore(&store));
    let verifier = StaticVerifier::new(Err(VerifyError::Unauthorized));

    let outcome = block_on(run(session, &store, &verifier));

    assert_eq!(outcome, BootstrapOutcome::Unauthenticated);
    assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    assert_eq!(store.get(REFRESH_TOKEN_KEY), None);
    let state = session.get_untracked();
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

#[test]
fn unreachable_service_is_handled_like_unauthorized() {
    let store = MemoryStore::default();
    store.set(ACCESS_TOKEN_KEY, "tok-1");
    let session = RwSignal::new(SessionState::restore(&store));
    let verifier = StaticVerifier::new(Err(VerifyError::Unreachable));

    let outcome = block_on(run(session, &store, &verifier));

    assert_eq!(outcome, BootstrapOutcome::Unauthenticated);
    assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    assert!(!session.get_untracked().is_authenticated);
}

// =============================================================
// Stale-result suppression
// =============================================================

#[test]
fn logout_during_verification_discards_the_late_success() {
    let store = MemoryStore::default();
    store.set(ACCESS_TOKEN_KEY, "tok-1");
    let session = RwSignal::new(SessionState::restore(&store));
    let verifier = LogoutThenSucceed { session, store: &store };

    let outcome = block_on(run(session, &store, &verifier));

    assert_eq!(outcome, BootstrapOutcome::Discarded);
    let state = session.get_untracked();
    assert!(!state.is_authenticated, "late success must not resurrect the session");
    assert!(state.user.is_none());
    assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
}
