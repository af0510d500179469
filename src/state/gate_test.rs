use super::*;
use crate::net::types::UserProfile;
use crate::storage::MemoryStore;

fn authenticated(role: Option<Role>) -> SessionState {
    let store = MemoryStore::default();
    let mut state = SessionState::default();
    state.set_token(&store, "tok-1".to_owned());
    if let Some(role) = role {
        state.set_user(UserProfile {
            id: "1".to_owned(),
            display_name: "Ada".to_owned(),
            role,
            avatar_url: None,
        });
    }
    state
}

// =============================================================
// decide
// =============================================================

#[test]
fn anonymous_request_to_protected_route_redirects_to_login() {
    let session = SessionState::default();
    let request = RouteRequest::protected("/clubs");
    assert_eq!(decide(&session, &request), GateDecision::Redirect(LOGIN_PATH));
}

#[test]
fn anonymous_request_to_public_route_is_permitted() {
    let session = SessionState::default();
    let request = RouteRequest::public("/login");
    assert_eq!(decide(&session, &request), GateDecision::Permit);
}

#[test]
fn authenticated_request_is_permitted_even_before_user_arrives() {
    // Verification still in flight: token present, user absent.
    let session = authenticated(None);
    assert!(session.user.is_none());
    let request = RouteRequest::protected("/");
    assert_eq!(decide(&session, &request), GateDecision::Permit);
}

#[test]
fn role_gating_does_not_change_the_auth_decision() {
    let member = authenticated(Some(Role::Member));
    let request = RouteRequest::role_gated("/analytics", Role::Admin);
    // Auth boundary only; the server owns the role check.
    assert_eq!(decide(&member, &request), GateDecision::Permit);

    let anonymous = SessionState::default();
    assert_eq!(decide(&anonymous, &request), GateDecision::Redirect(LOGIN_PATH));
}

// =============================================================
// link_visible
// =============================================================

#[test]
fn ungated_links_are_always_visible() {
    let session = SessionState::default();
    assert!(link_visible(&session, &RouteRequest::protected("/events")));
}

#[test]
fn role_gated_link_hidden_for_other_roles() {
    let member = authenticated(Some(Role::Member));
    let request = RouteRequest::role_gated("/analytics", Role::Admin);
    assert!(!link_visible(&member, &request));
}

#[test]
fn role_gated_link_hidden_while_user_is_unverified() {
    let pending = authenticated(None);
    let request = RouteRequest::role_gated("/analytics", Role::Admin);
    assert!(!link_visible(&pending, &request));
}

#[test]
fn role_gated_link_visible_for_matching_role() {
    let admin = authenticated(Some(Role::Admin));
    let request = RouteRequest::role_gated("/analytics", Role::Admin);
    assert!(link_visible(&admin, &request));
}
