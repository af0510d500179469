use super::*;
use serde_json::json;

// =============================================================
// error_from_response mapping
// =============================================================

#[test]
fn field_errors_on_400_become_validation() {
    let body = json!({
        "email": ["Enter a valid email address."],
        "password": ["This field is required."],
    });
    let err = error_from_response(400, Some(&body));
    let ApiError::Validation(fields) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(fields["email"], vec!["Enter a valid email address.".to_owned()]);
    assert_eq!(fields["password"], vec!["This field is required.".to_owned()]);
}

#[test]
fn single_string_field_errors_are_wrapped() {
    let body = json!({ "password_confirm": "Passwords do not match." });
    let err = error_from_response(400, Some(&body));
    let ApiError::Validation(fields) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(fields["password_confirm"], vec!["Passwords do not match.".to_owned()]);
}

#[test]
fn message_only_400_is_transport_not_validation() {
    let body = json!({ "message": "Malformed request" });
    assert_eq!(
        error_from_response(400, Some(&body)),
        ApiError::Transport("Malformed request".to_owned())
    );
}

#[test]
fn unauthorized_becomes_auth_with_server_message() {
    let body = json!({ "detail": "Invalid email or password" });
    assert_eq!(
        error_from_response(401, Some(&body)),
        ApiError::Auth("Invalid email or password".to_owned())
    );
}

#[test]
fn unauthorized_without_body_gets_generic_message() {
    assert_eq!(error_from_response(403, None), ApiError::Auth("Invalid credentials".to_owned()));
}

#[test]
fn server_error_becomes_transport_with_status() {
    assert_eq!(
        error_from_response(502, None),
        ApiError::Transport("request failed: 502".to_owned())
    );
}

#[test]
fn validation_message_is_generic_for_toasts() {
    let err = ApiError::Validation(FieldErrors::new());
    assert_eq!(err.message(), "Please correct the highlighted fields");
}

// =============================================================
// Payload shapes
// =============================================================

#[test]
fn auth_response_parses_with_and_without_refresh() {
    let with: AuthResponse = serde_json::from_value(json!({
        "access": "tok-a",
        "refresh": "tok-r",
        "user": { "id": "1", "display_name": "Ada", "role": "admin" },
    }))
    .expect("auth response");
    assert_eq!(with.refresh.as_deref(), Some("tok-r"));
    assert_eq!(with.user.role, crate::net::types::Role::Admin);

    let without: AuthResponse = serde_json::from_value(json!({
        "access": "tok-a",
        "user": { "id": "1", "display_name": "Ada" },
    }))
    .expect("auth response without refresh");
    assert_eq!(without.refresh, None);
    assert_eq!(without.user.role, crate::net::types::Role::Member);
}

#[test]
fn user_profile_role_defaults_to_member() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": "7",
        "display_name": "Grace",
        "avatar_url": "https://example.test/g.png",
    }))
    .expect("profile");
    assert_eq!(user.role, crate::net::types::Role::Member);
    assert_eq!(user.avatar_url.as_deref(), Some("https://example.test/g.png"));
}

// =============================================================
// Server-side stubs
// =============================================================

#[test]
fn login_is_unavailable_without_a_browser() {
    let result = futures::executor::block_on(login("a@example.test", "pw"));
    assert!(matches!(result, Err(ApiError::Transport(_))));
}

#[test]
fn verifier_is_unreachable_without_a_browser() {
    let result = futures::executor::block_on(ApiVerifier.verify("tok-1"));
    assert_eq!(result, Err(VerifyError::Unreachable));
}

#[test]
fn list_fetchers_degrade_to_none_without_a_browser() {
    assert!(futures::executor::block_on(fetch_clubs("tok-1")).is_none());
    assert!(futures::executor::block_on(fetch_events("tok-1")).is_none());
    assert!(futures::executor::block_on(fetch_resources("tok-1")).is_none());
}
