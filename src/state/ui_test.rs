use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_sidebar_open() {
    let state = UiState::default();
    assert!(state.sidebar_open);
}

#[test]
fn ui_state_default_no_notifications() {
    let state = UiState::default();
    assert!(state.notifications.is_empty());
}

// =============================================================
// Sidebar
// =============================================================

#[test]
fn toggle_sidebar_flips_and_restores() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
    state.toggle_sidebar();
    assert!(state.sidebar_open);
}

// =============================================================
// Notifications
// =============================================================

#[test]
fn push_notification_appends_with_unique_ids() {
    let mut state = UiState::default();
    let first = state.push_notification(NotificationKind::Success, "Login successful");
    let second = state.push_notification(NotificationKind::Error, "Login failed");
    assert_eq!(state.notifications.len(), 2);
    assert_ne!(first, second);
    assert_eq!(state.notifications[0].kind, NotificationKind::Success);
    assert_eq!(state.notifications[1].message, "Login failed");
}

#[test]
fn dismiss_notification_removes_only_the_target() {
    let mut state = UiState::default();
    let first = state.push_notification(NotificationKind::Success, "one");
    let second = state.push_notification(NotificationKind::Success, "two");
    state.dismiss_notification(&first);
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.notifications[0].id, second);
}

#[test]
fn dismiss_notification_ignores_unknown_ids() {
    let mut state = UiState::default();
    state.push_notification(NotificationKind::Error, "kept");
    state.dismiss_notification("no-such-id");
    assert_eq!(state.notifications.len(), 1);
}
