//! Transient UI preferences: sidebar visibility and the toast queue.
//! Nothing here persists or affects access control.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state provided as a context signal from the app root.
#[derive(Clone, Debug)]
pub struct UiState {
    pub sidebar_open: bool,
    pub notifications: Vec<Notification>,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_open: true, notifications: Vec::new() }
    }
}

/// A single toast entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
}

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Queue a toast and return its id so the caller can schedule dismissal.
    pub fn push_notification(&mut self, kind: NotificationKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.notifications.push(Notification { id: id.clone(), kind, message: message.into() });
        id
    }

    /// Drop a toast by id. Unknown ids are ignored (the toast may have been
    /// dismissed by hand before its timer fired).
    pub fn dismiss_notification(&mut self, id: &str) {
        self.notifications.retain(|n| n.id != id);
    }
}
