//! Wire types shared between the REST helpers and application state.

use std::collections::HashMap;

/// Role attached to a user account. Closed set; only `Admin` unlocks
/// additional navigation entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Admin,
}

/// The authenticated user's profile as returned by `/api/users/me/`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Successful login/register response: a token pair plus the user it
/// belongs to.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuthResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    pub user: UserProfile,
}

/// Registration form payload for `/api/auth/register/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub password: String,
    pub password_confirm: String,
}

/// Field-scoped validation messages, keyed by form field name.
pub type FieldErrors = HashMap<String, Vec<String>>;

/// Failure modes of explicit user actions (login, register, password
/// change). Validation errors are rendered inline next to the offending
/// field; the other two become toast messages. None of these mutate the
/// session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Per-field messages from a 400 response.
    Validation(FieldErrors),
    /// Rejected credentials or an expired session (401/403).
    Auth(String),
    /// Network unreachable or an unexpected server failure.
    Transport(String),
}

impl ApiError {
    /// Human-readable message for the toast layer. Validation errors are
    /// not summarized here; forms render them field by field.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(_) => "Please correct the highlighted fields",
            Self::Auth(msg) | Self::Transport(msg) => msg,
        }
    }
}

/// Failure modes of the startup identity check. Both clear the persisted
/// credentials; the distinction exists only for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyError {
    /// The token was rejected (invalid or expired).
    Unauthorized,
    /// The identity service could not be reached.
    Unreachable,
}

/// A club summary for the clubs page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Club {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// An event summary for the events page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub starts_at: String,
}

/// A bookable resource for the resources page.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResourceItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
}
