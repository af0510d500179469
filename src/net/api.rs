//! REST API helpers for communicating with the campus service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Non-2xx bodies
//! are mapped through [`error_from_response`] into the `ApiError` taxonomy:
//! field-scoped validation errors for forms, auth rejections, and transport
//! failures. The mapping is pure so it can be tested without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    ApiError, AuthResponse, Club, Event, FieldErrors, RegisterRequest, ResourceItem, UserProfile,
    VerifyError,
};

/// Resolves the user profile behind a token, or fails.
///
/// The production implementation is [`ApiVerifier`]; tests substitute mocks.
/// Futures here are not `Send` — everything runs on the browser's single
/// thread via `spawn_local`.
#[allow(async_fn_in_trait)]
pub trait IdentityVerifier {
    async fn verify(&self, token: &str) -> Result<UserProfile, VerifyError>;
}

/// Identity check against `GET /api/users/me/`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiVerifier;

impl IdentityVerifier for ApiVerifier {
    async fn verify(&self, token: &str) -> Result<UserProfile, VerifyError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get("/api/users/me/")
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .map_err(|_| VerifyError::Unreachable)?;
            match resp.status() {
                200 => resp.json::<UserProfile>().await.map_err(|_| VerifyError::Unreachable),
                401 | 403 => Err(VerifyError::Unauthorized),
                _ => Err(VerifyError::Unreachable),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(VerifyError::Unreachable)
        }
    }
}

/// Log in with email and password via `POST /api/auth/login/`.
///
/// # Errors
///
/// `Validation` for field-scoped 400s, `Auth` for rejected credentials,
/// `Transport` for anything else.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login/")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(not_available())
    }
}

/// Create an account via `POST /api/auth/register/`. Returns the same
/// token-plus-user payload as login so the caller can sign the user in.
///
/// # Errors
///
/// Same taxonomy as [`login`].
pub async fn register(payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/register/")
            .json(payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(not_available())
    }
}

/// Tell the server to discard the session via `POST /api/auth/logout/`.
///
/// Best-effort: the local session is already cleared when this runs, so
/// failures are ignored.
pub async fn logout_remote(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout/")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Change the current user's password via
/// `POST /api/users/me/change_password/`.
///
/// # Errors
///
/// Same taxonomy as [`login`]; validation messages are keyed by the
/// password form fields.
pub async fn change_password(
    token: &str,
    current_password: &str,
    new_password: &str,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/users/me/change_password/")
            .header("Authorization", &format!("Bearer {token}"))
            .json(&serde_json::json!({
                "current_password": current_password,
                "new_password": new_password,
            }))
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(error_from_body(&resp).await)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, current_password, new_password);
        Err(not_available())
    }
}

/// Fetch the club list. Returns `None` on any failure or on the server.
pub async fn fetch_clubs(token: &str) -> Option<Vec<Club>> {
    authed_list("/api/clubs/", token).await
}

/// Fetch upcoming events. Returns `None` on any failure or on the server.
pub async fn fetch_events(token: &str) -> Option<Vec<Event>> {
    authed_list("/api/events/", token).await
}

/// Fetch bookable resources. Returns `None` on any failure or on the server.
pub async fn fetch_resources(token: &str) -> Option<Vec<ResourceItem>> {
    authed_list("/api/resources/", token).await
}

async fn authed_list<T: serde::de::DeserializeOwned>(path: &str, token: &str) -> Option<Vec<T>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(path)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<T>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        None
    }
}

#[cfg(feature = "hydrate")]
async fn parse_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if resp.ok() {
        resp.json::<T>().await.map_err(|e| ApiError::Transport(e.to_string()))
    } else {
        Err(error_from_body(&resp).await)
    }
}

#[cfg(feature = "hydrate")]
async fn error_from_body(resp: &gloo_net::http::Response) -> ApiError {
    let body = resp.json::<serde_json::Value>().await.ok();
    error_from_response(resp.status(), body.as_ref())
}

#[cfg(not(feature = "hydrate"))]
fn not_available() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

/// Map a non-2xx response to the error taxonomy.
///
/// A 400 whose body is a map of field names to message lists becomes a
/// `Validation` error (the shape `Login`/`Register` forms render inline).
/// 401/403 become `Auth`; everything else is `Transport` with the server's
/// message when one exists.
pub fn error_from_response(status: u16, body: Option<&serde_json::Value>) -> ApiError {
    if status == 400 {
        if let Some(errors) = body.and_then(parse_field_errors) {
            return ApiError::Validation(errors);
        }
    }
    let message = body.and_then(|value| {
        value
            .get("message")
            .or_else(|| value.get("detail"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned)
    });
    if status == 401 || status == 403 {
        return ApiError::Auth(message.unwrap_or_else(|| "Invalid credentials".to_owned()));
    }
    ApiError::Transport(message.unwrap_or_else(|| format!("request failed: {status}")))
}

/// Extract `{field: [messages]}` pairs from a validation body.
/// `message`/`detail` keys are the generic-message channel, not fields.
fn parse_field_errors(body: &serde_json::Value) -> Option<FieldErrors> {
    let map = body.as_object()?;
    let mut errors = FieldErrors::new();
    for (field, messages) in map {
        if field == "message" || field == "detail" {
            continue;
        }
        match messages {
            serde_json::Value::Array(items) => {
                let texts: Vec<String> = items
                    .iter()
                    .filter_map(|m| m.as_str().map(str::to_owned))
                    .collect();
                if !texts.is_empty() {
                    errors.insert(field.clone(), texts);
                }
            }
            serde_json::Value::String(text) => {
                errors.insert(field.clone(), vec![text.clone()]);
            }
            _ => {}
        }
    }
    if errors.is_empty() { None } else { Some(errors) }
}
