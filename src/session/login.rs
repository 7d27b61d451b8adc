// SPDX-License-Identifier: MPL-2.0
//! Login request payload and response interpretation.
//!
//! The backend's reply is not uniform. It may redirect, answer with plain
//! text, or answer with a `{ success, user | error }` JSON object. Every
//! shape maps to exactly one [`LoginOutcome`].

use super::{with_redirect_prevention, UserSnapshot};
use crate::domain::Role;
use serde::{Deserialize, Serialize};

/// Body posted to the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    #[serde(serialize_with = "serialize_role")]
    pub role: Role,
}

fn serialize_role<S: serde::Serializer>(role: &Role, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(role.id())
}

impl Credentials {
    /// JSON request body.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// The parts of an HTTP response the login flow looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginResponse {
    pub status: u16,
    pub location: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl LoginResponse {
    fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }

    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|content_type| content_type.contains("application/json"))
    }
}

#[derive(Deserialize)]
struct JsonReply {
    success: bool,
    #[serde(default)]
    user: Option<UserSnapshot>,
    #[serde(default)]
    error: Option<String>,
}

/// Why a login did not authenticate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginFailure {
    /// The server redirected to the page the user is already on.
    #[error("Redirect loop detected")]
    RedirectLoop,
    /// A non-JSON reply with an error status.
    #[error("Server returned non-JSON response: {0}")]
    NonJsonResponse(u16),
    /// The JSON reply could not be understood.
    #[error("Malformed server reply: {0}")]
    MalformedReply(String),
    /// The server declined, with its message if it gave one.
    #[error("{}", .0.as_deref().unwrap_or("Login rejected"))]
    Rejected(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Follow the server's redirect; already carries `redirect=prevent`.
    Redirect(String),
    /// The user is logged in; persist the snapshot and go to the dashboard.
    Authenticated(UserSnapshot),
    Failed(LoginFailure),
}

/// Maps a login reply to its outcome.
///
/// `current_url` is the page the form was submitted from; a redirect back to
/// it is reported as a loop.
#[must_use]
pub fn interpret(response: &LoginResponse, credentials: &Credentials, current_url: &str) -> LoginOutcome {
    if response.is_redirect() {
        tracing::warn!(status = response.status, location = ?response.location, "server redirect on login");
        return match response.location.as_deref() {
            Some(location) if !location.is_empty() && location != current_url => {
                LoginOutcome::Redirect(with_redirect_prevention(location))
            }
            _ => LoginOutcome::Failed(LoginFailure::RedirectLoop),
        };
    }

    if !response.is_json() {
        let preview: String = response.body.chars().take(200).collect();
        tracing::warn!(status = response.status, body = %preview, "non-JSON login response");
        return if response.is_success() {
            LoginOutcome::Authenticated(UserSnapshot::synthesized(
                &credentials.username,
                credentials.role,
            ))
        } else {
            LoginOutcome::Failed(LoginFailure::NonJsonResponse(response.status))
        };
    }

    match serde_json::from_str::<JsonReply>(&response.body) {
        Ok(JsonReply {
            success: true,
            user: Some(user),
            ..
        }) => LoginOutcome::Authenticated(user),
        Ok(JsonReply { success: true, .. }) => LoginOutcome::Failed(LoginFailure::MalformedReply(
            "success without user".to_string(),
        )),
        Ok(JsonReply { error, .. }) => LoginOutcome::Failed(LoginFailure::Rejected(error)),
        Err(err) => LoginOutcome::Failed(LoginFailure::MalformedReply(err.to_string())),
    }
}
