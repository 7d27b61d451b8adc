// SPDX-License-Identifier: MPL-2.0
//! Authenticated-user bookkeeping.
//!
//! The last authenticated user is kept as a JSON snapshot under
//! [`CURRENT_USER_KEY`]: written on login, read to gate dashboards, removed
//! on logout. Storage failures are logged and otherwise ignored.

pub mod login;
pub mod reload_guard;

pub use login::{Credentials, LoginFailure, LoginOutcome, LoginResponse};
pub use reload_guard::{ReloadCheck, ReloadGuard};

use crate::application::port::storage::{
    remove_best_effort, set_best_effort, Storage, CURRENT_USER_KEY,
};
use crate::domain::Role;
use serde::{Deserialize, Serialize};

/// Query parameter appended to redirects so the target page does not bounce
/// the user straight back.
pub const REDIRECT_PREVENT: &str = "redirect=prevent";

/// Page the portal returns to after logout.
pub const HOME_PAGE: &str = "index.html";

/// The user record persisted after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUser", into = "RawUser")]
pub struct UserSnapshot {
    pub id: String,
    pub role: Role,
    pub name: String,
}

impl UserSnapshot {
    /// Record used when the backend accepts a login without describing the
    /// user: the username as id, and "<Role> User" as display name.
    #[must_use]
    pub fn synthesized(username: &str, role: Role) -> Self {
        Self {
            id: username.to_string(),
            role,
            name: format!("{} User", role.capitalized()),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawUser {
    id: String,
    role: String,
    #[serde(default)]
    name: String,
}

impl TryFrom<RawUser> for UserSnapshot {
    type Error = String;

    fn try_from(raw: RawUser) -> Result<Self, Self::Error> {
        let role = raw.role.parse::<Role>().map_err(|err| err.to_string())?;
        Ok(Self {
            id: raw.id,
            role,
            name: raw.name,
        })
    }
}

impl From<UserSnapshot> for RawUser {
    fn from(user: UserSnapshot) -> Self {
        Self {
            id: user.id,
            role: user.role.id().to_string(),
            name: user.name,
        }
    }
}

/// Persists `user` as the current user.
pub fn store_user(storage: &mut dyn Storage, user: &UserSnapshot) {
    match serde_json::to_string(user) {
        Ok(json) => {
            set_best_effort(storage, CURRENT_USER_KEY, &json);
        }
        Err(err) => tracing::warn!("failed to encode user snapshot: {}", err),
    }
}

/// Reads the current user. A malformed snapshot is treated as no user.
#[must_use]
pub fn load_user(storage: &dyn Storage) -> Option<UserSnapshot> {
    let json = storage.get(CURRENT_USER_KEY)?;
    match serde_json::from_str(&json) {
        Ok(user) => Some(user),
        Err(err) => {
            tracing::warn!("ignoring stored user snapshot: {}", err);
            None
        }
    }
}

/// Forgets the current user.
pub fn clear_user(storage: &mut dyn Storage) {
    remove_best_effort(storage, CURRENT_USER_KEY);
}

/// Appends [`REDIRECT_PREVENT`] to `url` with the right separator.
#[must_use]
pub fn with_redirect_prevention(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}{REDIRECT_PREVENT}")
}

/// Where a freshly authenticated user of `role` is sent.
#[must_use]
pub fn dashboard_destination(role: Role) -> String {
    with_redirect_prevention(role.dashboard_page())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStorage;

    #[test]
    fn snapshot_round_trips_through_storage() {
        let mut storage = MemoryStorage::new();
        let user = UserSnapshot {
            id: "asha-17".into(),
            role: Role::Asha,
            name: "Rina".into(),
        };
        store_user(&mut storage, &user);

        let json = storage.get(CURRENT_USER_KEY).expect("stored");
        assert!(json.contains("\"role\":\"asha\""));
        assert_eq!(load_user(&storage), Some(user));
    }

    #[test]
    fn unknown_role_in_snapshot_is_no_user() {
        let mut storage = MemoryStorage::new();
        storage
            .set(CURRENT_USER_KEY, r#"{"id":"x","role":"hospital","name":"X"}"#)
            .unwrap();
        assert_eq!(load_user(&storage), None);
    }

    #[test]
    fn cleared_user_is_gone() {
        let mut storage = MemoryStorage::new();
        store_user(&mut storage, &UserSnapshot::synthesized("p1", Role::Patient));
        assert!(load_user(&storage).is_some());

        clear_user(&mut storage);
        assert_eq!(load_user(&storage), None);
    }

    #[test]
    fn synthesized_user_uses_capitalized_role() {
        let user = UserSnapshot::synthesized("vol42", Role::Volunteer);
        assert_eq!(user.id, "vol42");
        assert_eq!(user.name, "Volunteer User");
    }

    #[test]
    fn redirect_prevention_separator() {
        assert_eq!(dashboard_destination(Role::Admin), "had.html?redirect=prevent");
        assert_eq!(
            with_redirect_prevention("/home?tab=1"),
            "/home?tab=1&redirect=prevent"
        );
    }
}
