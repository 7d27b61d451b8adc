// SPDX-License-Identifier: MPL-2.0
//! User roles that drive which login and dashboard flow applies.

use std::fmt;
use std::str::FromStr;

/// A user category selectable from the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Asha,
    Volunteer,
    Admin,
    Patient,
}

impl Role {
    /// All roles, in the order their cards appear on the landing page.
    pub const ALL: [Role; 4] = [Role::Asha, Role::Volunteer, Role::Admin, Role::Patient];

    /// Internal identifier, used in data attributes, key names and storage.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Role::Asha => "asha",
            Role::Volunteer => "volunteer",
            Role::Admin => "admin",
            Role::Patient => "patient",
        }
    }

    /// Dashboard page a successfully authenticated user of this role lands on.
    #[must_use]
    pub fn dashboard_page(self) -> &'static str {
        match self {
            Role::Patient => "pd.html",
            Role::Asha => "ashaworker.html",
            Role::Volunteer => "cd.html",
            Role::Admin => "had.html",
        }
    }

    /// Self-service registration page, if the role has one.
    ///
    /// Patients are onboarded by a health administrator instead.
    #[must_use]
    pub fn registration_page(self) -> Option<&'static str> {
        match self {
            Role::Volunteer => Some("cv.html"),
            Role::Admin => Some("uy1ha.html"),
            Role::Asha => Some("uy.html"),
            Role::Patient => None,
        }
    }

    /// English display label used when synthesizing a user record.
    #[must_use]
    pub fn capitalized(self) -> &'static str {
        match self {
            Role::Asha => "Asha",
            Role::Volunteer => "Volunteer",
            Role::Admin => "Admin",
            Role::Patient => "Patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when a string does not name a known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.id() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_role_id() {
        for role in Role::ALL {
            assert_eq!(role.id().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn rejects_unknown_role() {
        assert_eq!(
            "hospital".parse::<Role>(),
            Err(UnknownRole("hospital".to_string()))
        );
    }

    #[test]
    fn patients_have_no_registration_page() {
        assert_eq!(Role::Patient.registration_page(), None);
        assert_eq!(Role::Asha.registration_page(), Some("uy.html"));
    }

    #[test]
    fn dashboards_are_distinct_per_role() {
        let pages: std::collections::HashSet<_> =
            Role::ALL.iter().map(|r| r.dashboard_page()).collect();
        assert_eq!(pages.len(), Role::ALL.len());
    }
}
