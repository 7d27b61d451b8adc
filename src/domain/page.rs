// SPDX-License-Identifier: MPL-2.0
//! Static pages served by the portal.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Role selection, features and the login modal.
    #[default]
    Landing,
    /// ASHA worker self-registration form.
    Registration,
    /// Patient records table.
    Dashboard,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Landing, Page::Registration, Page::Dashboard];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Registration => "registration",
            Page::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a known page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPage(pub String);

impl fmt::Display for UnknownPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown page: {} (expected landing, registration or dashboard)", self.0)
    }
}

impl std::error::Error for UnknownPage {}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.name() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_names() {
        assert_eq!("dashboard".parse::<Page>(), Ok(Page::Dashboard));
        assert!("index".parse::<Page>().is_err());
    }
}
