// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.
//!
//! The theme is a class on the document root (`dark`), mirroring how the
//! stylesheet switches palettes, plus the toggle button's icon.

use crate::dom::{Document, Selector};
use crate::application::port::icons::ICON_ATTRIBUTE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Class that switches the page palette.
pub const DARK_CLASS: &str = "dark";

/// Id of the icon inside the theme toggle button.
pub const THEME_ICON_ID: &str = "theme-toggle-icon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Icon shown on the toggle button.
    #[must_use]
    pub fn icon_name(self) -> &'static str {
        match self {
            ThemeMode::Light => "sun",
            ThemeMode::Dark => "moon",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for theme values other than `light` and `dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid theme mode: {}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for ThemeMode {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Applies `mode` to the document root and the toggle icon.
///
/// Does not re-render icons; the caller does that once per interaction.
pub fn apply(document: &mut Document, mode: ThemeMode) {
    document.root_mut().toggle_class(DARK_CLASS, mode.is_dark());
    document.set_attribute(&Selector::id(THEME_ICON_ID), ICON_ATTRIBUTE, mode.icon_name());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    fn page() -> Document {
        Document::new(
            Element::new("html").child(
                Element::new("button")
                    .id("theme-toggle")
                    .child(Element::new("i").id(THEME_ICON_ID).attr(ICON_ATTRIBUTE, "sun")),
            ),
        )
    }

    #[test]
    fn default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert!(!ThemeMode::default().is_dark());
    }

    #[test]
    fn toggled_flips_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn parses_stored_values() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("Light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("system".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn apply_dark_sets_root_class_and_moon_icon() {
        let mut doc = page();
        apply(&mut doc, ThemeMode::Dark);
        assert!(doc.root().has_class(DARK_CLASS));
        assert_eq!(
            doc.attribute(&Selector::id(THEME_ICON_ID), ICON_ATTRIBUTE),
            Some("moon".into())
        );

        apply(&mut doc, ThemeMode::Light);
        assert!(!doc.root().has_class(DARK_CLASS));
        assert_eq!(
            doc.attribute(&Selector::id(THEME_ICON_ID), ICON_ATTRIBUTE),
            Some("sun".into())
        );
    }
}
