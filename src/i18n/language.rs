// SPDX-License-Identifier: MPL-2.0
//! The closed set of languages the portal is translated into.

use crate::error::I18nError;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LanguageCode {
    #[default]
    English,
    Assamese,
    Bengali,
    Hindi,
}

impl LanguageCode {
    /// Every supported language, in the order offered by the selector.
    pub const ALL: [LanguageCode; 4] = [
        LanguageCode::English,
        LanguageCode::Assamese,
        LanguageCode::Bengali,
        LanguageCode::Hindi,
    ];

    /// The short code persisted in storage and used as the dictionary file stem.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::English => "en",
            LanguageCode::Assamese => "as",
            LanguageCode::Bengali => "bn",
            LanguageCode::Hindi => "hi",
        }
    }

    /// Name of the language written in the language itself.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            LanguageCode::English => "English",
            LanguageCode::Assamese => "অসমীয়া",
            LanguageCode::Bengali => "বাংলা",
            LanguageCode::Hindi => "हिंदी",
        }
    }

    /// Unicode language identifier handed to Fluent.
    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        // Every code above is a bare ISO 639-1 subtag, which always parses.
        self.code()
            .parse::<LanguageIdentifier>()
            .unwrap_or_default()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LanguageCode::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| I18nError::UnsupportedLanguage(s.to_string()))
    }
}
