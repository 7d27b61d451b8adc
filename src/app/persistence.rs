// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Language and theme are read once at boot and written on every explicit
//! change. Reads tolerate garbage (it is logged and ignored); writes are
//! best-effort so the in-memory choice stays authoritative.

use crate::application::port::storage::{set_best_effort, Storage, LANGUAGE_KEY, THEME_KEY};
use crate::i18n::LanguageCode;
use crate::ui::theming::ThemeMode;

/// Preferences found in storage at boot. `None` means absent or invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub language: Option<LanguageCode>,
    pub theme: Option<ThemeMode>,
}

impl Preferences {
    pub fn load(storage: &dyn Storage) -> Self {
        let language = storage.get(LANGUAGE_KEY).and_then(|code| {
            code.parse::<LanguageCode>()
                .map_err(|err| tracing::warn!("ignoring stored language: {}", err))
                .ok()
        });
        let theme = storage.get(THEME_KEY).and_then(|value| {
            value
                .parse::<ThemeMode>()
                .map_err(|err| tracing::warn!("ignoring stored theme: {}", err))
                .ok()
        });
        Self { language, theme }
    }
}

/// Records the selected language. Returns whether the write succeeded.
pub fn persist_language(storage: &mut dyn Storage, language: LanguageCode) -> bool {
    set_best_effort(storage, LANGUAGE_KEY, language.code())
}

/// Records the theme as `dark` or `light`.
pub fn persist_theme(storage: &mut dyn Storage, theme: ThemeMode) -> bool {
    set_best_effort(storage, THEME_KEY, theme.as_str())
}
