// SPDX-License-Identifier: MPL-2.0
//! Page-lifetime language state.
//!
//! Mutation only; persistence and re-rendering belong to the language
//! selector so this type can be exercised in isolation.

use super::LanguageCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageState {
    current: LanguageCode,
}

impl LanguageState {
    #[must_use]
    pub fn new(initial: LanguageCode) -> Self {
        Self { current: initial }
    }

    #[must_use]
    pub fn current(&self) -> LanguageCode {
        self.current
    }

    pub fn set(&mut self, language: LanguageCode) {
        self.current = language;
    }
}
