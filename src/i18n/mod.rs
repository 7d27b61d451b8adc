// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the portal.
//!
//! This module provides localization using the Fluent localization system.
//!
//! # Components
//!
//! - [`DictionaryStore`]: one [`Dictionary`] per supported language, loaded
//!   from embedded `.ftl` files and checked for key-set completeness
//! - [`LanguageState`]: the page's current language
//! - [`TranslationKey`]: typed key catalog, including indexed groups
//!
//! Rendering dictionaries into a page lives in [`crate::render`]; switching
//! language lives in [`crate::app`].

pub mod dictionary;
pub mod keys;
pub mod language;
pub mod state;

pub use dictionary::{Dictionary, DictionaryStore, ValidationReport};
pub use keys::{FeatureField, RoleField, StaticKey, TranslationKey};
pub use language::LanguageCode;
pub use state::LanguageState;
