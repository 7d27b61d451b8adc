// SPDX-License-Identifier: MPL-2.0
//! Dictionary store backed by Fluent resources.
//!
//! One `.ftl` resource per [`LanguageCode`] is embedded from `assets/i18n/`.
//! Each resource becomes a [`Dictionary`]; the [`DictionaryStore`] owns them
//! and checks that every language defines exactly the same key set.

use super::keys::{RoleField, TranslationKey};
use super::LanguageCode;
use crate::domain::Role;
use crate::error::I18nError;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use fluent_syntax::ast;
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Placeholder name used by role-parametrized templates (`{ $role }`).
pub const ROLE_ARG: &str = "role";

/// Complete key → string mapping for one language.
pub struct Dictionary {
    language: LanguageCode,
    bundle: FluentBundle<FluentResource>,
    keys: BTreeSet<String>,
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("language", &self.language)
            .field("keys", &self.keys.len())
            .finish()
    }
}

impl Dictionary {
    /// Parses a Fluent source into a dictionary for `language`.
    pub fn parse(language: LanguageCode, source: &str) -> Result<Self, I18nError> {
        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            I18nError::Parse {
                language,
                message: format!("{} syntax error(s), first: {:?}", errors.len(), errors.first()),
            }
        })?;

        let keys = resource
            .entries()
            .filter_map(|entry| match entry {
                ast::Entry::Message(message) => Some(message.id.name.to_string()),
                _ => None,
            })
            .collect();

        let mut bundle = FluentBundle::new(vec![language.langid()]);
        // Substituted text must be byte-exact, without FSI/PDI marks.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| I18nError::Parse {
                language,
                message: format!("{:?}", errors),
            })?;

        Ok(Self {
            language,
            bundle,
            keys,
        })
    }

    #[must_use]
    pub fn language(&self) -> LanguageCode {
        self.language
    }

    /// Message identifiers defined by this dictionary.
    #[must_use]
    pub fn keys(&self) -> &BTreeSet<String> {
        &self.keys
    }

    #[must_use]
    pub fn contains(&self, key: &TranslationKey) -> bool {
        self.bundle.has_message(&key.id())
    }

    /// Returns the raw value for `key`. Templates come back with their
    /// placeholders unresolved.
    pub fn lookup(&self, key: &TranslationKey) -> Result<String, I18nError> {
        self.format(key, None)
    }

    /// Formats `key` with the localized name of `role` bound to `{ $role }`.
    pub fn format_with_role(&self, key: &TranslationKey, role: Role) -> Result<String, I18nError> {
        let role_name = self.lookup(&TranslationKey::Role(role, RoleField::Name))?;
        let mut args = FluentArgs::new();
        args.set(ROLE_ARG, role_name);
        self.format(key, Some(&args))
    }

    fn format(&self, key: &TranslationKey, args: Option<&FluentArgs<'_>>) -> Result<String, I18nError> {
        let id = key.id();
        let pattern = self
            .bundle
            .get_message(&id)
            .and_then(|message| message.value())
            .ok_or_else(|| I18nError::MissingKey {
                language: self.language,
                key: id.to_string(),
            })?;

        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() && args.is_some() {
            tracing::debug!(language = %self.language, key = %id, ?errors, "template resolved with errors");
        }
        Ok(value.into_owned())
    }
}

/// Outcome of checking the store against the key catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub defects: Vec<I18nError>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.defects.is_empty()
    }

    /// Emits every defect at error level.
    pub fn log(&self) {
        for defect in &self.defects {
            tracing::error!("{}", defect);
        }
    }
}

/// Holds the dictionary of every supported language.
#[derive(Debug, Default)]
pub struct DictionaryStore {
    dictionaries: BTreeMap<LanguageCode, Dictionary>,
}

impl DictionaryStore {
    /// Loads the dictionaries embedded in the binary.
    ///
    /// Parse failures are fatal. Completeness defects are logged; use
    /// [`DictionaryStore::load_embedded_checked`] to act on them.
    pub fn load_embedded() -> Result<Self, I18nError> {
        Self::load_embedded_checked().map(|(store, _)| store)
    }

    /// Like [`DictionaryStore::load_embedded`], also returning the
    /// completeness report whose defects were just logged.
    pub fn load_embedded_checked() -> Result<(Self, ValidationReport), I18nError> {
        for file in Asset::iter() {
            let known = file
                .strip_suffix(".ftl")
                .is_some_and(|stem| stem.parse::<LanguageCode>().is_ok());
            if !known {
                tracing::warn!(file = %file, "ignoring translation file for unsupported language");
            }
        }

        let mut dictionaries = Vec::new();
        for language in LanguageCode::ALL {
            let filename = format!("{}.ftl", language.code());
            match Asset::get(&filename) {
                Some(content) => {
                    let source = String::from_utf8_lossy(content.data.as_ref());
                    dictionaries.push(Dictionary::parse(language, &source)?);
                }
                None => tracing::error!(%language, "translation file {} not found", filename),
            }
        }

        let store = Self::from_dictionaries(dictionaries);
        let report = store.validate();
        report.log();
        Ok((store, report))
    }

    /// Builds a store from already-parsed dictionaries without validating.
    pub fn from_dictionaries(dictionaries: impl IntoIterator<Item = Dictionary>) -> Self {
        Self {
            dictionaries: dictionaries
                .into_iter()
                .map(|dictionary| (dictionary.language(), dictionary))
                .collect(),
        }
    }

    /// Returns the dictionary for `language`.
    ///
    /// Never falls back to another language.
    pub fn get(&self, language: LanguageCode) -> Result<&Dictionary, I18nError> {
        self.dictionaries
            .get(&language)
            .ok_or(I18nError::MissingLanguage(language))
    }

    /// Languages that have a dictionary loaded.
    pub fn languages(&self) -> impl Iterator<Item = LanguageCode> + '_ {
        self.dictionaries.keys().copied()
    }

    /// Checks that every supported language is present, that all of them share
    /// one key set, and that no key falls outside the catalog.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let catalog: BTreeSet<String> = TranslationKey::catalog()
            .iter()
            .map(|key| key.id().into_owned())
            .collect();

        // The reference set is the union of every language plus the catalog, so
        // a key added to one language only is reported against all the others.
        let mut reference = catalog.clone();
        for dictionary in self.dictionaries.values() {
            reference.extend(dictionary.keys().iter().cloned());
        }

        let mut defects = Vec::new();
        for language in LanguageCode::ALL {
            let Some(dictionary) = self.dictionaries.get(&language) else {
                defects.push(I18nError::MissingLanguage(language));
                continue;
            };

            let missing: Vec<String> = reference.difference(dictionary.keys()).cloned().collect();
            let unexpected: Vec<String> =
                dictionary.keys().difference(&catalog).cloned().collect();

            if !missing.is_empty() || !unexpected.is_empty() {
                defects.push(I18nError::IncompleteDictionary {
                    language,
                    missing,
                    unexpected,
                });
            }
        }

        ValidationReport { defects }
    }
}
