// SPDX-License-Identifier: MPL-2.0
use crate::i18n::LanguageCode;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Storage Error: {0}")]
    Storage(#[from] StorageError),
    #[error("I18n Error: {0}")]
    I18n(#[from] I18nError),
}

/// Localization failures.
///
/// Only [`I18nError::MissingLanguage`] and [`I18nError::UnsupportedLanguage`]
/// abort a language change; [`I18nError::MissingKey`] is tolerated per field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// The code is supported but the dictionary store holds no entry for it.
    #[error("no dictionary loaded for language '{0}'")]
    MissingLanguage(LanguageCode),

    /// The dictionary for an otherwise valid language lacks a key.
    #[error("key '{key}' is missing for language '{language}'")]
    MissingKey { language: LanguageCode, key: String },

    /// A user- or storage-supplied code outside the supported set.
    #[error("unsupported language: '{0}'")]
    UnsupportedLanguage(String),

    /// Key sets differ between languages, or keys fall outside the catalog.
    #[error(
        "dictionary '{language}' is incomplete: missing [{}], unexpected [{}]",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    IncompleteDictionary {
        language: LanguageCode,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    /// The translation source could not be parsed or loaded.
    #[error("failed to load dictionary '{language}': {message}")]
    Parse {
        language: LanguageCode,
        message: String,
    },
}

/// Persistence failures. Callers treat all of them as best-effort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage I/O failed: {0}")]
    Io(String),
    #[error("failed to encode storage contents: {0}")]
    Encode(String),
    #[error("failed to decode storage contents: {0}")]
    Decode(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
