// SPDX-License-Identifier: MPL-2.0
//! This module handles the portal's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Default language and theme
//! - `[icons]` - Icon rendering retry policy
//! - `[session]` - Rapid-reload detection window
//! - `[endpoints]` - Backend routes used by login and registration
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `HEALTH_PORTAL_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use health_portal::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let policy = config.icons.retry_policy();
//! assert!(policy.max_retries <= config::MAX_ICON_MAX_RETRIES);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::port::RetryPolicy;
use crate::error::{Error, Result};
use crate::i18n::LanguageCode;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General portal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Language used when the user has not picked one (e.g., "hi").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,

    /// Theme used when the user has not toggled it.
    #[serde(default)]
    pub default_theme: ThemeMode,
}

impl GeneralConfig {
    /// The configured default language, if it names a supported one.
    ///
    /// An unsupported code is logged and ignored.
    #[must_use]
    pub fn language(&self) -> Option<LanguageCode> {
        let raw = self.default_language.as_deref()?;
        match raw.parse() {
            Ok(language) => Some(language),
            Err(err) => {
                tracing::warn!("ignoring configured default_language: {}", err);
                None
            }
        }
    }
}

/// Icon rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IconsConfig {
    #[serde(default = "default_max_retries", skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,

    #[serde(default = "default_retry_delay_ms", skip_serializing_if = "Option::is_none")]
    pub retry_delay_ms: Option<u64>,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl IconsConfig {
    /// Retry policy with out-of-range values clamped.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        let max_retries = self
            .max_retries
            .unwrap_or(DEFAULT_ICON_MAX_RETRIES)
            .min(MAX_ICON_MAX_RETRIES);
        let delay_ms = self
            .retry_delay_ms
            .unwrap_or(DEFAULT_ICON_RETRY_DELAY_MS)
            .min(MAX_ICON_RETRY_DELAY_MS);
        RetryPolicy {
            max_retries,
            delay: Duration::from_millis(delay_ms),
        }
    }
}

/// Session settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Page loads closer together than this are treated as a redirect loop.
    #[serde(default = "default_reload_window_ms", skip_serializing_if = "Option::is_none")]
    pub reload_window_ms: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reload_window_ms: default_reload_window_ms(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn reload_window(&self) -> Duration {
        let ms = self
            .reload_window_ms
            .unwrap_or(DEFAULT_RELOAD_WINDOW_MS)
            .clamp(MIN_RELOAD_WINDOW_MS, MAX_RELOAD_WINDOW_MS);
        Duration::from_millis(ms)
    }
}

/// Backend routes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EndpointsConfig {
    #[serde(default = "default_login_endpoint")]
    pub login: String,
    #[serde(default = "default_logout_endpoint")]
    pub logout: String,
    #[serde(default = "default_check_auth_endpoint")]
    pub check_auth: String,
    #[serde(default = "default_register_endpoint")]
    pub register: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            login: default_login_endpoint(),
            logout: default_logout_endpoint(),
            check_auth: default_check_auth_endpoint(),
            register: default_register_endpoint(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Portal configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub icons: IconsConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_retries() -> Option<u32> {
    Some(DEFAULT_ICON_MAX_RETRIES)
}

fn default_retry_delay_ms() -> Option<u64> {
    Some(DEFAULT_ICON_RETRY_DELAY_MS)
}

fn default_reload_window_ms() -> Option<u64> {
    Some(DEFAULT_RELOAD_WINDOW_MS)
}

fn default_login_endpoint() -> String {
    DEFAULT_LOGIN_ENDPOINT.to_string()
}

fn default_logout_endpoint() -> String {
    DEFAULT_LOGOUT_ENDPOINT.to_string()
}

fn default_check_auth_endpoint() -> String {
    DEFAULT_CHECK_AUTH_ENDPOINT.to_string()
}

fn default_register_endpoint() -> String {
    DEFAULT_REGISTER_ENDPOINT.to_string()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.default_language, None);
        assert_eq!(config.general.default_theme, ThemeMode::Light);
        assert_eq!(config.icons.max_retries, Some(3));
        assert_eq!(config.icons.retry_delay_ms, Some(500));
        assert_eq!(config.session.reload_window(), Duration::from_millis(2_000));
        assert_eq!(config.endpoints.login, "/api/login");
        assert_eq!(config.endpoints.check_auth, "/api/check-auth");
        assert_eq!(config.endpoints.register, "/api/register");
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                default_language: Some("bn".to_string()),
                default_theme: ThemeMode::Dark,
            },
            icons: IconsConfig {
                max_retries: Some(1),
                retry_delay_ms: Some(50),
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
        assert_eq!(loaded.general.language(), Some(LanguageCode::Bengali));
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[session]\nreload_window_ms = 5000\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.session.reload_window(), Duration::from_millis(5_000));
        assert_eq!(loaded.icons, IconsConfig::default());
        assert_eq!(loaded.endpoints, EndpointsConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn unsupported_default_language_is_ignored() {
        let general = GeneralConfig {
            default_language: Some("fr".to_string()),
            default_theme: ThemeMode::Light,
        };
        assert_eq!(general.language(), None);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let icons = IconsConfig {
            max_retries: Some(1_000),
            retry_delay_ms: Some(u64::MAX),
        };
        let policy = icons.retry_policy();
        assert_eq!(policy.max_retries, MAX_ICON_MAX_RETRIES);
        assert_eq!(policy.delay, Duration::from_millis(MAX_ICON_RETRY_DELAY_MS));

        let session = SessionConfig {
            reload_window_ms: Some(0),
        };
        assert_eq!(session.reload_window(), Duration::from_millis(MIN_RELOAD_WINDOW_MS));
    }
}
