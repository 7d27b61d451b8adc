// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the portal. Constants are organized by category.
//!
//! # Categories
//!
//! - **General**: Language and theme used when nothing is persisted
//! - **Icons**: Retry policy for the icon renderer
//! - **Session**: Rapid-reload detection window
//! - **Endpoints**: Backend routes the login and registration flows target

// ==========================================================================
// General Defaults
// ==========================================================================

/// Language code used when neither the user nor the config picked one.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

// ==========================================================================
// Icon Defaults
// ==========================================================================

/// Attempts after the first one when the icon library is unavailable.
pub const DEFAULT_ICON_MAX_RETRIES: u32 = 3;

/// Maximum configurable retries.
pub const MAX_ICON_MAX_RETRIES: u32 = 10;

/// Pause between icon rendering attempts (in milliseconds).
pub const DEFAULT_ICON_RETRY_DELAY_MS: u64 = 500;

/// Maximum configurable pause between attempts (in milliseconds).
pub const MAX_ICON_RETRY_DELAY_MS: u64 = 5_000;

// ==========================================================================
// Session Defaults
// ==========================================================================

/// Two page loads closer than this are treated as a redirect loop
/// (in milliseconds).
pub const DEFAULT_RELOAD_WINDOW_MS: u64 = 2_000;

/// Smallest accepted reload window (in milliseconds).
pub const MIN_RELOAD_WINDOW_MS: u64 = 100;

/// Largest accepted reload window (in milliseconds).
pub const MAX_RELOAD_WINDOW_MS: u64 = 60_000;

// ==========================================================================
// Endpoint Defaults
// ==========================================================================

pub const DEFAULT_LOGIN_ENDPOINT: &str = "/api/login";
pub const DEFAULT_LOGOUT_ENDPOINT: &str = "/api/logout";
pub const DEFAULT_CHECK_AUTH_ENDPOINT: &str = "/api/check-auth";
pub const DEFAULT_REGISTER_ENDPOINT: &str = "/api/register";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Icon retry validation
    assert!(DEFAULT_ICON_MAX_RETRIES <= MAX_ICON_MAX_RETRIES);
    assert!(DEFAULT_ICON_RETRY_DELAY_MS <= MAX_ICON_RETRY_DELAY_MS);

    // Reload window validation
    assert!(MIN_RELOAD_WINDOW_MS > 0);
    assert!(DEFAULT_RELOAD_WINDOW_MS >= MIN_RELOAD_WINDOW_MS);
    assert!(DEFAULT_RELOAD_WINDOW_MS <= MAX_RELOAD_WINDOW_MS);
};
