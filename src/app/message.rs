// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the page controller.

use crate::domain::{Page, Role};

/// User interactions consumed by `Portal::update`. Every handler runs to
/// completion before the next message is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// An entry of the language dropdown, carrying its `data-lang` code.
    LanguageOptionClicked(String),
    /// The dropdown's toggle button.
    LanguageButtonClicked,
    /// A click anywhere outside the language selector.
    ClickedOutsideSelector,
    ThemeToggleClicked,
    /// A role card's button on the landing page.
    RoleCardClicked(Role),
    CloseModalClicked,
    /// A click on the dimmed area around the modal panel.
    ModalBackdropClicked,
    /// The "request access" link inside the login modal.
    RequestAccessClicked,
    Logout,
    /// The pause announced by `Portal::pending_icon_retry` has elapsed.
    IconRetryDue,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Page skeleton to build.
    pub page: Page,
    /// Optional language override (e.g. `hi`). Takes precedence over the
    /// stored preference for this page load only.
    pub lang: Option<String>,
    /// Optional data directory override (for `preferences.cbor`).
    /// Takes precedence over `HEALTH_PORTAL_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `HEALTH_PORTAL_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
