// SPDX-License-Identifier: MPL-2.0
//! Per-page controller tying localization, rendering and persistence together.
//!
//! One [`Portal`] owns everything a page instance needs: its document, the
//! dictionary store, the current language, theme and role, and the storage
//! and icon adapters. Nothing here is global, so independent controllers can
//! run side by side (tests rely on this).
//!
//! Language selection is a single committed step: validate, set, persist,
//! re-render. A pass that hits missing keys degrades per field and never
//! reverts the language.

mod message;
pub mod paths;
pub mod persistence;
mod update;

pub use message::{Flags, Message};
pub use persistence::Preferences;

use crate::application::port::{IconPass, IconRenderer, IconRetry, RetryPolicy, Storage};
use crate::config::Config;
use crate::dom::Document;
use crate::domain::{self, Page, Role};
use crate::error::I18nError;
use crate::i18n::{DictionaryStore, LanguageCode, LanguageState, StaticKey, TranslationKey};
use crate::infrastructure::{LucideIcons, MemoryStorage};
use crate::render::{render_targets, targets, RenderReport, Renderer};
use crate::session::{
    self, login, Credentials, LoginFailure, LoginOutcome, LoginResponse, ReloadCheck, ReloadGuard,
    UserSnapshot,
};
use crate::ui::registration::{self, RegistrationForm, RegistrationOutcome};
use crate::ui::theming::{self, ThemeMode};
use crate::ui::{dashboard, language_selector, modal, pages};
use std::fmt;
use std::time::Duration;

/// Adapters a controller talks to.
pub struct Services {
    /// Survives page loads (`localStorage`).
    pub persistent: Box<dyn Storage>,
    /// Lives for one browsing session (`sessionStorage`).
    pub session: Box<dyn Storage>,
    pub icons: Box<dyn IconRenderer>,
}

impl Services {
    /// In-memory storage on both sides and the built-in icon set.
    pub fn in_memory() -> Self {
        Self {
            persistent: Box::new(MemoryStorage::new()),
            session: Box::new(MemoryStorage::new()),
            icons: Box::new(LucideIcons::new()),
        }
    }
}

/// Controller for one page instance.
pub struct Portal {
    page: Page,
    document: Document,
    dictionaries: DictionaryStore,
    language: LanguageState,
    theme: ThemeMode,
    current_role: Option<Role>,
    current_user: Option<UserSnapshot>,
    /// Page the controller wants the browser to go to next, if any.
    navigation: Option<String>,
    reload_check: ReloadCheck,
    renderer: Renderer,
    icon_policy: RetryPolicy,
    /// Icon refresh waiting for its next deferred attempt.
    icon_retry: Option<IconRetry>,
    services: Services,
}

impl fmt::Debug for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Portal")
            .field("page", &self.page)
            .field("language", &self.language.current())
            .field("theme", &self.theme)
            .field("current_role", &self.current_role)
            .finish()
    }
}

/// Picks the boot language: CLI flag, then stored preference, then the
/// configured default, then English. Invalid candidates are logged and skipped.
fn resolve_language(
    flag: Option<&str>,
    stored: Option<LanguageCode>,
    configured: Option<LanguageCode>,
) -> LanguageCode {
    let from_flag = flag.and_then(|code| {
        code.parse::<LanguageCode>()
            .map_err(|err| tracing::warn!("ignoring --lang: {}", err))
            .ok()
    });
    from_flag
        .or(stored)
        .or(configured)
        .unwrap_or_default()
}

impl Portal {
    /// Builds `flags.page` and performs the initial render.
    ///
    /// Never fails: a missing dictionary leaves the skeleton unrendered and
    /// is logged.
    pub fn boot(flags: &Flags, config: &Config, dictionaries: DictionaryStore, mut services: Services) -> Self {
        let page = flags.page;
        tracing::info!(%page, "booting page");

        let reload_check = ReloadGuard::new(config.session.reload_window())
            .check(services.session.as_mut(), services.persistent.as_mut());

        let preferences = Preferences::load(services.persistent.as_ref());
        let language = resolve_language(
            flags.lang.as_deref(),
            preferences.language,
            config.general.language(),
        );
        let theme = preferences.theme.unwrap_or(config.general.default_theme);

        let current_user = session::load_user(services.persistent.as_ref());
        let mut navigation = None;
        if page == Page::Dashboard && current_user.is_none() {
            tracing::warn!("no authenticated user, sending back to the landing page");
            navigation = Some(session::HOME_PAGE.to_string());
        }

        let mut portal = Self {
            page,
            document: pages::build(page),
            dictionaries,
            language: LanguageState::new(language),
            theme,
            current_role: None,
            current_user,
            navigation,
            reload_check,
            renderer: Renderer::for_page(page),
            icon_policy: config.icons.retry_policy(),
            icon_retry: None,
            services,
        };

        theming::apply(&mut portal.document, theme);
        if page == Page::Dashboard {
            dashboard::populate(&mut portal.document, &domain::patient::mock_patients());
        }
        if let Err(err) = portal.render_current() {
            tracing::error!("initial render skipped: {}", err);
        }
        language_selector::set_indicator(&mut portal.document, language);
        portal.refresh_icons();
        portal
    }

    /// Switches the page to `code`.
    ///
    /// # Errors
    ///
    /// [`I18nError::UnsupportedLanguage`] for a code outside the supported
    /// set and [`I18nError::MissingLanguage`] when no dictionary is loaded for
    /// it. Either way the language, storage and document are left untouched.
    pub fn select_language(&mut self, code: &str) -> Result<RenderReport, I18nError> {
        let language = code.parse::<LanguageCode>().inspect_err(|err| {
            tracing::warn!("language change rejected: {}", err);
        })?;
        self.dictionaries.get(language).inspect_err(|err| {
            tracing::error!("language change aborted: {}", err);
        })?;

        self.language.set(language);
        persistence::persist_language(self.services.persistent.as_mut(), language);

        let report = self.render_current()?;
        language_selector::set_indicator(&mut self.document, language);
        language_selector::close(&mut self.document);
        self.refresh_icons();

        tracing::info!(%language, missing_keys = report.missing_keys.len(), "language changed");
        Ok(report)
    }

    /// Renders the page, the open modal and the data-driven labels with the
    /// current language's dictionary.
    fn render_current(&mut self) -> Result<RenderReport, I18nError> {
        let dictionary = self.dictionaries.get(self.language.current())?;

        let mut report = self.renderer.render_all(&mut self.document, dictionary);
        if let Some(role) = self.current_role.filter(|_| modal::is_open(&self.document)) {
            report.merge(render_targets(
                &targets::login_modal(role),
                &mut self.document,
                dictionary,
            ));
        }
        if self.page == Page::Dashboard {
            dashboard::localize_statuses(&mut self.document, dictionary);
        }
        Ok(report)
    }

    /// Starts a fresh icon refresh with one attempt. A failed attempt is
    /// parked in `icon_retry` until the host sends [`Message::IconRetryDue`].
    fn refresh_icons(&mut self) {
        self.attempt_icons(IconRetry::new(self.icon_policy));
    }

    fn attempt_icons(&mut self, mut retry: IconRetry) {
        self.icon_retry = match retry.attempt(self.services.icons.as_mut(), &mut self.document) {
            IconPass::Rendered(_) => None,
            IconPass::RetryAfter(_) => Some(retry),
            IconPass::GaveUp => {
                tracing::warn!("icons left as placeholders");
                None
            }
        };
    }

    /// Runs the parked icon attempt, if any.
    pub fn retry_icons(&mut self) {
        if let Some(retry) = self.icon_retry.take() {
            self.attempt_icons(retry);
        }
    }

    /// How long the host should wait before sending
    /// [`Message::IconRetryDue`], when an icon attempt is pending.
    #[must_use]
    pub fn pending_icon_retry(&self) -> Option<Duration> {
        self.icon_retry.as_ref().map(IconRetry::delay)
    }

    /// Looks up a system message in the current language.
    fn message(&self, key: StaticKey) -> Option<String> {
        let dictionary = self.dictionaries.get(self.language.current()).ok()?;
        dictionary
            .lookup(&TranslationKey::Static(key))
            .map_err(|err| tracing::warn!("{}", err))
            .ok()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        theming::apply(&mut self.document, self.theme);
        persistence::persist_theme(self.services.persistent.as_mut(), self.theme);
        self.refresh_icons();
        tracing::debug!(theme = %self.theme, "theme toggled");
    }

    /// Shows the login modal for `role`. Does nothing on pages without one.
    pub fn open_login_modal(&mut self, role: Role) {
        if !modal::open(&mut self.document, role) {
            tracing::debug!(page = %self.page, "no login modal on this page");
            return;
        }
        self.current_role = Some(role);

        if let Ok(dictionary) = self.dictionaries.get(self.language.current()) {
            render_targets(&targets::login_modal(role), &mut self.document, dictionary);
        }
        self.refresh_icons();
    }

    pub fn close_modal(&mut self) {
        modal::close(&mut self.document);
    }

    /// Shows the "signing in" status and returns the request body.
    pub fn begin_login(&mut self, credentials: &Credentials) -> serde_json::Result<String> {
        if let Some(text) = self.message(StaticKey::SigningIn) {
            modal::show_message(&mut self.document, &text);
        }
        credentials.to_json()
    }

    /// Applies the login endpoint's reply.
    ///
    /// On success the user snapshot is persisted and the role's dashboard
    /// becomes the pending navigation.
    pub fn complete_login(
        &mut self,
        credentials: &Credentials,
        response: &LoginResponse,
        current_url: &str,
    ) -> LoginOutcome {
        let outcome = login::interpret(response, credentials, current_url);
        match &outcome {
            LoginOutcome::Redirect(url) => self.navigation = Some(url.clone()),
            LoginOutcome::Authenticated(user) => {
                session::store_user(self.services.persistent.as_mut(), user);
                self.current_user = Some(user.clone());
                self.navigation = Some(session::dashboard_destination(user.role));
                if let Some(text) = self.message(StaticKey::LoginSuccess) {
                    modal::show_message(&mut self.document, &text);
                }
            }
            LoginOutcome::Failed(LoginFailure::RedirectLoop) => {
                if let Some(text) = self.message(StaticKey::RedirectLoopDetected) {
                    modal::show_message(&mut self.document, &text);
                }
            }
            LoginOutcome::Failed(failure) => {
                tracing::warn!("login failed: {}", failure);
                if let Some(text) = self.message(StaticKey::LoginFailed) {
                    modal::show_message(&mut self.document, &format!("{text}: {failure}"));
                }
            }
        }
        outcome
    }

    /// Follows the "request access" link for the modal's role.
    ///
    /// Roles with a registration page navigate there; patients get a
    /// localized instruction in the modal instead.
    pub fn request_access(&mut self) {
        let Some(role) = self.current_role else {
            return;
        };
        match role.registration_page() {
            Some(page) => self.navigation = Some(page.to_string()),
            None => {
                let text = self
                    .dictionaries
                    .get(self.language.current())
                    .and_then(|dictionary| {
                        dictionary.format_with_role(
                            &TranslationKey::Static(StaticKey::RequestAccessContact),
                            role,
                        )
                    });
                match text {
                    Ok(text) => modal::show_message(&mut self.document, &text),
                    Err(err) => tracing::warn!("{}", err),
                }
            }
        }
    }

    /// Shows the "registering" status and returns the request body.
    pub fn begin_registration(&mut self, form: &RegistrationForm) -> serde_json::Result<String> {
        if let Some(text) = self.message(StaticKey::Registering) {
            self.document.set_text(
                &crate::dom::Selector::id(registration::MESSAGE_ID),
                &text,
            );
        }
        form.to_payload()
    }

    /// Applies the register endpoint's reply body.
    pub fn complete_registration(&mut self, body: &str) -> RegistrationOutcome {
        let outcome = registration::interpret(body);
        if let Ok(dictionary) = self.dictionaries.get(self.language.current()) {
            registration::show_outcome(&mut self.document, &outcome, dictionary);
        }
        if outcome == RegistrationOutcome::Registered {
            self.navigation = Some(session::HOME_PAGE.to_string());
        }
        outcome
    }

    /// Forgets the user and returns the landing page to navigate to.
    pub fn logout(&mut self) -> &str {
        session::clear_user(self.services.persistent.as_mut());
        self.current_user = None;
        tracing::info!("logged out");
        self.navigation.insert(session::HOME_PAGE.to_string())
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn current_language(&self) -> LanguageCode {
        self.language.current()
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    #[must_use]
    pub fn current_role(&self) -> Option<Role> {
        self.current_role
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&UserSnapshot> {
        self.current_user.as_ref()
    }

    /// Pending navigation set by login, logout, access requests or the
    /// dashboard gate.
    #[must_use]
    pub fn navigation(&self) -> Option<&str> {
        self.navigation.as_deref()
    }

    #[must_use]
    pub fn reload_check(&self) -> ReloadCheck {
        self.reload_check
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        self.document.to_html()
    }

    /// Hands the adapters back, e.g. to boot the next page on the same
    /// storage.
    pub fn into_services(self) -> Services {
        self.services
    }
}
