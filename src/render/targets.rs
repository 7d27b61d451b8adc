// SPDX-License-Identifier: MPL-2.0
//! Target tables for each page.
//!
//! Every page shares the header and the language indicator ids; the rest is
//! page-specific. Tables list all targets the page may contain, so a page
//! variant that omits some nodes still renders cleanly.

use super::RenderTarget;
use crate::dom::Selector;
use crate::domain::{FeatureIndex, ItemIndex, Page, Role};
use crate::i18n::{FeatureField, RoleField, StaticKey, TranslationKey};

/// Targets rendered on every pass for `page`.
#[must_use]
pub fn for_page(page: Page) -> Vec<RenderTarget> {
    match page {
        Page::Landing => landing(),
        Page::Registration => registration(),
        Page::Dashboard => dashboard(),
    }
}

fn landing() -> Vec<RenderTarget> {
    use StaticKey::*;

    let mut targets = vec![
        RenderTarget::text(Selector::id("header-title"), HeaderTitle),
        RenderTarget::text(Selector::id("header-subtitle"), HeaderSubtitle),
        RenderTarget::heading(Selector::id("main-heading"), MainTitle),
        RenderTarget::text(Selector::id("sub-heading"), MainSubtitle),
        RenderTarget::text(Selector::id("tagline"), Tagline),
        RenderTarget::text(Selector::id("choose-role-heading"), ChooseRole),
        RenderTarget::text(Selector::id("role-description"), RoleDescription),
        RenderTarget::text(Selector::id("help-btn-label"), HelpButton),
        RenderTarget::text(Selector::id("awareness-btn-label"), AwarenessButton),
    ];

    for role in Role::ALL {
        let id = role.id();
        targets.push(RenderTarget::text(
            Selector::attr("data-role-title", id),
            TranslationKey::Role(role, RoleField::Name),
        ));
        targets.push(RenderTarget::text(
            Selector::attr("data-role-desc", id),
            TranslationKey::Role(role, RoleField::Description),
        ));
        targets.push(RenderTarget::text(
            Selector::attr("data-role-button", id),
            TranslationKey::Role(role, RoleField::Button),
        ));
        for index in ItemIndex::all() {
            targets.push(RenderTarget::text(
                Selector::attr("data-role-item", &format!("{id}-{}", index.value())),
                TranslationKey::RoleItem(role, index),
            ));
        }
    }

    targets.push(RenderTarget::text(Selector::id("features-title"), FeaturesTitle));
    targets.push(RenderTarget::text(
        Selector::id("features-description"),
        FeaturesDescription,
    ));
    for index in FeatureIndex::all() {
        let value = index.value().to_string();
        targets.push(RenderTarget::text(
            Selector::attr("data-feature-title", &value),
            TranslationKey::Feature(index, FeatureField::Title),
        ));
        targets.push(RenderTarget::text(
            Selector::attr("data-feature-desc", &value),
            TranslationKey::Feature(index, FeatureField::Description),
        ));
    }

    targets
}

fn registration() -> Vec<RenderTarget> {
    use StaticKey::*;

    let text = |id: &str, key: StaticKey| RenderTarget::text(Selector::id(id), key);
    let placeholder = |id: &str, key: StaticKey| RenderTarget::placeholder(Selector::id(id), key);

    vec![
        text("header-title", RegHeaderTitle),
        text("header-subtitle", RegHeaderSubtitle),
        text("back-to-home", BackToHome),
        text("form-title", FormTitle),
        text("form-subtitle", FormSubtitle),
        text("personal-info-title", PersonalInfoTitle),
        text("contact-info-title", ContactInfoTitle),
        text("professional-info-title", ProfessionalInfoTitle),
        text("account-setup-title", AccountSetupTitle),
        text("name-label", NameLabel),
        placeholder("name-placeholder", NamePlaceholder),
        text("dob-label", DobLabel),
        text("mobile-label", MobileLabel),
        placeholder("mobile-placeholder", MobilePlaceholder),
        text("email-label", EmailLabel),
        placeholder("email-placeholder", EmailPlaceholder),
        text("asha-id-label", AshaIdLabel),
        placeholder("asha-id-placeholder", AshaIdPlaceholder),
        text("district-label", DistrictLabel),
        text("select-district-option", SelectDistrictOption),
        text("username-label", UsernameLabel),
        placeholder("username-placeholder", UsernamePlaceholder),
        text("password-label", RegPasswordLabel),
        placeholder("password-placeholder", RegPasswordPlaceholder),
        text("register-button", RegisterButton),
    ]
}

fn dashboard() -> Vec<RenderTarget> {
    use StaticKey::*;

    let text = |id: &str, key: StaticKey| RenderTarget::text(Selector::id(id), key);

    vec![
        text("header-title", HeaderTitle),
        text("header-subtitle", HeaderSubtitle),
        text("dashboard-title", DashboardTitle),
        text("patient-records-title", PatientRecordsTitle),
        text("add-patient-label", AddPatient),
        text("logout-btn-label", LogoutButton),
        text("column-id", ColumnId),
        text("column-name", ColumnName),
        text("column-age", ColumnAge),
        text("column-symptoms", ColumnSymptoms),
        text("column-status", ColumnStatus),
        text("column-actions", ColumnActions),
    ]
}

/// Targets inside the login modal while it is open for `role`.
#[must_use]
pub fn login_modal(role: Role) -> Vec<RenderTarget> {
    use StaticKey::*;

    let text = |id: &str, key: StaticKey| RenderTarget::text(Selector::id(id), key);
    let placeholder = |id: &str, key: StaticKey| RenderTarget::placeholder(Selector::id(id), key);

    vec![
        RenderTarget::role_template(Selector::id("modal-title"), LoginTitle, role),
        text("user-id-label", UserIdLabel),
        placeholder("user-id-input", UserIdPlaceholder),
        text("password-label", PasswordLabel),
        placeholder("password-input", PasswordPlaceholder),
        text("remember-me-label", RememberMe),
        text("forgot-password", ForgotPassword),
        text("login-button-label", LoginButton),
        text("no-account", NoAccount),
        text("request-access", RequestAccess),
        text("security-note", SecurityNote),
    ]
}
