// SPDX-License-Identifier: MPL-2.0
//! Typed translation keys.
//!
//! Indexed groups (role bullet items, feature entries) are addressed through
//! [`ItemIndex`] and [`FeatureIndex`], so only keys that exist in the catalog
//! can be spelled. [`TranslationKey::catalog`] is the full list the dictionary
//! loader validates against.

use crate::domain::{FeatureIndex, ItemIndex, PatientStatus, Role};
use std::borrow::Cow;
use std::fmt;

macro_rules! static_keys {
    ($($variant:ident => $id:literal),+ $(,)?) => {
        /// Keys that are not parametrized by a role or an index.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StaticKey {
            $($variant),+
        }

        impl StaticKey {
            /// Every static key, in declaration order.
            pub const ALL: &'static [StaticKey] = &[$(StaticKey::$variant),+];

            /// Fluent message identifier.
            #[must_use]
            pub fn id(self) -> &'static str {
                match self {
                    $(StaticKey::$variant => $id),+
                }
            }
        }
    };
}

static_keys! {
    // Header and landing headings
    HeaderTitle => "header-title",
    HeaderSubtitle => "header-subtitle",
    MainTitle => "main-title",
    MainSubtitle => "main-subtitle",
    Tagline => "tagline",
    ChooseRole => "choose-role",
    RoleDescription => "role-description",
    FeaturesTitle => "features-title",
    FeaturesDescription => "features-description",
    HelpButton => "help-button",
    AwarenessButton => "awareness-button",

    // Login modal
    LoginTitle => "login-title",
    UserIdLabel => "user-id-label",
    UserIdPlaceholder => "user-id-placeholder",
    PasswordLabel => "password-label",
    PasswordPlaceholder => "password-placeholder",
    RememberMe => "remember-me",
    ForgotPassword => "forgot-password",
    LoginButton => "login-button",
    NoAccount => "no-account",
    RequestAccess => "request-access",
    SecurityNote => "security-note",
    SigningIn => "signing-in",
    LoginSuccess => "login-success",
    LoginFailed => "login-failed",
    RequestAccessContact => "request-access-contact",
    LogoutButton => "logout-button",

    // Registration form
    RegHeaderTitle => "reg-header-title",
    RegHeaderSubtitle => "reg-header-subtitle",
    BackToHome => "back-to-home",
    FormTitle => "form-title",
    FormSubtitle => "form-subtitle",
    PersonalInfoTitle => "personal-info-title",
    ContactInfoTitle => "contact-info-title",
    ProfessionalInfoTitle => "professional-info-title",
    AccountSetupTitle => "account-setup-title",
    NameLabel => "name-label",
    NamePlaceholder => "name-placeholder",
    DobLabel => "dob-label",
    MobileLabel => "mobile-label",
    MobilePlaceholder => "mobile-placeholder",
    EmailLabel => "email-label",
    EmailPlaceholder => "email-placeholder",
    AshaIdLabel => "asha-id-label",
    AshaIdPlaceholder => "asha-id-placeholder",
    DistrictLabel => "district-label",
    SelectDistrictOption => "select-district-option",
    UsernameLabel => "username-label",
    UsernamePlaceholder => "username-placeholder",
    RegPasswordLabel => "reg-password-label",
    RegPasswordPlaceholder => "reg-password-placeholder",
    RegisterButton => "register-button",
    Registering => "registering",
    RegistrationSuccess => "registration-success",
    RegistrationFailed => "registration-failed",

    // Dashboard
    DashboardTitle => "dashboard-title",
    PatientRecordsTitle => "patient-records-title",
    AddPatient => "add-patient",
    ColumnId => "column-id",
    ColumnName => "column-name",
    ColumnAge => "column-age",
    ColumnSymptoms => "column-symptoms",
    ColumnStatus => "column-status",
    ColumnActions => "column-actions",
    StatusUnderObservation => "status-under-observation",
    StatusCritical => "status-critical",
    StatusStable => "status-stable",
    StatusDischarged => "status-discharged",

    // System messages
    RedirectLoopDetected => "redirect-loop-detected",
}

impl StaticKey {
    /// Label key for a patient status badge.
    #[must_use]
    pub fn for_status(status: PatientStatus) -> Self {
        match status {
            PatientStatus::UnderObservation => StaticKey::StatusUnderObservation,
            PatientStatus::Critical => StaticKey::StatusCritical,
            PatientStatus::Stable => StaticKey::StatusStable,
            PatientStatus::Discharged => StaticKey::StatusDischarged,
        }
    }
}

/// Per-role text fields on a role card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleField {
    /// Human-readable role name, also substituted into templates.
    Name,
    Description,
    Button,
}

impl RoleField {
    pub const ALL: [RoleField; 3] = [RoleField::Name, RoleField::Description, RoleField::Button];
}

/// Per-feature text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureField {
    Title,
    Description,
}

impl FeatureField {
    pub const ALL: [FeatureField; 2] = [FeatureField::Title, FeatureField::Description];
}

/// Stable identifier of a localized string, independent of language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    Static(StaticKey),
    Role(Role, RoleField),
    RoleItem(Role, ItemIndex),
    Feature(FeatureIndex, FeatureField),
}

impl TranslationKey {
    /// Fluent message identifier for this key.
    #[must_use]
    pub fn id(&self) -> Cow<'static, str> {
        match *self {
            TranslationKey::Static(key) => Cow::Borrowed(key.id()),
            TranslationKey::Role(role, RoleField::Name) => {
                Cow::Owned(format!("role-{}", role.id()))
            }
            TranslationKey::Role(role, RoleField::Description) => {
                Cow::Owned(format!("role-{}-desc", role.id()))
            }
            TranslationKey::Role(role, RoleField::Button) => {
                Cow::Owned(format!("role-{}-button", role.id()))
            }
            TranslationKey::RoleItem(role, index) => {
                Cow::Owned(format!("role-{}-item-{}", role.id(), index.value()))
            }
            TranslationKey::Feature(index, FeatureField::Title) => {
                Cow::Owned(format!("feature-{}-title", index.value()))
            }
            TranslationKey::Feature(index, FeatureField::Description) => {
                Cow::Owned(format!("feature-{}-desc", index.value()))
            }
        }
    }

    /// Every key the portal can display.
    #[must_use]
    pub fn catalog() -> Vec<TranslationKey> {
        let mut keys: Vec<TranslationKey> = StaticKey::ALL
            .iter()
            .copied()
            .map(TranslationKey::Static)
            .collect();

        for role in Role::ALL {
            keys.extend(RoleField::ALL.map(|field| TranslationKey::Role(role, field)));
            keys.extend(ItemIndex::all().map(|index| TranslationKey::RoleItem(role, index)));
        }

        for index in FeatureIndex::all() {
            keys.extend(FeatureField::ALL.map(|field| TranslationKey::Feature(index, field)));
        }

        keys
    }
}

impl From<StaticKey> for TranslationKey {
    fn from(key: StaticKey) -> Self {
        TranslationKey::Static(key)
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn role_keys_follow_naming_scheme() {
        assert_eq!(TranslationKey::Role(Role::Asha, RoleField::Name).id(), "role-asha");
        assert_eq!(
            TranslationKey::Role(Role::Admin, RoleField::Description).id(),
            "role-admin-desc"
        );
        let item = ItemIndex::new(3).expect("valid index");
        assert_eq!(
            TranslationKey::RoleItem(Role::Patient, item).id(),
            "role-patient-item-3"
        );
    }

    #[test]
    fn feature_keys_follow_naming_scheme() {
        let index = FeatureIndex::new(6).expect("valid index");
        assert_eq!(
            TranslationKey::Feature(index, FeatureField::Title).id(),
            "feature-6-title"
        );
        assert_eq!(
            TranslationKey::Feature(index, FeatureField::Description).id(),
            "feature-6-desc"
        );
    }

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = TranslationKey::catalog();
        let ids: HashSet<_> = catalog.iter().map(TranslationKey::id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn catalog_covers_every_group() {
        let catalog = TranslationKey::catalog();
        // 4 roles x (3 fields + 4 items) + 6 features x 2 fields
        assert_eq!(catalog.len(), StaticKey::ALL.len() + 4 * 7 + 6 * 2);
    }
}
