// SPDX-License-Identifier: MPL-2.0
//! ASHA worker registration form.
//!
//! The form is posted as JSON with the role fixed to `asha`. The reply is a
//! `{ success, error }` object; anything else counts as a failure.

use crate::dom::{Document, Selector};
use crate::domain::Role;
use crate::i18n::{Dictionary, StaticKey, TranslationKey};
use serde::{Deserialize, Serialize};

pub const FORM_ID: &str = "ashaRegistrationForm";
pub const MESSAGE_ID: &str = "registration-message";

/// Values entered in the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub dob: String,
    pub mobile: String,
    pub email: String,
    pub asha_id: String,
    pub district: String,
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
struct Payload<'a> {
    #[serde(flatten)]
    form: &'a RegistrationForm,
    role: &'static str,
}

impl RegistrationForm {
    /// JSON body posted to the register endpoint.
    pub fn to_payload(&self) -> serde_json::Result<String> {
        serde_json::to_string(&Payload {
            form: self,
            role: Role::Asha.id(),
        })
    }
}

#[derive(Deserialize)]
struct Reply {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    /// Declined or unreadable reply, with the server's message if any.
    Failed(Option<String>),
}

/// Interprets the register endpoint's reply body.
#[must_use]
pub fn interpret(body: &str) -> RegistrationOutcome {
    match serde_json::from_str::<Reply>(body) {
        Ok(Reply { success: true, .. }) => RegistrationOutcome::Registered,
        Ok(Reply { error, .. }) => RegistrationOutcome::Failed(error),
        Err(err) => {
            tracing::error!("registration reply is not valid JSON: {}", err);
            RegistrationOutcome::Failed(None)
        }
    }
}

/// Localized status line for `outcome`.
pub fn outcome_message(
    outcome: &RegistrationOutcome,
    dictionary: &Dictionary,
) -> Result<String, crate::error::I18nError> {
    match outcome {
        RegistrationOutcome::Registered => {
            dictionary.lookup(&TranslationKey::Static(StaticKey::RegistrationSuccess))
        }
        RegistrationOutcome::Failed(reason) => {
            let failed =
                dictionary.lookup(&TranslationKey::Static(StaticKey::RegistrationFailed))?;
            Ok(match reason {
                Some(reason) => format!("{failed}: {reason}"),
                None => failed,
            })
        }
    }
}

/// Writes the outcome under the form.
pub fn show_outcome(document: &mut Document, outcome: &RegistrationOutcome, dictionary: &Dictionary) {
    match outcome_message(outcome, dictionary) {
        Ok(message) => {
            document.set_text(&Selector::id(MESSAGE_ID), &message);
        }
        Err(err) => tracing::warn!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LanguageCode;

    #[test]
    fn payload_fixes_role_to_asha() {
        let form = RegistrationForm {
            name: "Rina Bora".into(),
            asha_id: "AS-204".into(),
            district: "Jorhat".into(),
            ..RegistrationForm::default()
        };
        let payload: serde_json::Value =
            serde_json::from_str(&form.to_payload().unwrap()).unwrap();
        assert_eq!(payload["role"], "asha");
        assert_eq!(payload["ashaId"], "AS-204");
        assert_eq!(payload["district"], "Jorhat");
    }

    #[test]
    fn interprets_replies() {
        assert_eq!(interpret(r#"{"success":true}"#), RegistrationOutcome::Registered);
        assert_eq!(
            interpret(r#"{"success":false,"error":"Username taken"}"#),
            RegistrationOutcome::Failed(Some("Username taken".into()))
        );
        assert_eq!(interpret("<html>502</html>"), RegistrationOutcome::Failed(None));
    }

    #[test]
    fn failure_message_appends_reason() {
        let dictionary = Dictionary::parse(
            LanguageCode::English,
            "registration-success = Registration successful!\nregistration-failed = Registration failed\n",
        )
        .unwrap();
        let message =
            outcome_message(&RegistrationOutcome::Failed(Some("Username taken".into())), &dictionary);
        assert_eq!(message, Ok("Registration failed: Username taken".into()));
    }
}
