// SPDX-License-Identifier: MPL-2.0
//! Message dispatch for the page controller.

use super::{Message, Portal};
use crate::ui::{language_selector, modal};

impl Portal {
    /// Handles one user interaction to completion.
    pub fn update(&mut self, message: Message) {
        tracing::trace!(?message, "update");
        match message {
            Message::LanguageOptionClicked(code) => {
                // Rejections are logged by `select_language`; the page stays as it was.
                let _ = self.select_language(&code);
            }
            Message::LanguageButtonClicked => language_selector::toggle(&mut self.document),
            Message::ClickedOutsideSelector => language_selector::close(&mut self.document),
            Message::ThemeToggleClicked => self.toggle_theme(),
            Message::RoleCardClicked(role) => self.open_login_modal(role),
            Message::CloseModalClicked | Message::ModalBackdropClicked => {
                modal::close(&mut self.document);
            }
            Message::RequestAccessClicked => self.request_access(),
            Message::Logout => {
                self.logout();
            }
            Message::IconRetryDue => self.retry_icons(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::{Flags, Message, Portal, Services};
    use crate::config::Config;
    use crate::i18n::{DictionaryStore, LanguageCode};
    use crate::ui::language_selector;

    fn portal() -> Portal {
        let store = DictionaryStore::load_embedded().expect("embedded dictionaries parse");
        Portal::boot(&Flags::default(), &Config::default(), store, Services::in_memory())
    }

    #[test]
    fn unsupported_option_is_ignored() {
        let mut portal = portal();
        let before = portal.to_html();
        portal.update(Message::LanguageOptionClicked("fr".into()));
        assert_eq!(portal.current_language(), LanguageCode::English);
        assert_eq!(portal.to_html(), before);
    }

    #[test]
    fn option_click_switches_language() {
        let mut portal = portal();
        portal.update(Message::LanguageOptionClicked("as".into()));
        assert_eq!(portal.current_language(), LanguageCode::Assamese);
    }

    #[test]
    fn outside_click_closes_dropdown() {
        let mut portal = portal();
        portal.update(Message::LanguageButtonClicked);
        portal.update(Message::ClickedOutsideSelector);
        assert!(!language_selector::is_open(portal.document()));
    }
}
