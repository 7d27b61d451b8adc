// SPDX-License-Identifier: MPL-2.0
//! Language dropdown in the page header.
//!
//! The dropdown is open while `language-dropdown` carries [`SHOW_CLASS`].
//! Option labels are native language names and never get translated.

use super::design_tokens::{button, icon as icon_tokens, surface};
use super::pages::icon;
use crate::dom::{Document, Element, Selector};
use crate::i18n::LanguageCode;

pub const SELECTOR_CLASS: &str = "language-selector";
pub const BUTTON_ID: &str = "language-btn";
pub const DROPDOWN_ID: &str = "language-dropdown";
pub const INDICATOR_ID: &str = "current-language";
pub const OPTION_CLASS: &str = "language-option";
pub const SHOW_CLASS: &str = "show";

/// Builds the selector with one option per supported language.
#[must_use]
pub fn build() -> Element {
    let options = LanguageCode::ALL.into_iter().map(|language| {
        Element::new("button")
            .class(&format!("{OPTION_CLASS} block w-full px-4 py-2 text-left"))
            .attr("data-lang", language.code())
            .text(language.native_name())
    });

    Element::new("div")
        .class(&format!("{SELECTOR_CLASS} relative"))
        .child(
            Element::new("button")
                .id(BUTTON_ID)
                .class(button::ICON)
                .child(icon("globe", icon_tokens::INLINE))
                .child(Element::new("span").id(INDICATOR_ID))
                .child(icon("chevron-down", icon_tokens::SMALL)),
        )
        .child(
            Element::new("div")
                .id(DROPDOWN_ID)
                .class(surface::DROPDOWN)
                .children(options),
        )
}

#[must_use]
pub fn is_open(document: &Document) -> bool {
    document.has_class(&Selector::id(DROPDOWN_ID), SHOW_CLASS)
}

/// Opens a closed dropdown and closes an open one.
pub fn toggle(document: &mut Document) {
    let open = is_open(document);
    document.toggle_class(&Selector::id(DROPDOWN_ID), SHOW_CLASS, !open);
}

pub fn close(document: &mut Document) {
    document.toggle_class(&Selector::id(DROPDOWN_ID), SHOW_CLASS, false);
}

/// Shows the native name of `language` in the header button.
pub fn set_indicator(document: &mut Document, language: LanguageCode) {
    document.set_text(&Selector::id(INDICATOR_ID), language.native_name());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Document {
        Document::new(Element::new("body").child(build()))
    }

    #[test]
    fn toggle_opens_and_closes() {
        let mut doc = page();
        assert!(!is_open(&doc));
        toggle(&mut doc);
        assert!(is_open(&doc));
        toggle(&mut doc);
        assert!(!is_open(&doc));
    }

    #[test]
    fn close_is_idempotent() {
        let mut doc = page();
        toggle(&mut doc);
        close(&mut doc);
        close(&mut doc);
        assert!(!is_open(&doc));
    }

    #[test]
    fn options_cover_every_language() {
        let doc = page();
        let options = doc.query_all(&Selector::class(OPTION_CLASS));
        assert_eq!(options.len(), LanguageCode::ALL.len());
        assert_eq!(
            doc.text_content(&Selector::attr("data-lang", "as")),
            Some("অসমীয়া".to_string())
        );
    }

    #[test]
    fn indicator_shows_native_name() {
        let mut doc = page();
        set_indicator(&mut doc, LanguageCode::Hindi);
        assert_eq!(doc.text_content(&Selector::id(INDICATOR_ID)), Some("हिंदी".to_string()));
    }
}
