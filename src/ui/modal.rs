// SPDX-License-Identifier: MPL-2.0
//! Login modal.
//!
//! The landing page carries an empty, hidden shell. Opening it for a role
//! builds the form as structured nodes; its strings come from the
//! [`login_modal`](crate::render::targets::login_modal) targets.

use super::design_tokens::{button, icon as icon_tokens, input, surface, text};
use super::pages::icon;
use crate::dom::{Document, Element, Selector};
use crate::domain::Role;

pub const MODAL_ID: &str = "login-modal";
pub const TITLE_ID: &str = "modal-title";
pub const CONTENT_ID: &str = "modal-content";
pub const CLOSE_ID: &str = "close-modal";
pub const MESSAGE_ID: &str = "modal-message";
pub const HIDDEN_CLASS: &str = "hidden";

/// Hidden modal container, placed once per landing page.
#[must_use]
pub fn shell() -> Element {
    Element::new("div")
        .id(MODAL_ID)
        .class(&format!("{} {HIDDEN_CLASS}", surface::MODAL_BACKDROP))
        .child(
            Element::new("div")
                .class(surface::MODAL_PANEL)
                .child(
                    Element::new("div")
                        .class("flex items-center justify-between mb-6")
                        .child(Element::new("h3").id(TITLE_ID).class(text::CARD_TITLE))
                        .child(
                            Element::new("button")
                                .id(CLOSE_ID)
                                .class(button::ROW_ACTION)
                                .child(icon("x", icon_tokens::MEDIUM)),
                        ),
                )
                .child(Element::new("div").id(CONTENT_ID))
                .child(Element::new("p").id(MESSAGE_ID).class(text::SMALL)),
        )
}

fn login_form(role: Role) -> Element {
    let field = |label_id: &str, input_id: &str, kind: &str| {
        Element::new("div")
            .child(Element::new("label").id(label_id).class(text::LABEL).attr("for", input_id))
            .child(
                Element::new("input")
                    .id(input_id)
                    .attr("type", kind)
                    .attr("required", "required")
                    .class(input::FIELD),
            )
    };

    let options = Element::new("div")
        .class("flex items-center justify-between")
        .child(
            Element::new("label")
                .class("flex items-center gap-2")
                .child(Element::new("input").attr("type", "checkbox").class(input::CHECKBOX))
                .child(Element::new("span").id("remember-me-label").class(text::SMALL)),
        )
        .child(
            Element::new("button")
                .id("forgot-password")
                .attr("type", "button")
                .class(text::LINK),
        );

    let actions = Element::new("div")
        .class("space-y-3 pt-4")
        .child(
            Element::new("button")
                .id("login-submit")
                .attr("type", "submit")
                .class(button::PRIMARY)
                .child(icon("log-in", icon_tokens::INLINE))
                .child(Element::new("span").id("login-button-label")),
        )
        .child(
            Element::new("div")
                .class("text-center")
                .child(Element::new("span").id("no-account").class(text::SMALL))
                .child(
                    Element::new("button")
                        .id("request-access")
                        .attr("type", "button")
                        .attr("data-role", role.id())
                        .class(text::LINK),
                ),
        );

    let form = Element::new("form")
        .id("login-form")
        .class("space-y-4")
        .attr("data-role", role.id())
        .child(field("user-id-label", "user-id-input", "text"))
        .child(field("password-label", "password-input", "password"))
        .child(options)
        .child(actions);

    Element::new("div")
        .child(form)
        .child(
            Element::new("div")
                .class("mt-6 pt-6 border-t border-gray-200 dark:border-gray-700")
                .child(Element::new("p").id("security-note").class(text::NOTE)),
        )
}

/// Fills the modal for `role` and shows it. Returns `false` when the page
/// has no modal.
pub fn open(document: &mut Document, role: Role) -> bool {
    let Some(modal) = document.query_mut(&Selector::id(MODAL_ID)) else {
        return false;
    };
    modal.set_attribute("data-role", role.id());
    modal.toggle_class(HIDDEN_CLASS, false);

    document.set_children(&Selector::id(CONTENT_ID), vec![login_form(role).into()]);
    document.set_children(&Selector::id(MESSAGE_ID), Vec::new());
    true
}

pub fn close(document: &mut Document) {
    document.toggle_class(&Selector::id(MODAL_ID), HIDDEN_CLASS, true);
}

#[must_use]
pub fn is_open(document: &Document) -> bool {
    document
        .query(&Selector::id(MODAL_ID))
        .is_some_and(|modal| !modal.has_class(HIDDEN_CLASS))
}

/// Shows a status line under the form (login result, access instructions).
pub fn show_message(document: &mut Document, message: &str) {
    document.set_text(&Selector::id(MESSAGE_ID), message);
}
