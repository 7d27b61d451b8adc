// SPDX-License-Identifier: MPL-2.0
//! Static page skeletons.
//!
//! Skeletons carry structure, ids and data attributes only. Every visible
//! string is written later by the renderer, so a freshly built page shows
//! empty text until the first render pass.

use super::design_tokens::{button, icon as icon_tokens, input, surface, table, text};
use super::language_selector;
use super::modal;
use super::theming::THEME_ICON_ID;
use crate::application::port::icons::ICON_ATTRIBUTE;
use crate::dom::{Document, Element};
use crate::domain::{FeatureIndex, ItemIndex, Page, Role};

/// Districts offered by the registration form.
pub const DISTRICTS: &[&str] = &[
    "Kamrup",
    "Dibrugarh",
    "Jorhat",
    "Cachar",
    "Nagaon",
    "Sonitpur",
    "Lakhimpur",
    "Tinsukia",
];

/// Builds the skeleton for `page`.
#[must_use]
pub fn build(page: Page) -> Document {
    let main = match page {
        Page::Landing => landing(),
        Page::Registration => registration(),
        Page::Dashboard => dashboard(),
    };

    let mut body = Element::new("body")
        .class(surface::BODY)
        .child(header(page))
        .child(main);
    if page == Page::Landing {
        body = body.child(modal::shell());
    }

    Document::new(
        Element::new("html")
            .attr("data-page", page.name())
            .child(Element::new("head").child(Element::new("meta").attr("charset", "utf-8")))
            .child(body),
    )
}

/// `<i data-lucide="name">` placeholder.
pub(crate) fn icon(name: &str, class: &str) -> Element {
    Element::new("i").attr(ICON_ATTRIBUTE, name).class(class)
}

fn header(page: Page) -> Element {
    let mut brand = Element::new("div")
        .class("flex items-center gap-3")
        .child(icon("heart-pulse", icon_tokens::MEDIUM))
        .child(
            Element::new("div")
                .child(Element::new("h1").id("header-title").class("text-xl font-bold"))
                .child(Element::new("p").id("header-subtitle").class("text-sm opacity-80")),
        );
    if page == Page::Registration {
        brand = brand.child(
            Element::new("a")
                .attr("href", "index.html")
                .class("flex items-center gap-1")
                .child(icon("arrow-left", icon_tokens::SMALL))
                .child(Element::new("span").id("back-to-home")),
        );
    }

    let mut controls = Element::new("div")
        .class("flex items-center gap-2")
        .child(language_selector::build())
        .child(
            Element::new("button")
                .id("theme-toggle")
                .class(button::ICON)
                .child(icon("sun", icon_tokens::MEDIUM).id(THEME_ICON_ID)),
        );
    if page == Page::Dashboard {
        controls = controls.child(
            Element::new("button")
                .id("logout-btn")
                .class(button::ICON)
                .child(icon("log-out", icon_tokens::INLINE))
                .child(Element::new("span").id("logout-btn-label")),
        );
    }

    Element::new("header").class(surface::HEADER).child(
        Element::new("div")
            .class("container mx-auto flex items-center justify-between px-4 py-4")
            .child(brand)
            .child(controls),
    )
}

fn landing() -> Element {
    let hero = Element::new("section")
        .class(surface::HERO)
        .child(Element::new("h2").id("main-heading").class(text::HEADING))
        .child(Element::new("p").id("sub-heading").class("text-xl text-white/90 mt-4"))
        .child(Element::new("p").id("tagline").class("text-lg text-white/80 mt-2"));

    let role_cards = Element::new("div")
        .class("grid md:grid-cols-2 lg:grid-cols-4 gap-6")
        .children(Role::ALL.into_iter().map(role_card));

    let roles = Element::new("section")
        .id("roles")
        .class("container mx-auto px-4 py-12")
        .child(Element::new("h3").id("choose-role-heading").class(text::SECTION_TITLE))
        .child(Element::new("p").id("role-description").class(text::BODY))
        .child(role_cards);

    let features = Element::new("section")
        .id("features")
        .class("container mx-auto px-4 py-12")
        .child(Element::new("h3").id("features-title").class(text::SECTION_TITLE))
        .child(Element::new("p").id("features-description").class(text::BODY))
        .child(
            Element::new("div")
                .class("grid md:grid-cols-3 gap-6")
                .children(FeatureIndex::all().map(feature_card)),
        );

    let footer = Element::new("footer")
        .class("container mx-auto px-4 py-8 flex gap-4 justify-center")
        .child(
            Element::new("button")
                .id("help-btn")
                .class(text::LINK)
                .child(icon("help-circle", icon_tokens::INLINE))
                .child(Element::new("span").id("help-btn-label")),
        )
        .child(
            Element::new("button")
                .id("awareness-btn")
                .class(text::LINK)
                .child(icon("book-open", icon_tokens::INLINE))
                .child(Element::new("span").id("awareness-btn-label")),
        );

    Element::new("main")
        .child(hero)
        .child(roles)
        .child(features)
        .child(footer)
}

fn role_icon(role: Role) -> &'static str {
    match role {
        Role::Asha => "heart-pulse",
        Role::Volunteer => "users",
        Role::Admin => "shield",
        Role::Patient => "user",
    }
}

fn role_card(role: Role) -> Element {
    let id = role.id();
    let items = Element::new("ul").class("space-y-2 mt-4").children(
        ItemIndex::all().map(|index| {
            Element::new("li")
                .class(text::SMALL)
                .attr("data-role-item", &format!("{id}-{}", index.value()))
        }),
    );

    Element::new("div")
        .class(surface::CARD)
        .attr("data-role", id)
        .child(icon(role_icon(role), "w-8 h-8 text-blue-600"))
        .child(Element::new("h4").class(text::CARD_TITLE).attr("data-role-title", id))
        .child(Element::new("p").class(text::BODY).attr("data-role-desc", id))
        .child(items)
        .child(
            Element::new("button")
                .class(button::ROLE)
                .attr("data-role-button", id),
        )
}

fn feature_card(index: FeatureIndex) -> Element {
    let value = index.value().to_string();
    Element::new("div")
        .class(surface::CARD)
        .child(Element::new("h4").class(text::CARD_TITLE).attr("data-feature-title", &value))
        .child(Element::new("p").class(text::BODY).attr("data-feature-desc", &value))
}

fn labelled_input(label_id: &str, input_id: &str, name: &str, kind: &str) -> Element {
    Element::new("div")
        .child(Element::new("label").id(label_id).class(text::LABEL).attr("for", input_id))
        .child(
            Element::new("input")
                .id(input_id)
                .attr("name", name)
                .attr("type", kind)
                .attr("required", "required")
                .class(input::FIELD),
        )
}

fn form_section(title_id: &str, fields: Vec<Element>) -> Element {
    Element::new("fieldset")
        .class("space-y-4")
        .child(Element::new("h3").id(title_id).class(text::CARD_TITLE))
        .children(fields)
}

fn registration() -> Element {
    let district = Element::new("div")
        .child(
            Element::new("label")
                .id("district-label")
                .class(text::LABEL)
                .attr("for", "district"),
        )
        .child(
            Element::new("select")
                .id("district")
                .attr("name", "district")
                .attr("required", "required")
                .class(input::FIELD)
                .child(Element::new("option").id("select-district-option").attr("value", ""))
                .children(
                    DISTRICTS
                        .iter()
                        .map(|name| Element::new("option").attr("value", name).text(name)),
                ),
        );

    let form = Element::new("form")
        .id(super::registration::FORM_ID)
        .class("space-y-8")
        .child(form_section(
            "personal-info-title",
            vec![
                labelled_input("name-label", "name-placeholder", "name", "text"),
                labelled_input("dob-label", "dob", "dob", "date"),
            ],
        ))
        .child(form_section(
            "contact-info-title",
            vec![
                labelled_input("mobile-label", "mobile-placeholder", "mobile", "tel"),
                labelled_input("email-label", "email-placeholder", "email", "email"),
            ],
        ))
        .child(form_section(
            "professional-info-title",
            vec![
                labelled_input("asha-id-label", "asha-id-placeholder", "ashaId", "text"),
                district,
            ],
        ))
        .child(form_section(
            "account-setup-title",
            vec![
                labelled_input("username-label", "username-placeholder", "username", "text"),
                labelled_input("password-label", "password-placeholder", "password", "password"),
            ],
        ))
        .child(
            Element::new("button")
                .id("register-button")
                .attr("type", "submit")
                .class(button::PRIMARY),
        )
        .child(Element::new("p").id(super::registration::MESSAGE_ID).class(text::SMALL));

    Element::new("main").class("container mx-auto px-4 py-12 max-w-3xl").child(
        Element::new("div")
            .class(surface::CARD)
            .child(Element::new("h2").id("form-title").class(text::SECTION_TITLE))
            .child(Element::new("p").id("form-subtitle").class(text::BODY))
            .child(form),
    )
}

fn dashboard() -> Element {
    let columns = [
        "column-id",
        "column-name",
        "column-age",
        "column-symptoms",
        "column-status",
        "column-actions",
    ];
    let head = Element::new("thead").child(
        Element::new("tr").children(
            columns
                .iter()
                .map(|id| Element::new("th").id(id).class(table::HEAD_CELL)),
        ),
    );

    let records = Element::new("div")
        .class(surface::CARD)
        .child(
            Element::new("div")
                .class("flex items-center justify-between mb-4")
                .child(Element::new("h3").id("patient-records-title").class(text::CARD_TITLE))
                .child(
                    Element::new("button")
                        .id("add-patient-btn")
                        .class("px-4 py-2 rounded-lg bg-blue-600 text-white")
                        .child(icon("plus", icon_tokens::INLINE))
                        .child(Element::new("span").id("add-patient-label")),
                ),
        )
        .child(
            Element::new("table")
                .class("w-full text-sm")
                .child(head)
                .child(Element::new("tbody").id(super::dashboard::RECORDS_ID)),
        );

    Element::new("main")
        .class("container mx-auto px-4 py-8")
        .child(Element::new("h2").id("dashboard-title").class(text::SECTION_TITLE))
        .child(records)
}
