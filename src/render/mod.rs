// SPDX-License-Identifier: MPL-2.0
//! Writes dictionary content into a [`Document`].
//!
//! A [`Renderer`] owns the fixed list of [`RenderTarget`]s for one page and
//! rewrites every one of them per pass. A pass never fails as a whole: a node
//! that is absent from the page is skipped silently and a key that is absent
//! from the dictionary is skipped with a warning, leaving that one node as it
//! was. Both outcomes are counted in the returned [`RenderReport`].

pub mod targets;

use crate::dom::{Document, Element, Node, Selector};
use crate::domain::{Page, Role};
use crate::i18n::{Dictionary, TranslationKey};

/// Classes of the span that carries the last word of the landing heading.
pub const HEADING_ACCENT_CLASS: &str =
    "block text-transparent bg-clip-text bg-gradient-to-r from-yellow-300 to-pink-300";

/// Where a target's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// The raw dictionary value.
    Key(TranslationKey),
    /// A `{ $role }` template, filled with the localized name of the role.
    RoleTemplate(TranslationKey, Role),
}

impl Binding {
    #[must_use]
    pub fn key(&self) -> TranslationKey {
        match *self {
            Binding::Key(key) | Binding::RoleTemplate(key, _) => key,
        }
    }

    fn resolve(&self, dictionary: &Dictionary) -> Result<String, crate::error::I18nError> {
        match self {
            Binding::Key(key) => dictionary.lookup(key),
            Binding::RoleTemplate(key, role) => dictionary.format_with_role(key, *role),
        }
    }
}

/// Which part of the element receives the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    /// Literal text content.
    Text,
    /// The `placeholder` attribute of a form input.
    Placeholder,
    /// Text with the last word wrapped in an accent span.
    SplitHeading,
}

/// A DOM location bound to the key it displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    pub selector: Selector,
    pub binding: Binding,
    pub property: Property,
}

impl RenderTarget {
    pub fn text(selector: Selector, key: impl Into<TranslationKey>) -> Self {
        Self {
            selector,
            binding: Binding::Key(key.into()),
            property: Property::Text,
        }
    }

    pub fn placeholder(selector: Selector, key: impl Into<TranslationKey>) -> Self {
        Self {
            selector,
            binding: Binding::Key(key.into()),
            property: Property::Placeholder,
        }
    }

    pub fn heading(selector: Selector, key: impl Into<TranslationKey>) -> Self {
        Self {
            selector,
            binding: Binding::Key(key.into()),
            property: Property::SplitHeading,
        }
    }

    pub fn role_template(selector: Selector, key: impl Into<TranslationKey>, role: Role) -> Self {
        Self {
            selector,
            binding: Binding::RoleTemplate(key.into(), role),
            property: Property::Text,
        }
    }
}

/// Outcome of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Targets that received a value.
    pub written: usize,
    /// Keys the dictionary could not supply.
    pub missing_keys: Vec<String>,
    /// Targets whose selector matched nothing.
    pub missing_nodes: usize,
}

impl RenderReport {
    pub fn merge(&mut self, other: RenderReport) {
        self.written += other.written;
        self.missing_keys.extend(other.missing_keys);
        self.missing_nodes += other.missing_nodes;
    }
}

/// Renders the fixed target list of one page.
#[derive(Debug, Clone)]
pub struct Renderer {
    targets: Vec<RenderTarget>,
}

impl Renderer {
    pub fn new(targets: Vec<RenderTarget>) -> Self {
        Self { targets }
    }

    /// Renderer for every known target of `page`.
    pub fn for_page(page: Page) -> Self {
        Self::new(targets::for_page(page))
    }

    pub fn targets(&self) -> &[RenderTarget] {
        &self.targets
    }

    /// Performs a full pass. Idempotent: every write replaces the previous
    /// content of its node.
    pub fn render_all(&self, document: &mut Document, dictionary: &Dictionary) -> RenderReport {
        let report = render_targets(&self.targets, document, dictionary);
        tracing::debug!(
            language = %dictionary.language(),
            written = report.written,
            missing_keys = report.missing_keys.len(),
            missing_nodes = report.missing_nodes,
            "render pass complete"
        );
        report
    }
}

/// Renders an arbitrary target list, e.g. the login modal's.
pub fn render_targets(
    targets: &[RenderTarget],
    document: &mut Document,
    dictionary: &Dictionary,
) -> RenderReport {
    let mut report = RenderReport::default();

    for target in targets {
        let Some(element) = document.query_mut(&target.selector) else {
            tracing::trace!(selector = %target.selector, "render target not on page");
            report.missing_nodes += 1;
            continue;
        };

        let value = match target.binding.resolve(dictionary) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(selector = %target.selector, "{}", err);
                report.missing_keys.push(target.binding.key().id().into_owned());
                continue;
            }
        };

        apply(element, target.property, &value);
        report.written += 1;
    }

    report
}

fn apply(element: &mut Element, property: Property, value: &str) {
    match property {
        Property::Text => element.set_text(value),
        Property::Placeholder => element.set_attribute("placeholder", value),
        Property::SplitHeading => element.replace_children(heading_nodes(value)),
    }
}

/// A heading title split for differential styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingSplit<'a> {
    /// Everything before the last word; may be empty.
    pub lead: &'a str,
    /// The last word; receives the accent span.
    pub last: &'a str,
}

/// Splits `title` at its last whitespace boundary.
///
/// Surrounding whitespace is ignored. A title without inner whitespace is all
/// `last`; an empty or whitespace-only title yields two empty parts.
#[must_use]
pub fn split_heading(title: &str) -> HeadingSplit<'_> {
    let title = title.trim();
    match title.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
        Some((index, separator)) => HeadingSplit {
            lead: title[..index].trim_end(),
            last: &title[index + separator.len_utf8()..],
        },
        None => HeadingSplit {
            lead: "",
            last: title,
        },
    }
}

fn heading_nodes(title: &str) -> Vec<Node> {
    let split = split_heading(title);
    let mut nodes = Vec::with_capacity(2);
    if !split.lead.is_empty() {
        nodes.push(Node::text(format!("{} ", split.lead)));
    }
    nodes.push(
        Element::new("span")
            .class(HEADING_ACCENT_CLASS)
            .text(split.last)
            .into(),
    );
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LanguageCode, StaticKey};

    const SOURCE: &str = "\
header-title = Smart <Health>
main-title = Alpha Beta Gamma
login-title = Login as { $role }
role-asha = ASHA Worker
user-id-placeholder = Enter your user ID
";

    fn dictionary(source: &str) -> Dictionary {
        Dictionary::parse(LanguageCode::English, source).expect("valid ftl")
    }

    fn page() -> Document {
        Document::new(
            Element::new("body")
                .child(Element::new("h1").id("header-title").text("old"))
                .child(Element::new("h2").id("main-heading"))
                .child(Element::new("h3").id("modal-title"))
                .child(Element::new("input").id("user-id-input")),
        )
    }

    fn targets() -> Vec<RenderTarget> {
        vec![
            RenderTarget::text(Selector::id("header-title"), StaticKey::HeaderTitle),
            RenderTarget::heading(Selector::id("main-heading"), StaticKey::MainTitle),
            RenderTarget::role_template(Selector::id("modal-title"), StaticKey::LoginTitle, Role::Asha),
            RenderTarget::placeholder(Selector::id("user-id-input"), StaticKey::UserIdPlaceholder),
            RenderTarget::text(Selector::id("not-on-this-page"), StaticKey::Tagline),
        ]
    }

    #[test]
    fn split_heading_multi_word() {
        assert_eq!(
            split_heading("Alpha Beta Gamma"),
            HeadingSplit { lead: "Alpha Beta", last: "Gamma" }
        );
    }

    #[test]
    fn split_heading_single_word() {
        assert_eq!(split_heading("Gamma"), HeadingSplit { lead: "", last: "Gamma" });
    }

    #[test]
    fn split_heading_empty_and_whitespace_only() {
        assert_eq!(split_heading(""), HeadingSplit { lead: "", last: "" });
        assert_eq!(split_heading("   "), HeadingSplit { lead: "", last: "" });
    }

    #[test]
    fn split_heading_ignores_surrounding_and_repeated_whitespace() {
        assert_eq!(
            split_heading("  Alpha   Beta \n"),
            HeadingSplit { lead: "Alpha", last: "Beta" }
        );
    }

    #[test]
    fn split_heading_handles_non_ascii_whitespace() {
        // U+00A0 NO-BREAK SPACE
        assert_eq!(
            split_heading("জলবাহিত\u{a0}রোগ"),
            HeadingSplit { lead: "জলবাহিত", last: "রোগ" }
        );
    }

    #[test]
    fn render_writes_every_property_kind() {
        let mut doc = page();
        let report = render_targets(&targets(), &mut doc, &dictionary(SOURCE));

        assert_eq!(report.written, 4);
        assert_eq!(report.missing_nodes, 1);
        assert!(report.missing_keys.is_empty());

        assert_eq!(
            doc.text_content(&Selector::id("header-title")),
            Some("Smart <Health>".into())
        );
        assert_eq!(
            doc.text_content(&Selector::id("modal-title")),
            Some("Login as ASHA Worker".into())
        );
        assert_eq!(
            doc.attribute(&Selector::id("user-id-input"), "placeholder"),
            Some("Enter your user ID".into())
        );
    }

    #[test]
    fn heading_places_last_word_in_accent_span() {
        let mut doc = page();
        render_targets(&targets(), &mut doc, &dictionary(SOURCE));

        let heading = doc.query(&Selector::id("main-heading")).expect("heading exists");
        assert_eq!(
            heading.inner_html(),
            format!("Alpha Beta <span class=\"{HEADING_ACCENT_CLASS}\">Gamma</span>")
        );
    }

    #[test]
    fn single_word_heading_has_no_lead_text() {
        let mut doc = page();
        let source = SOURCE.replace("Alpha Beta Gamma", "Gamma");
        render_targets(&targets(), &mut doc, &dictionary(&source));

        let heading = doc.query(&Selector::id("main-heading")).expect("heading exists");
        assert_eq!(heading.child_nodes().len(), 1);
        assert_eq!(heading.text_content(), "Gamma");
    }

    #[test]
    fn text_values_are_never_parsed_as_markup() {
        let mut doc = page();
        render_targets(&targets(), &mut doc, &dictionary(SOURCE));
        let html = doc.query(&Selector::id("header-title")).map(Element::inner_html);
        assert_eq!(html, Some("Smart &lt;Health&gt;".into()));
    }

    #[test]
    fn missing_key_leaves_previous_value() {
        let mut doc = page();
        let source = SOURCE.replace("header-title = Smart <Health>\n", "");
        let report = render_targets(&targets(), &mut doc, &dictionary(&source));

        assert_eq!(report.missing_keys, vec!["header-title".to_string()]);
        assert_eq!(doc.text_content(&Selector::id("header-title")), Some("old".into()));
        assert_eq!(
            doc.text_content(&Selector::id("modal-title")),
            Some("Login as ASHA Worker".into())
        );
    }

    #[test]
    fn render_all_is_idempotent() {
        let renderer = Renderer::new(targets());
        let dict = dictionary(SOURCE);

        let mut once = page();
        renderer.render_all(&mut once, &dict);
        let mut twice = page();
        renderer.render_all(&mut twice, &dict);
        renderer.render_all(&mut twice, &dict);

        assert_eq!(once.to_html(), twice.to_html());
    }
}
