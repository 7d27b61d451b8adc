// SPDX-License-Identifier: MPL-2.0
//! Document Object Model.
//!
//! An in-memory element tree addressed by id, attribute or class selectors.
//! Content is always written as nodes; serialization escapes every text node
//! and attribute value, so translated or user-supplied strings can never turn
//! into markup.

use std::collections::BTreeMap;
use std::fmt;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Creates a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    fn serialize(&self, html: &mut String) {
        match self {
            Node::Text(text) => html.push_str(&escape_html(text)),
            Node::Element(element) => element.serialize(html),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    // Builder helpers used by the page skeletons.

    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn text(mut self, content: &str) -> Self {
        self.children.push(Node::text(content));
        self
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub fn class_list(&self) -> Vec<&str> {
        self.attribute("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(&class)
    }

    /// Adds or removes `class`, leaving the other classes in place.
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        let mut classes: Vec<String> = self
            .class_list()
            .into_iter()
            .filter(|c| *c != class)
            .map(str::to_string)
            .collect();
        if on {
            classes.push(class.to_string());
        }
        if classes.is_empty() {
            self.remove_attribute("class");
        } else {
            self.set_attribute("class", &classes.join(" "));
        }
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Replaces every child with a single text node.
    pub fn set_text(&mut self, content: &str) {
        self.children = vec![Node::text(content)];
    }

    /// Replaces every child with `children`.
    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn text_content(&self) -> String {
        let mut content = String::new();
        for child in &self.children {
            child.collect_text(&mut content);
        }
        content
    }

    pub fn inner_html(&self) -> String {
        let mut html = String::new();
        for child in &self.children {
            child.serialize(&mut html);
        }
        html
    }

    pub fn outer_html(&self) -> String {
        let mut html = String::new();
        self.serialize(&mut html);
        html
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    fn serialize(&self, html: &mut String) {
        html.push('<');
        html.push_str(&self.tag);
        for (name, value) in &self.attributes {
            html.push(' ');
            html.push_str(name);
            html.push_str("=\"");
            html.push_str(&escape_html(value));
            html.push('"');
        }

        if self.is_void() {
            html.push_str(" />");
            return;
        }

        html.push('>');
        for child in &self.children {
            child.serialize(html);
        }
        html.push_str("</");
        html.push_str(&self.tag);
        html.push('>');
    }

    fn find(&self, selector: &Selector) -> Option<&Element> {
        if selector.matches(self) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(selector))
    }

    fn find_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        if selector.matches(self) {
            return Some(self);
        }
        for child in &mut self.children {
            if let Node::Element(element) = child {
                if let Some(found) = element.find_mut(selector) {
                    return Some(found);
                }
            }
        }
        None
    }

    fn find_all<'a>(&'a self, selector: &Selector, results: &mut Vec<&'a Element>) {
        if selector.matches(self) {
            results.push(self);
        }
        for child in self.child_elements() {
            child.find_all(selector, results);
        }
    }

    fn visit_matching_mut(&mut self, selector: &Selector, f: &mut dyn FnMut(&mut Element)) -> usize {
        let mut count = 0;
        if selector.matches(self) {
            f(self);
            count += 1;
        }
        for child in &mut self.children {
            if let Node::Element(element) = child {
                count += element.visit_matching_mut(selector, f);
            }
        }
        count
    }

    fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }
}

/// Addresses elements in a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `#id`
    Id(String),
    /// `[name="value"]`, or `[name]` when `value` is `None`.
    Attribute { name: String, value: Option<String> },
    /// `.class`
    Class(String),
}

impl Selector {
    pub fn id(id: &str) -> Self {
        Selector::Id(id.to_string())
    }

    pub fn attr(name: &str, value: &str) -> Self {
        Selector::Attribute {
            name: name.to_string(),
            value: Some(value.to_string()),
        }
    }

    pub fn has_attr(name: &str) -> Self {
        Selector::Attribute {
            name: name.to_string(),
            value: None,
        }
    }

    pub fn class(class: &str) -> Self {
        Selector::Class(class.to_string())
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Id(id) => element.attribute("id") == Some(id.as_str()),
            Selector::Attribute { name, value } => match (element.attribute(name), value) {
                (Some(actual), Some(expected)) => actual == expected,
                (Some(_), None) => true,
                (None, _) => false,
            },
            Selector::Class(class) => element.has_class(class),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{id}"),
            Selector::Attribute { name, value: Some(value) } => write!(f, "[{name}=\"{value}\"]"),
            Selector::Attribute { name, value: None } => write!(f, "[{name}]"),
            Selector::Class(class) => write!(f, ".{class}"),
        }
    }
}

/// A page's element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// First element matching `selector`, in document order.
    pub fn query(&self, selector: &Selector) -> Option<&Element> {
        self.root.find(selector)
    }

    pub fn query_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        self.root.find_mut(selector)
    }

    pub fn query_all(&self, selector: &Selector) -> Vec<&Element> {
        let mut results = Vec::new();
        self.root.find_all(selector, &mut results);
        results
    }

    pub fn contains(&self, selector: &Selector) -> bool {
        self.query(selector).is_some()
    }

    /// Applies `f` to every matching element and returns how many matched.
    pub fn for_each_mut(&mut self, selector: &Selector, mut f: impl FnMut(&mut Element)) -> usize {
        self.root.visit_matching_mut(selector, &mut f)
    }

    /// Writes literal text into the first match. Returns `false` when
    /// nothing matches.
    pub fn set_text(&mut self, selector: &Selector, text: &str) -> bool {
        self.query_mut(selector)
            .map(|element| element.set_text(text))
            .is_some()
    }

    /// Replaces the children of the first match.
    pub fn set_children(&mut self, selector: &Selector, children: Vec<Node>) -> bool {
        self.query_mut(selector)
            .map(|element| element.replace_children(children))
            .is_some()
    }

    pub fn set_attribute(&mut self, selector: &Selector, name: &str, value: &str) -> bool {
        self.query_mut(selector)
            .map(|element| element.set_attribute(name, value))
            .is_some()
    }

    pub fn toggle_class(&mut self, selector: &Selector, class: &str, on: bool) -> bool {
        self.query_mut(selector)
            .map(|element| element.toggle_class(class, on))
            .is_some()
    }

    pub fn text_content(&self, selector: &Selector) -> Option<String> {
        self.query(selector).map(Element::text_content)
    }

    pub fn attribute(&self, selector: &Selector, name: &str) -> Option<String> {
        self.query(selector)
            .and_then(|element| element.attribute(name))
            .map(str::to_string)
    }

    pub fn has_class(&self, selector: &Selector, class: &str) -> bool {
        self.query(selector)
            .is_some_and(|element| element.has_class(class))
    }

    /// Serializes the whole document, doctype included.
    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>{}", self.root.outer_html())
    }
}

fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(
            Element::new("html").child(
                Element::new("body")
                    .child(Element::new("h1").id("title").text("Hello"))
                    .child(
                        Element::new("ul")
                            .child(Element::new("li").attr("data-item", "1").text("one"))
                            .child(Element::new("li").attr("data-item", "2").text("two")),
                    )
                    .child(Element::new("input").id("name").attr("placeholder", "Name")),
            ),
        )
    }

    #[test]
    fn query_by_id_and_attribute() {
        let doc = sample();
        assert_eq!(doc.text_content(&Selector::id("title")), Some("Hello".into()));
        assert_eq!(
            doc.text_content(&Selector::attr("data-item", "2")),
            Some("two".into())
        );
        assert_eq!(doc.query_all(&Selector::has_attr("data-item")).len(), 2);
        assert!(!doc.contains(&Selector::id("missing")));
    }

    #[test]
    fn set_text_replaces_children() {
        let mut doc = sample();
        assert!(doc.set_text(&Selector::id("title"), "Bye"));
        assert!(doc.set_text(&Selector::id("title"), "Bye"));
        assert_eq!(
            doc.query(&Selector::id("title")).map(Element::inner_html),
            Some("Bye".into())
        );
    }

    #[test]
    fn set_text_on_missing_target_reports_false() {
        let mut doc = sample();
        let before = doc.clone();
        assert!(!doc.set_text(&Selector::id("nope"), "x"));
        assert_eq!(doc, before);
    }

    #[test]
    fn text_is_escaped_on_serialization() {
        let mut doc = sample();
        doc.set_text(&Selector::id("title"), "<script>alert('x')</script>");
        let html = doc.query(&Selector::id("title")).map(Element::outer_html);
        assert_eq!(
            html,
            Some("<h1 id=\"title\">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</h1>".into())
        );
    }

    #[test]
    fn void_elements_self_close() {
        let doc = sample();
        let html = doc.query(&Selector::id("name")).map(Element::outer_html);
        assert_eq!(html, Some("<input id=\"name\" placeholder=\"Name\" />".into()));
    }

    #[test]
    fn toggle_class_keeps_other_classes() {
        let mut element = Element::new("div").class("a b");
        element.toggle_class("show", true);
        assert!(element.has_class("show"));
        assert!(element.has_class("a"));
        element.toggle_class("show", true);
        assert_eq!(element.class_list(), vec!["a", "b", "show"]);
        element.toggle_class("show", false);
        assert_eq!(element.class_list(), vec!["a", "b"]);
    }

    #[test]
    fn for_each_mut_visits_all_matches() {
        let mut doc = sample();
        let count = doc.for_each_mut(&Selector::has_attr("data-item"), |el| el.set_text("x"));
        assert_eq!(count, 2);
        assert!(doc
            .query_all(&Selector::has_attr("data-item"))
            .iter()
            .all(|el| el.text_content() == "x"));
    }

    #[test]
    fn selector_display_uses_css_syntax() {
        assert_eq!(Selector::id("a").to_string(), "#a");
        assert_eq!(Selector::attr("data-role", "asha").to_string(), "[data-role=\"asha\"]");
        assert_eq!(Selector::class("show").to_string(), ".show");
    }
}
