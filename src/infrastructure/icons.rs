// SPDX-License-Identifier: MPL-2.0
//! Icon renderer for `data-lucide` placeholders.
//!
//! Each placeholder receives an inline `svg` child built from the glyph table
//! below. Rendering replaces the previous child, so a placeholder whose icon
//! name changed (the theme toggle) picks up the new glyph on the next pass.

use crate::application::port::icons::{IconError, IconRenderer, ICON_ATTRIBUTE};
use crate::dom::{Document, Element, Node, Selector};

/// Stroke paths for the icons the pages use, keyed by lucide name.
const GLYPHS: &[(&str, &[&str])] = &[
    ("activity", &["M22 12h-4l-3 9L9 3l-3 9H2"]),
    ("arrow-left", &["m12 19-7-7 7-7", "M19 12H5"]),
    ("book-open", &["M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z", "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"]),
    ("chevron-down", &["m6 9 6 6 6-6"]),
    ("eye", &["M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z", "M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6Z"]),
    ("globe", &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Z", "M2 12h20", "M12 2a15.3 15.3 0 0 1 0 20 15.3 15.3 0 0 1 0-20"]),
    ("heart-pulse", &["M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z", "M3.22 12H9.5l.5-1 2 4.5 2-7 1.5 3.5h5.27"]),
    ("help-circle", &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Z", "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3", "M12 17h.01"]),
    ("log-in", &["M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4", "m10 17 5-5-5-5", "M15 12H3"]),
    ("log-out", &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "m16 17 5-5-5-5", "M21 12H9"]),
    ("moon", &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"]),
    ("plus", &["M5 12h14", "M12 5v14"]),
    ("shield", &["M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"]),
    ("sun", &["M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8Z", "M12 2v2", "M12 20v2", "m4.93 4.93 1.41 1.41", "m17.66 17.66 1.41 1.41", "M2 12h2", "M20 12h2", "m6.34 17.66-1.41 1.41", "m19.07 4.93-1.41 1.41"]),
    ("user", &["M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2", "M12 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8Z"]),
    ("user-plus", &["M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2", "M9 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8Z", "M19 8v6", "M22 11h-6"]),
    ("users", &["M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2", "M9 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8Z", "M22 21v-2a4 4 0 0 0-3-3.87", "M16 3.13a4 4 0 0 1 0 7.75"]),
    ("x", &["M18 6 6 18", "m6 6 12 12"]),
];

fn glyph(name: &str) -> Option<&'static [&'static str]> {
    GLYPHS
        .iter()
        .find(|(glyph_name, _)| *glyph_name == name)
        .map(|(_, paths)| *paths)
}

fn svg(name: &str, paths: &[&str]) -> Element {
    let mut svg = Element::new("svg")
        .class(&format!("lucide lucide-{name}"))
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", "24")
        .attr("height", "24")
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", "2")
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round");
    for d in paths {
        svg.append(Element::new("path").attr("d", d));
    }
    svg
}

/// Built-in lucide glyph renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LucideIcons;

impl LucideIcons {
    pub fn new() -> Self {
        Self
    }
}

impl IconRenderer for LucideIcons {
    fn render_icons(&mut self, document: &mut Document) -> Result<usize, IconError> {
        let mut rendered = 0;
        document.for_each_mut(&Selector::has_attr(ICON_ATTRIBUTE), |element| {
            let Some(name) = element.attribute(ICON_ATTRIBUTE).map(str::to_string) else {
                return;
            };
            match glyph(&name) {
                Some(paths) => {
                    element.replace_children(vec![Node::Element(svg(&name, paths))]);
                    rendered += 1;
                }
                None => {
                    tracing::debug!(icon = %name, "no glyph for icon");
                    element.replace_children(Vec::new());
                }
            }
        });
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(icon: &str) -> Document {
        Document::new(
            Element::new("body").child(Element::new("i").id("icon").attr(ICON_ATTRIBUTE, icon)),
        )
    }

    #[test]
    fn placeholder_gets_svg_child() {
        let mut doc = page("sun");
        assert_eq!(LucideIcons::new().render_icons(&mut doc), Ok(1));
        let icon = doc.query(&Selector::id("icon")).expect("icon exists");
        assert_eq!(icon.child_nodes().len(), 1);
        assert!(icon.inner_html().starts_with("<svg class=\"lucide lucide-sun\""));
    }

    #[test]
    fn rendering_twice_does_not_duplicate() {
        let mut doc = page("moon");
        let mut icons = LucideIcons::new();
        icons.render_icons(&mut doc).unwrap();
        let once = doc.to_html();
        icons.render_icons(&mut doc).unwrap();
        assert_eq!(doc.to_html(), once);
    }

    #[test]
    fn unknown_icon_is_left_empty() {
        let mut doc = page("does-not-exist");
        assert_eq!(LucideIcons::new().render_icons(&mut doc), Ok(0));
        let icon = doc.query(&Selector::id("icon")).expect("icon exists");
        assert!(icon.child_nodes().is_empty());
    }
}
