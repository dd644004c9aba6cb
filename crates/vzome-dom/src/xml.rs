//! Compact XML rendering.
//!
//! Output has no insignificant whitespace. Attributes appear in key order,
//! which is what the desktop serializer produces for saved designs.

use crate::{Element, Node};

impl Element {
    /// Renders the element tree as XML.
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self);
        out
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.local_name());
    for (name, value) in element.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value, true));
        out.push('"');
    }
    if element.children().is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in element.children() {
        match child {
            Node::Text(text) => out.push_str(&escape(text, false)),
            Node::Element(nested) => write_element(out, nested),
        }
    }
    out.push_str("</");
    out.push_str(element.local_name());
    out.push('>');
}

fn escape(text: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
