//! In-memory elements with the small read/write surface design code uses.
//!
//! Attributes are kept in a `BTreeMap`, so every serialized form lists them
//! in lexicographic key order. Saved designs depend on that ordering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::DomError;

/// Tag of the history-export children that reads must skip.
pub const EFFECTS_TAG: &str = "effects";

/// A child of an element: either text or another element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A text node.
    Text(String),
    /// A nested element.
    Element(Element),
}

impl Node {
    /// Returns the element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Returns the text, if this node is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text.as_str()),
            Node::Element(_) => None,
        }
    }

    fn is_effects(&self) -> bool {
        self.as_element()
            .is_some_and(|element| element.tag_name == EFFECTS_TAG)
    }
}

/// An element with sorted attributes and ordered children.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    tag_name: String,
    #[serde(default)]
    attributes: BTreeMap<String, String>,
    #[serde(default)]
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    /// The element's tag.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.tag_name
    }

    /// Reads an attribute.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Reads an attribute that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::MissingAttribute`] if it is absent.
    pub fn require_attribute(&self, name: &str) -> Result<&str, DomError> {
        self.get_attribute(name)
            .ok_or_else(|| DomError::MissingAttribute {
                element: self.tag_name.clone(),
                name: name.to_string(),
            })
    }

    /// Writes an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Attributes in key order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Appends a child element.
    pub fn append_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Appends a text node.
    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// All children, including `effects` elements.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    fn visible_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|node| !node.is_effects())
    }

    /// The text of an element whose only visible child is text.
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        let mut visible = self.visible_children();
        match (visible.next(), visible.next()) {
            (Some(Node::Text(text)), None) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Visible children, or `None` when the element holds only text.
    #[must_use]
    pub fn child_nodes(&self) -> Option<Vec<&Node>> {
        if self.text_content().is_some() {
            return None;
        }
        Some(self.visible_children().collect())
    }

    /// First child element with the given tag.
    #[must_use]
    pub fn child_element(&self, name: &str) -> Option<&Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find(|element| element.tag_name == name)
    }

    /// Every child element with the given tag.
    #[must_use]
    pub fn elements_by_tag_name(&self, name: &str) -> Vec<&Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .filter(|element| element.tag_name == name)
            .collect()
    }

    /// JSON form, attribute keys sorted.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, DomError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reads the JSON form produced by [`Element::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Json`] for malformed input.
    pub fn from_json(json: &str) -> Result<Self, DomError> {
        Ok(serde_json::from_str(json)?)
    }
}
