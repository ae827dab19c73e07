//! Declarative element descriptions.

use std::collections::BTreeMap;

use derive_more::From;
use serde_json::Value;
use tracing::debug;

use crate::event::{Event, EventHandler};

/// Attribute key reserved for children; never stored in [`Props`].
pub const CHILDREN_KEY: &str = "children";

/// Tag reported by [`ElementNode::tag`] for text nodes.
pub const TEXT_TAG: &str = "#text";

/// An attribute value: plain data or an event callback.
#[derive(Debug, Clone, PartialEq, From)]
pub enum PropValue {
    /// JSON-like data (string, number, bool, ...).
    Value(Value),
    /// Callback, registered as a listener when the key names an allowed event.
    Handler(EventHandler),
}

impl PropValue {
    /// String payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Value(value) => value.as_str(),
            PropValue::Handler(_) => None,
        }
    }

    /// Callback, if this is a handler.
    pub fn as_handler(&self) -> Option<&EventHandler> {
        match self {
            PropValue::Handler(handler) => Some(handler),
            PropValue::Value(_) => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Value(Value::from(value))
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Value(Value::from(value))
    }
}

impl From<usize> for PropValue {
    fn from(value: usize) -> Self {
        PropValue::Value(Value::from(value))
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Value(Value::from(value))
    }
}

/// Attribute mapping of an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(BTreeMap<String, PropValue>);

impl Props {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, replacing any previous value for `key`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Adds an event attribute such as `onClick`.
    pub fn on(self, key: impl Into<String>, handler: impl Fn(&Event) + 'static) -> Self {
        self.with(key, EventHandler::new(handler))
    }

    /// Looks up an attribute.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for Props {
    type Item = (String, PropValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, PropValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A node of a declarative UI tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementNode {
    /// Element with a tag, attributes and ordered children.
    Element {
        /// UI tag name, e.g. `button`.
        tag: String,
        /// Attributes, never containing [`CHILDREN_KEY`].
        props: Props,
        /// Ordered children.
        children: Vec<ElementNode>,
    },
    /// Text payload with no children.
    Text(String),
}

impl ElementNode {
    /// Tag name, or [`TEXT_TAG`] for text.
    pub fn tag(&self) -> &str {
        match self {
            ElementNode::Element { tag, .. } => tag,
            ElementNode::Text(_) => TEXT_TAG,
        }
    }

    /// Attributes; text nodes have none.
    pub fn props(&self) -> Option<&Props> {
        match self {
            ElementNode::Element { props, .. } => Some(props),
            ElementNode::Text(_) => None,
        }
    }

    /// Children, always present and empty for text.
    pub fn children(&self) -> &[ElementNode] {
        match self {
            ElementNode::Element { children, .. } => children,
            ElementNode::Text(_) => &[],
        }
    }

    /// Whether this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self, ElementNode::Text(_))
    }
}

/// Builds an element node.
///
/// Children are passed structurally; a `children` attribute is dropped.
pub fn make_element(
    tag: impl Into<String>,
    mut props: Props,
    children: impl IntoIterator<Item = ElementNode>,
) -> ElementNode {
    if props.0.remove(CHILDREN_KEY).is_some() {
        debug!("Dropped children attribute, children are passed structurally");
    }
    ElementNode::Element {
        tag: tag.into(),
        props,
        children: children.into_iter().collect(),
    }
}

/// Builds a text node. An absent value becomes the empty string.
pub fn make_text<'a>(value: impl Into<Option<&'a str>>) -> ElementNode {
    ElementNode::Text(value.into().unwrap_or_default().to_string())
}
