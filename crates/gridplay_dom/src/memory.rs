//! In-memory live node tree.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::rc::Rc;
use std::str::FromStr;

use tracing::{debug, instrument, trace};

use crate::element::{PropValue, TEXT_TAG};
use crate::error::{DomError, DomErrorKind};
use crate::event::{Event, EventHandler, EventName};
use crate::host::{Host, NodeId};

const CLASS_NAME: &str = "className";
const ID: &str = "id";

#[derive(Debug, Clone)]
enum NodeKind {
    Element(String),
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    properties: BTreeMap<String, PropValue>,
    listeners: Vec<(EventName, EventHandler)>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            properties: BTreeMap::new(),
            listeners: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }
}

/// A live UI tree held in memory.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. Detached nodes
/// stay in the arena but are invisible to the `body`-rooted queries.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<NodeData>,
    body: NodeId,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Creates a document holding only an empty `body` element.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData::new(NodeKind::Element("body".to_string()))],
            body: NodeId(0),
        }
    }

    /// Number of nodes held, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Root element every attached node descends from.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Creates an element and appends it to `body`.
    pub fn create_container(&mut self, tag: &str) -> Result<NodeId, DomError> {
        let id = self.create_element(tag);
        self.append_child(self.body, id)?;
        Ok(id)
    }

    fn node(&self, id: NodeId) -> Result<&NodeData, DomError> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| DomError::new(DomErrorKind::UnknownNode(id)))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData, DomError> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| DomError::new(DomErrorKind::UnknownNode(id)))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(NodeData::new(kind));
        NodeId(self.nodes.len() - 1)
    }

    /// Tag of an element, or [`TEXT_TAG`] for text nodes.
    pub fn tag(&self, id: NodeId) -> Result<&str, DomError> {
        Ok(match &self.node(id)?.kind {
            NodeKind::Element(tag) => tag,
            NodeKind::Text(_) => TEXT_TAG,
        })
    }

    /// Payload of a text node; `None` for elements.
    pub fn text(&self, id: NodeId) -> Result<Option<&str>, DomError> {
        Ok(match &self.node(id)?.kind {
            NodeKind::Text(value) => Some(value),
            NodeKind::Element(_) => None,
        })
    }

    /// Plain property assigned on a node.
    pub fn property(&self, id: NodeId, key: &str) -> Result<Option<&PropValue>, DomError> {
        Ok(self.node(id)?.properties.get(key))
    }

    /// Ordered children.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId], DomError> {
        Ok(&self.node(id)?.children)
    }

    /// Parent, if attached.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, DomError> {
        Ok(self.node(id)?.parent)
    }

    /// Number of listeners registered for `event`.
    pub fn listener_count(&self, id: NodeId, event: EventName) -> Result<usize, DomError> {
        Ok(self
            .node(id)?
            .listeners
            .iter()
            .filter(|(name, _)| *name == event)
            .count())
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> Result<String, DomError> {
        let mut out = String::new();
        self.collect_text(id, &mut out)?;
        Ok(out)
    }

    fn collect_text(&self, id: NodeId, out: &mut String) -> Result<(), DomError> {
        let node = self.node(id)?;
        match &node.kind {
            NodeKind::Text(value) => out.push_str(value),
            NodeKind::Element(_) => {
                for child in &node.children {
                    self.collect_text(*child, out)?;
                }
            }
        }
        Ok(())
    }

    /// Replaces the text of `id`.
    ///
    /// An existing leading text child is updated in place and any other
    /// children are detached. Without one, a text node is created, unless
    /// `value` is empty.
    #[instrument(skip(self))]
    pub fn set_text_content(&mut self, id: NodeId, value: &str) -> Result<(), DomError> {
        if let NodeKind::Text(text) = &mut self.node_mut(id)?.kind {
            *text = value.to_string();
            return Ok(());
        }
        let mut children = std::mem::take(&mut self.node_mut(id)?.children).into_iter();
        let reused = match children.next() {
            Some(first) if matches!(self.node(first)?.kind, NodeKind::Text(_)) => Some(first),
            Some(first) => {
                self.node_mut(first)?.parent = None;
                None
            }
            None => None,
        };
        for child in children {
            self.node_mut(child)?.parent = None;
        }

        match reused {
            Some(text) => {
                self.node_mut(text)?.kind = NodeKind::Text(value.to_string());
                self.node_mut(id)?.children.push(text);
            }
            None if !value.is_empty() => {
                let text = self.create_text(value);
                self.append_child(id, text)?;
            }
            None => {}
        }
        Ok(())
    }

    /// Value of the `className` property, empty if unset.
    pub fn class_name(&self, id: NodeId) -> Result<&str, DomError> {
        Ok(self
            .property(id, CLASS_NAME)?
            .and_then(PropValue::as_str)
            .unwrap_or_default())
    }

    /// Whether `className` lists `class`.
    pub fn has_class(&self, id: NodeId, class: &str) -> Result<bool, DomError> {
        Ok(self.class_name(id)?.split_whitespace().any(|c| c == class))
    }

    /// Adds `class` to `className` unless already present.
    pub fn class_list_add(&mut self, id: NodeId, class: &str) -> Result<(), DomError> {
        if self.has_class(id, class)? {
            return Ok(());
        }
        let current = self.class_name(id)?;
        let updated = if current.is_empty() {
            class.to_string()
        } else {
            format!("{current} {class}")
        };
        self.set_property(id, CLASS_NAME, updated.into())
    }

    /// Attached nodes in document order, starting at `body`.
    fn attached(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.body];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(node) = self.nodes.get(id.0) {
                stack.extend(node.children.iter().rev());
            }
        }
        order
    }

    /// First attached node whose `id` property equals `value`.
    pub fn find_by_id(&self, value: &str) -> Option<NodeId> {
        self.attached().into_iter().find(|id| {
            self.nodes[id.0]
                .properties
                .get(ID)
                .and_then(PropValue::as_str)
                == Some(value)
        })
    }

    /// All attached nodes listing `class`, in document order.
    pub fn query_by_class(&self, class: &str) -> Vec<NodeId> {
        self.attached()
            .into_iter()
            .filter(|id| self.has_class(*id, class).unwrap_or(false))
            .collect()
    }

    /// Indented dump of the attached tree, one node per line.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.write_outline(self.body, 0, &mut out);
        out
    }

    fn write_outline(&self, id: NodeId, depth: usize, out: &mut String) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        let indent = "  ".repeat(depth);
        match &node.kind {
            NodeKind::Text(value) => {
                let _ = writeln!(out, "{indent}{value:?}");
            }
            NodeKind::Element(tag) => {
                let _ = write!(out, "{indent}<{tag}");
                for (key, value) in &node.properties {
                    match value {
                        PropValue::Value(v) => {
                            let _ = write!(out, " {key}={v}");
                        }
                        PropValue::Handler(_) => {
                            let _ = write!(out, " {key}=<fn>");
                        }
                    }
                }
                let _ = writeln!(out, ">");
                for child in &node.children {
                    self.write_outline(*child, depth + 1, out);
                }
            }
        }
    }

    /// Dispatches `event` on `target`, invoking its matching listeners in
    /// registration order.
    ///
    /// The document is only borrowed while collecting listeners, so
    /// handlers are free to mutate it. Event names outside the allow-list
    /// never have listeners and invoke nothing.
    ///
    /// Returns the number of listeners invoked.
    #[instrument(skip(document))]
    pub fn dispatch(
        document: &Rc<RefCell<Self>>,
        target: NodeId,
        event: &str,
    ) -> Result<usize, DomError> {
        let handlers: Vec<EventHandler> = {
            let doc = document.borrow();
            let node = doc.node(target)?;
            match EventName::from_str(event) {
                Ok(name) => node
                    .listeners
                    .iter()
                    .filter(|(n, _)| *n == name)
                    .map(|(_, h)| h.clone())
                    .collect(),
                Err(_) => Vec::new(),
            }
        };
        let fired = Event::new(event.to_string(), target);
        for handler in &handlers {
            handler.call(&fired);
        }
        trace!(invoked = handlers.len(), "Event dispatched");
        Ok(handlers.len())
    }
}

impl Host for MemoryDocument {
    fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(tag.to_string()))
    }

    fn create_text(&mut self, value: &str) -> NodeId {
        self.push(NodeKind::Text(value.to_string()))
    }

    fn set_property(&mut self, node: NodeId, key: &str, value: PropValue) -> Result<(), DomError> {
        trace!(%node, key, "Setting property");
        self.node_mut(node)?.properties.insert(key.to_string(), value);
        Ok(())
    }

    fn add_event_listener(
        &mut self,
        node: NodeId,
        event: EventName,
        handler: EventHandler,
    ) -> Result<(), DomError> {
        self.node_mut(node)?.listeners.push((event, handler));
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if let NodeKind::Text(_) = self.node(parent)?.kind {
            return Err(DomError::new(DomErrorKind::TextNodeParent(parent)));
        }
        self.node(child)?;

        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(DomError::new(DomErrorKind::Cycle { parent, child }));
            }
            cursor = self.node(id)?.parent;
        }

        if let Some(old) = self.node(child)?.parent {
            debug!(%child, %old, "Moving node to new parent");
            self.node_mut(old)?.children.retain(|c| *c != child);
        }
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }
}
