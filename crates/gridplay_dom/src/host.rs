//! The capability a platform must offer to receive rendered trees.

use derive_more::Display;

use crate::element::PropValue;
use crate::error::DomError;
use crate::event::{EventHandler, EventName};

/// Opaque handle to a live node owned by a [`Host`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("#{_0}")]
pub struct NodeId(pub(crate) usize);

/// A live UI tree that rendered elements are materialized into.
///
/// Nodes are created detached and become part of the tree through
/// [`Host::append_child`].
pub trait Host {
    /// Creates a detached element node with the given tag.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Creates a detached text node.
    fn create_text(&mut self, value: &str) -> NodeId;

    /// Assigns a plain property on a node.
    fn set_property(&mut self, node: NodeId, key: &str, value: PropValue) -> Result<(), DomError>;

    /// Registers a listener for `event` on a node.
    fn add_event_listener(
        &mut self,
        node: NodeId,
        event: EventName,
        handler: EventHandler,
    ) -> Result<(), DomError>;

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError>;
}
