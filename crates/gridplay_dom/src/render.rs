//! Materializes element trees into a host.

use tracing::{instrument, trace};

use crate::element::{ElementNode, PropValue};
use crate::error::DomError;
use crate::event::listener_event;
use crate::host::{Host, NodeId};

/// Renders `node` and its subtree into `host`, appending it to `container`.
///
/// Every attribute is assigned as a plain property. Handler attributes
/// named `on<Event>` for an allowed event are also registered as
/// listeners, so the callback ends up in both places. Children are built
/// in order before the finished node is attached to `container`.
///
/// Returns the handle of the new node.
///
/// # Errors
///
/// Fails if the host rejects a node handle, e.g. an unknown container or a
/// text node used as container.
#[instrument(skip_all, fields(tag = node.tag(), %container))]
pub fn render<H: Host>(host: &mut H, node: ElementNode, container: NodeId) -> Result<NodeId, DomError> {
    let id = match node {
        ElementNode::Text(value) => host.create_text(&value),
        ElementNode::Element {
            tag,
            props,
            children,
        } => {
            let id = host.create_element(&tag);
            for (key, value) in props {
                if let (Some(event), PropValue::Handler(handler)) = (listener_event(&key), &value) {
                    trace!(%id, %event, "Registering listener");
                    host.add_event_listener(id, event, handler.clone())?;
                }
                host.set_property(id, &key, value)?;
            }
            for child in children {
                render(host, child, id)?;
            }
            id
        }
    };
    host.append_child(container, id)?;
    Ok(id)
}
