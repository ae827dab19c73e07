//! Events, handlers and the listener allow-list.

use std::rc::Rc;
use std::str::FromStr;

use derive_new::new;
use tracing::{instrument, trace};

use crate::host::NodeId;

/// Event names that attribute keys may register listeners for.
///
/// `on<Name>` attributes whose name is not listed here are still assigned
/// as plain properties but never become listeners.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum EventName {
    /// Pointer click.
    Click,
    /// Value change.
    Change,
    /// Pointer entering the node.
    Mouseover,
}

/// Maps an attribute key such as `onClick` to the event it listens for.
///
/// Returns `None` for keys without the `on` prefix and for event names
/// outside the allow-list.
#[instrument]
pub fn listener_event(key: &str) -> Option<EventName> {
    let name = key.strip_prefix("on")?.to_lowercase();
    let event = EventName::from_str(&name).ok();
    if event.is_none() {
        trace!(key, "Not a recognized event attribute");
    }
    event
}

/// A dispatched event.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Event {
    name: String,
    target: NodeId,
}

impl Event {
    /// Event name as dispatched, e.g. `click`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node the event was dispatched on.
    pub fn target(&self) -> NodeId {
        self.target
    }
}

/// Shared callback invoked when an event fires.
///
/// Handlers are reference counted so the same callback can sit both in a
/// listener list and in a plain property. Two handlers are equal when they
/// share the same callback.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&Event)>);

impl EventHandler {
    /// Wraps a closure.
    pub fn new(callback: impl Fn(&Event) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    /// Invokes the callback.
    pub fn call(&self, event: &Event) {
        (self.0)(event)
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EventHandler({:p})", Rc::as_ptr(&self.0).cast::<()>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_listener_event_allow_list() {
        assert_eq!(listener_event("onClick"), Some(EventName::Click));
        assert_eq!(listener_event("onchange"), Some(EventName::Change));
        assert_eq!(listener_event("onMouseOver"), Some(EventName::Mouseover));
        assert_eq!(listener_event("onFocus"), None);
        assert_eq!(listener_event("click"), None);
        assert_eq!(listener_event("id"), None);
    }

    #[test]
    fn test_event_name_display() {
        assert_eq!(EventName::Mouseover.to_string(), "mouseover");
    }

    #[test]
    fn test_handler_identity() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let handler = EventHandler::new(move |_| counter.set(counter.get() + 1));
        let same = handler.clone();
        let other = EventHandler::new(|_| {});

        assert_eq!(handler, same);
        assert_ne!(handler, other);

        same.call(&Event::new("click".to_string(), NodeId(0)));
        assert_eq!(hits.get(), 1);
    }
}
