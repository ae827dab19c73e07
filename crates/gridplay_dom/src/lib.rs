//! Minimal element-tree renderer.
//!
//! Callers describe UI as [`ElementNode`] trees built with [`make_element`]
//! and [`make_text`], then hand them to [`render`], which materializes the
//! tree into a [`Host`]. There is no diffing or reconciliation: each
//! `render` call builds a fresh subtree and attaches it to a container.
//!
//! [`MemoryDocument`] is an in-memory host with event dispatch and the
//! id/class queries front ends need.
//!
//! ```
//! use gridplay_dom::{MemoryDocument, Props, make_element, make_text, render};
//!
//! # fn main() -> Result<(), gridplay_dom::DomError> {
//! let mut doc = MemoryDocument::new();
//! let container = doc.create_container("main")?;
//! let node = make_element("div", Props::new().with("id", "x"), [make_text("hi")]);
//! let div = render(&mut doc, node, container)?;
//! assert_eq!(doc.text_content(div)?, "hi");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod element;
mod error;
mod event;
mod host;
mod memory;
mod render;

pub use element::{CHILDREN_KEY, ElementNode, Props, PropValue, TEXT_TAG, make_element, make_text};
pub use error::{DomError, DomErrorKind};
pub use event::{Event, EventHandler, EventName, listener_event};
pub use host::{Host, NodeId};
pub use memory::MemoryDocument;
pub use render::render;
