//! Renderer and host error types.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::host::NodeId;

/// What went wrong while touching the live node tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DomErrorKind {
    /// Node handle does not belong to this host.
    #[display("unknown node {_0}")]
    UnknownNode(NodeId),
    /// Text nodes cannot hold children.
    #[display("text node {_0} cannot have children")]
    TextNodeParent(NodeId),
    /// Appending would make a node its own ancestor.
    #[display("appending {child} under {parent} would create a cycle")]
    Cycle {
        /// Intended parent.
        parent: NodeId,
        /// Intended child.
        child: NodeId,
    },
}

/// Host error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("DOM error: {} at {}:{}", kind, file, line)]
pub struct DomError {
    /// Error kind.
    pub kind: DomErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DomError {
    /// Creates a new DOM error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: DomErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> DomErrorKind {
        self.kind
    }
}
