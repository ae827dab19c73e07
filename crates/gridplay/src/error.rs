//! Errors raised while wiring the game into the document.

use derive_more::{Display, Error, From};
use gridplay_dom::DomError;
use gridplay_engine::GridError;

/// Failure inside the controller glue.
#[derive(Debug, Clone, Display, Error, From)]
pub enum ControllerError {
    /// The engine rejected a request.
    #[display("{_0}")]
    Grid(GridError),
    /// The document rejected a node operation.
    #[display("{_0}")]
    Dom(DomError),
}
