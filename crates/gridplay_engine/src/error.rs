//! Grid engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

use crate::types::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// What went wrong inside the grid engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GridErrorKind {
    /// Requested board size is outside the supported range.
    #[display(
        "board size {size} is outside the supported range {}..={}",
        MIN_BOARD_SIZE,
        MAX_BOARD_SIZE
    )]
    InvalidSize {
        /// Requested side length.
        size: usize,
    },
    /// A move addressed a cell outside the board.
    #[display("cell ({row}, {col}) is outside a {size}x{size} board")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },
}

/// Grid engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Grid error: {} at {}:{}", kind, file, line)]
pub struct GridError {
    /// Error kind.
    pub kind: GridErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GridError {
    /// Creates a new grid error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GridErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> GridErrorKind {
        self.kind
    }
}

impl From<GridErrorKind> for GridError {
    #[track_caller]
    fn from(kind: GridErrorKind) -> Self {
        Self::new(kind)
    }
}
