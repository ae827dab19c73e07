//! Core domain types for the grid engine.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{GridError, GridErrorKind};

/// Smallest supported board side length.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board side length.
pub const MAX_BOARD_SIZE: usize = 64;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X.
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

/// How a winner is recognised.
///
/// The policy is fixed when an engine is built. Nothing switches policy
/// based on the board size.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum WinPolicy {
    /// A whole row, column or main diagonal of one mark.
    #[default]
    FullLine,
    /// A contiguous run of [`WinPolicy::run_length`] marks in any row,
    /// column or diagonal.
    FixedRun,
}

impl WinPolicy {
    /// Length of the run that wins on a board of side `size`.
    #[instrument]
    pub fn run_length(self, size: usize) -> usize {
        match self {
            WinPolicy::FullLine => size,
            WinPolicy::FixedRun if size >= 4 => 4,
            WinPolicy::FixedRun => 3,
        }
    }
}

/// Square board of `size * size` cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`GridErrorKind::InvalidSize`] when `size` is outside
    /// [`MIN_BOARD_SIZE`]`..=`[`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GridError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GridError::new(GridErrorKind::InvalidSize { size }));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at `(row, col)`, or `None` off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Sets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridErrorKind::IndexOutOfRange`] off the board.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let i = self.index(row, col).ok_or_else(|| {
            GridError::new(GridErrorKind::IndexOutOfRange {
                row,
                col,
                size: self.size,
            })
        })?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Resets every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                }
            }
        }
        Ok(())
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A mark completed a winning line.
    Won(Mark),
    /// Every cell is filled and nobody won.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_board_rejects_small_size() {
        let err = Board::new(2).unwrap_err();
        assert_eq!(err.kind(), GridErrorKind::InvalidSize { size: 2 });
    }

    #[test]
    fn test_board_rejects_oversized_board() {
        assert!(Board::new(MAX_BOARD_SIZE).is_ok());
        let err = Board::new(100_000).unwrap_err();
        assert_eq!(err.kind(), GridErrorKind::InvalidSize { size: 100_000 });
        assert!(Board::new(usize::MAX).is_err());
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.cells().len(), 16);
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_out_of_range() {
        let mut board = Board::new(3).unwrap();
        let err = board.set(3, 0, Cell::Marked(Mark::X)).unwrap_err();
        assert!(matches!(
            err.kind(),
            GridErrorKind::IndexOutOfRange { row: 3, col: 0, size: 3 }
        ));
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3).unwrap();
        board.set(0, 0, Cell::Marked(Mark::X)).unwrap();
        board.set(1, 1, Cell::Marked(Mark::O)).unwrap();
        assert_eq!(board.to_string(), "X . .\n. O .\n. . .");
    }

    #[test]
    fn test_run_length() {
        assert_eq!(WinPolicy::FixedRun.run_length(3), 3);
        assert_eq!(WinPolicy::FixedRun.run_length(4), 4);
        assert_eq!(WinPolicy::FixedRun.run_length(9), 4);
        assert_eq!(WinPolicy::FullLine.run_length(5), 5);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Mark::from_str("o").unwrap(), Mark::O);
        assert_eq!(WinPolicy::from_str("fixed_run").unwrap(), WinPolicy::FixedRun);
        assert_eq!(WinPolicy::FullLine.to_string(), "full_line");
    }
}
