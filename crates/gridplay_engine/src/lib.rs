//! Pure game logic for N x N tic-tac-toe.
//!
//! The engine owns the board, the turn order and win detection. It knows
//! nothing about how the board is drawn; front ends drive it through
//! [`GridEngine::make_move`] and [`GridEngine::restart`].
//!
//! # Win policies
//!
//! Two policies are available and one must be picked explicitly when the
//! engine is built:
//!
//! - [`WinPolicy::FullLine`]: a row, column or one of the two main
//!   diagonals must be entirely one mark.
//! - [`WinPolicy::FixedRun`]: a contiguous run of 4 (3 on a 3x3 board)
//!   anywhere in a row, column or any diagonal wins.
//!
//! # Example
//!
//! ```
//! use gridplay_engine::{GridEngine, Mark, MoveOutcome, WinPolicy};
//!
//! # fn main() -> Result<(), gridplay_engine::GridError> {
//! let mut engine = GridEngine::new(3, Mark::X, WinPolicy::FullLine)?;
//! for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0)] {
//!     engine.make_move(row, col)?;
//! }
//! assert_eq!(engine.make_move(2, 2)?, MoveOutcome::Won { mark: Mark::X });
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod rules;
mod types;

pub use engine::{GridEngine, IgnoreReason, MoveOutcome};
pub use error::{GridError, GridErrorKind};
pub use types::{Board, Cell, GameStatus, MAX_BOARD_SIZE, MIN_BOARD_SIZE, Mark, WinPolicy};
