//! Draw detection.

use tracing::instrument;

use super::win::check_winner;
use crate::{Board, WinPolicy};

/// Checks if the board is full (all cells marked).
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner under `policy`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board, policy: WinPolicy) -> bool {
    is_full(board) && check_winner(board, policy).is_none()
}
