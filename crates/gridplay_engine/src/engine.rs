//! Stateful game engine: board, turn order and terminal flag.

use tracing::{debug, info, instrument};

use crate::error::{GridError, GridErrorKind};
use crate::rules;
use crate::types::{Board, Cell, GameStatus, Mark, WinPolicy};

/// Why a move request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Target cell already holds a mark.
    Occupied,
    /// A winner has already been found.
    GameOver,
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark was written and play continues.
    Placed {
        /// Mark that was written.
        mark: Mark,
    },
    /// Mark was written and completed a winning run.
    Won {
        /// The winning mark.
        mark: Mark,
    },
    /// Request left the game untouched.
    Ignored(IgnoreReason),
}

/// N x N tic-tac-toe engine.
///
/// Owns the board and the turn state exclusively. All calls are
/// synchronous; a move is fully applied before the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEngine {
    board: Board,
    policy: WinPolicy,
    starting_mark: Mark,
    active_mark: Mark,
    terminal: bool,
    winner: Option<Mark>,
}

impl GridEngine {
    /// Creates an engine with an empty `size * size` board.
    ///
    /// # Errors
    ///
    /// Returns [`GridErrorKind::InvalidSize`] when `size` is below 3 or
    /// above [`MAX_BOARD_SIZE`](crate::MAX_BOARD_SIZE).
    #[instrument]
    pub fn new(size: usize, starting_mark: Mark, policy: WinPolicy) -> Result<Self, GridError> {
        let board = Board::new(size)?;
        info!(size, %starting_mark, %policy, "Grid engine created");
        Ok(Self {
            board,
            policy,
            starting_mark,
            active_mark: starting_mark,
            terminal: false,
            winner: None,
        })
    }

    /// Plays the active mark at `(row, col)`.
    ///
    /// Moves on an occupied cell or after the game is over are ignored and
    /// leave the engine untouched. The active mark flips after every
    /// accepted move, including the winning one.
    ///
    /// # Errors
    ///
    /// Returns [`GridErrorKind::IndexOutOfRange`] when `(row, col)` is off
    /// the board. This is checked before anything else.
    #[instrument(skip(self), fields(active = %self.active_mark))]
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GridError> {
        let size = self.board.size();
        let cell = self
            .board
            .get(row, col)
            .ok_or_else(|| GridError::new(GridErrorKind::IndexOutOfRange { row, col, size }))?;

        if self.terminal {
            debug!("Move ignored, game is over");
            return Ok(MoveOutcome::Ignored(IgnoreReason::GameOver));
        }
        if cell != Cell::Empty {
            debug!(?cell, "Move ignored, cell occupied");
            return Ok(MoveOutcome::Ignored(IgnoreReason::Occupied));
        }

        let mark = self.active_mark;
        self.board.set(row, col, Cell::Marked(mark))?;
        let winner = self.check_winner();
        if let Some(winner) = winner {
            info!(%winner, "Winner found");
            self.terminal = true;
            self.winner = Some(winner);
        }
        self.active_mark = mark.opponent();

        Ok(match winner {
            Some(mark) => MoveOutcome::Won { mark },
            None => {
                debug!(%mark, "Move placed");
                MoveOutcome::Placed { mark }
            }
        })
    }

    /// Scans the board for a winning run under the configured policy.
    pub fn check_winner(&self) -> Option<Mark> {
        rules::check_winner(&self.board, self.policy)
    }

    /// Returns the engine to its initial configuration.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.clear();
        self.terminal = false;
        self.winner = None;
        self.active_mark = self.starting_mark;
        info!(starting_mark = %self.starting_mark, "Game restarted");
    }

    /// Game status, reporting a draw for a full board with no winner.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(mark) => GameStatus::Won(mark),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Mark that plays next.
    pub fn active_mark(&self) -> Mark {
        self.active_mark
    }

    /// Mark restored by [`GridEngine::restart`].
    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// Configured win policy.
    pub fn policy(&self) -> WinPolicy {
        self.policy
    }

    /// Whether a winner has been found.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_small_board() {
        let err = GridEngine::new(2, Mark::X, WinPolicy::FullLine).unwrap_err();
        assert_eq!(err.kind(), GridErrorKind::InvalidSize { size: 2 });
    }

    #[test]
    fn test_flips_on_winning_move() {
        let mut engine = GridEngine::new(3, Mark::O, WinPolicy::FullLine).unwrap();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            engine.make_move(row, col).unwrap();
        }
        assert_eq!(engine.make_move(0, 2).unwrap(), MoveOutcome::Won { mark: Mark::O });
        assert!(engine.is_terminal());
        assert_eq!(engine.active_mark(), Mark::X);
        assert_eq!(engine.status(), GameStatus::Won(Mark::O));
    }

    #[test]
    fn test_out_of_range_checked_after_game_over() {
        let mut engine = GridEngine::new(3, Mark::X, WinPolicy::FullLine).unwrap();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.make_move(row, col).unwrap();
        }
        let err = engine.make_move(0, 7).unwrap_err();
        assert!(matches!(err.kind(), GridErrorKind::IndexOutOfRange { .. }));
    }
}
