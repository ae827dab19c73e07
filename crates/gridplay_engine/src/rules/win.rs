//! Win detection.
//!
//! Candidate lines are scanned in a fixed order: rows top to bottom, then
//! columns left to right, then the top-right to bottom-left diagonals
//! (`row + col` ascending), then the top-left to bottom-right diagonals
//! (`col - row` descending, starting from the top-right corner). Within a
//! line X is tested before O. The first hit is the winner.

use strum::IntoEnumIterator;
use tracing::instrument;

use crate::{Board, Cell, Mark, WinPolicy};

/// Builds every line that can hold a winning run under `policy`.
///
/// [`WinPolicy::FullLine`] only considers the two main diagonals.
/// [`WinPolicy::FixedRun`] sweeps all `2n - 1` diagonals of each
/// orientation; cells that fall off the board are skipped, so short
/// diagonals near the corners yield short lines.
#[instrument(skip(board), fields(size = board.size()))]
pub fn candidate_lines(board: &Board, policy: WinPolicy) -> Vec<Vec<Cell>> {
    let n = board.size();
    let at = |row: usize, col: usize| board.get(row, col).unwrap_or_default();
    let mut lines = Vec::with_capacity(2 * n + 2 * (2 * n - 1));

    lines.extend((0..n).map(|row| (0..n).map(|col| at(row, col)).collect()));
    lines.extend((0..n).map(|col| (0..n).map(|row| at(row, col)).collect()));

    match policy {
        WinPolicy::FullLine => {
            lines.push((0..n).map(|i| at(i, n - 1 - i)).collect());
            lines.push((0..n).map(|i| at(i, i)).collect());
        }
        WinPolicy::FixedRun => {
            // Down-left diagonals: row + col == shift.
            lines.extend((0..2 * n - 1).map(|shift| {
                (0..n)
                    .filter_map(|row| {
                        shift
                            .checked_sub(row)
                            .filter(|col| *col < n)
                            .map(|col| at(row, col))
                    })
                    .collect()
            }));
            // Down-right diagonals: col - row == (n - 1) - shift.
            lines.extend((0..2 * n - 1).map(|shift| {
                (0..n)
                    .filter_map(|row| {
                        (row + n - 1)
                            .checked_sub(shift)
                            .filter(|col| *col < n)
                            .map(|col| at(row, col))
                    })
                    .collect()
            }));
        }
    }

    lines
}

/// Returns the first mark holding a winning run, if any.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board, policy: WinPolicy) -> Option<Mark> {
    let run = policy.run_length(board.size());
    candidate_lines(board, policy).iter().find_map(|line| {
        Mark::iter().find(|mark| has_run(line, *mark, run))
    })
}

/// Checks whether `line` contains `run` consecutive cells of `mark`.
///
/// Empty cells break a run.
fn has_run(line: &[Cell], mark: Mark, run: usize) -> bool {
    let mut streak = 0;
    for cell in line {
        if *cell == Cell::Marked(mark) {
            streak += 1;
            if streak >= run {
                return true;
            }
        } else {
            streak = 0;
        }
    }
    false
}
