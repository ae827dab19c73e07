//! Session tally of finished games.

use derive_getters::Getters;
use gridplay_engine::Mark;
use serde::Serialize;

/// Winners of every game finished since the app started.
///
/// Survives restarts; only the board is reset between games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Scoreboard {
    /// Winning marks in the order the games ended.
    winners: Vec<Mark>,
}

impl Scoreboard {
    /// Records a finished game.
    pub fn record(&mut self, winner: Mark) {
        self.winners.push(winner);
    }

    /// Number of games `mark` has won.
    pub fn wins(&self, mark: Mark) -> usize {
        self.winners.iter().filter(|w| **w == mark).count()
    }
}
