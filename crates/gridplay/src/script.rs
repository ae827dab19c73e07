//! Non-interactive play: replays clicks through the document and reports.

use gridplay_engine::{GameStatus, Mark};
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::{ConfigError, GameConfig};
use crate::controller::Controller;
use crate::error::ControllerError;
use crate::scoreboard::Scoreboard;

/// Parses a move list such as `"0,0 1,1 2,2"`.
#[instrument]
pub fn parse_moves(moves: &str) -> Result<Vec<(usize, usize)>, ConfigError> {
    moves
        .split_whitespace()
        .map(|pair| -> Result<(usize, usize), ConfigError> {
            let (row, col) = pair
                .split_once(',')
                .ok_or_else(|| ConfigError::new(format!("Move '{}' is not 'row,col'", pair)))?;
            let parse = |v: &str| {
                v.trim()
                    .parse::<usize>()
                    .map_err(|e| ConfigError::new(format!("Bad coordinate in '{}': {}", pair, e)))
            };
            Ok((parse(row)?, parse(col)?))
        })
        .collect()
}

/// Outcome of a scripted session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptReport {
    /// Board rendered as text.
    pub board: String,
    /// Final game status.
    pub status: GameStatus,
    /// Mark to move next.
    pub active_mark: Mark,
    /// Status indicator text as shown in the document.
    pub indicator: String,
    /// Score list entries as shown in the document.
    pub scores: Vec<String>,
    /// Session tally.
    pub scoreboard: Scoreboard,
}

impl std::fmt::Display for ScriptReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        writeln!(f, "Status: {}", self.indicator)?;
        for entry in &self.scores {
            writeln!(f, "- {entry}")?;
        }
        Ok(())
    }
}

/// Mounts a game, clicks every cell in `moves` and reports the result.
///
/// With `restart_after` the restart button is clicked once all moves are
/// played.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn run_script(
    config: &GameConfig,
    moves: &[(usize, usize)],
    restart_after: bool,
) -> Result<ScriptReport, ControllerError> {
    let controller = Controller::mount(config)?;
    for &(row, col) in moves {
        controller.click(row, col)?;
    }
    if restart_after {
        controller.restart()?;
    }

    let engine = controller.engine();
    let report = ScriptReport {
        board: engine.board().to_string(),
        status: engine.status(),
        active_mark: engine.active_mark(),
        indicator: controller.indicator_text()?,
        scores: controller.score_entries()?,
        scoreboard: controller.scoreboard(),
    };
    info!(status = ?report.status, "Script finished");
    Ok(report)
}
