//! Gridplay - tic-tac-toe on an N x N board.
//!
//! # Architecture
//!
//! - **Engine** ([`gridplay_engine`]): board, turn order, win detection.
//! - **Renderer** ([`gridplay_dom`]): element trees materialized into a
//!   live document.
//! - **Controller**: renders one button per cell and routes clicks into
//!   the engine.
//! - **Front ends**: an interactive terminal UI and a scripted runner.
//!
//! # Example
//!
//! ```
//! use gridplay::{Controller, GameConfig};
//!
//! # fn main() -> Result<(), gridplay::ControllerError> {
//! let controller = Controller::mount(&GameConfig::default())?;
//! controller.click(1, 1)?;
//! assert_eq!(controller.indicator_text()?, "O");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod error;
mod scoreboard;
mod script;
mod terminal;

pub use config::{ConfigError, GameConfig};
pub use controller::{
    BOARD_ID, CELL_CLASS, Controller, INDICATOR_ID, RESTART_ID, SCORE_ID, cell_id,
};
pub use error::ControllerError;
pub use scoreboard::Scoreboard;
pub use script::{ScriptReport, parse_moves, run_script};
pub use terminal::{CellView, DocumentView, move_cursor, run_terminal};
