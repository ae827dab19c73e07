//! Game rules for the grid engine.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage and turn order so they can be tested in isolation.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{candidate_lines, check_winner};
