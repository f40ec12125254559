//! file: mod.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:41 Sunday
//! brief: timer- and UI-free game rules

mod board;
mod cell;
mod controller;
mod difficulty;
mod direction;
mod food;
mod state;
mod status;

pub use board::{Board, DEFAULT_HEIGHT_PX, DEFAULT_STEP_PX, DEFAULT_WIDTH_PX};
pub use cell::Cell;
pub use controller::{LoopController, LoopState};
pub use difficulty::Difficulty;
pub use direction::Direction;
pub use food::place_food;
pub use state::{GameState, StepOutcome};
pub use status::{Collision, GameStatus};
