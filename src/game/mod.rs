//! Core Connect Four game logic: board representation with gravity drops and
//! line analysis, player types, and game state machine with immutable
//! transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Location, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
