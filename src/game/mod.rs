//! Core Connect Four game logic: board representation, win detection, player
//! types, and a turn-tracking game state.

mod board;
mod player;
mod state;

pub(crate) use board::DIRECTIONS;
pub use board::{Board, Cell, Moves, CENTER_COL, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
