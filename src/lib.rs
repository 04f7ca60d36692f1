//! # Minimax Connect Four
//!
//! A Connect Four board model with exact win detection and an automated
//! opponent that picks columns with depth-limited alpha-beta minimax over a
//! hand-tuned positional heuristic.
//!
//! ## Modules
//!
//! - [`game`]: Board, placement, win/draw detection, player, turn state
//! - [`ai`]: Move ordering, evaluation, search, move selection, agents
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//!
//! ```
//! use minimax_connect_four::ai::{MoveSelector, SearchConfig};
//! use minimax_connect_four::game::{Board, Player};
//!
//! let mut board = Board::new();
//! for col in 0..3 {
//!     board.place(col, Player::Yellow);
//! }
//! let mut engine = MoveSelector::new(Player::Yellow, SearchConfig::default()).unwrap();
//! assert_eq!(engine.choose_move(&board).unwrap(), 3);
//! ```

pub mod ai;
pub mod config;
pub mod error;
pub mod game;

#[cfg(test)]
pub(crate) mod test_utils;
