//! Board fixtures shared by the unit tests.

use crate::game::{Board, Player, COLS, ROWS};

/// Every cell filled with a two-row stripe pattern that holds no four in a
/// row in any direction.
pub(crate) fn drawn_board() -> Board {
    let mut board = Board::new();
    for col in 0..COLS {
        for row in 0..ROWS {
            let player = if (row / 2 + col) % 2 == 0 {
                Player::Red
            } else {
                Player::Yellow
            };
            assert_eq!(board.place(col, player), Some(row));
        }
    }
    board
}

/// Drop pieces in the given order.
pub(crate) fn board_from(moves: &[(usize, Player)]) -> Board {
    let mut board = Board::new();
    for &(col, player) in moves {
        board
            .place(col, player)
            .unwrap_or_else(|| panic!("column {col} is full"));
    }
    board
}
